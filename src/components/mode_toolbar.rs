//! Mode Toolbar Component
//!
//! Edit/delete mode toggles plus the bulk-save and delete-selected buttons.

use leptos::prelude::*;

use crate::table::{Mode, TableController};

use super::inventory_table::use_table;

#[component]
pub fn ModeToolbar() -> impl IntoView {
    let table = use_table();
    let mode = move || table.state.with(|t| t.mode());
    let selected_count = move || table.state.with(|t| t.selected_count());
    let batch_busy = move || table.state.with(|t| t.batch_in_flight());

    view! {
        <div class="table-toolbar">
            <button
                type="button"
                class="edit-mode-btn"
                class:active=move || mode() == Mode::Edit
                on:click=move |_| table.run(TableController::toggle_edit)
            >
                {move || if mode() == Mode::Edit { "Done" } else { "Edit" }}
            </button>
            <Show when=move || mode() == Mode::Edit>
                <button
                    type="button"
                    class="save-changes-btn"
                    disabled=batch_busy
                    on:click=move |_| table.run(TableController::save_all)
                >
                    {move || if batch_busy() { "Saving..." } else { "Save changes" }}
                </button>
            </Show>
            <button
                type="button"
                class="delete-mode-btn"
                class:active=move || mode() == Mode::Delete
                on:click=move |_| table.run(TableController::toggle_delete)
            >
                {move || if mode() == Mode::Delete { "Cancel" } else { "Delete" }}
            </button>
            <Show when=move || mode() == Mode::Delete>
                <button
                    type="button"
                    class="delete-selected-btn"
                    disabled=move || selected_count() == 0 || batch_busy()
                    on:click=move |_| table.run(TableController::delete_selected)
                >
                    {move || format!("Delete selected ({})", selected_count())}
                </button>
            </Show>
        </div>
    }
}
