//! Table Row Component
//!
//! One inventory row: editable cells, date column and delete affordance.

use leptos::prelude::*;

use crate::models::{Field, RowId};
use crate::table::CommitTrigger;

use super::inventory_table::use_table;

#[component]
pub fn TableRow(id: RowId) -> impl IntoView {
    let table = use_table();
    let columns = table.state.with_untracked(|t| t.columns());

    let date_added = move || {
        table.state.with(|t| t.row(id).map(|r| r.date_added().to_string()).unwrap_or_default())
    };
    let selected = move || table.state.with(|t| t.is_selected(id));
    let busy = move || table.state.with(|t| t.is_busy(id));

    view! {
        <tr
            class="table-row"
            class:new-row=id.is_transient()
            class:selected=selected
            class:busy=busy
            data-item-id=id.attr()
        >
            {columns.iter().map(|field| view! { <EditableCell id=id field=*field /> }).collect_view()}
            <td class="date-cell" data-label="DATE ADDED">{date_added}</td>
            <td class="actions-cell">
                <button
                    type="button"
                    class="delete-icon"
                    class:selected=selected
                    title="Delete"
                    disabled=busy
                    on:click=move |ev| {
                        ev.stop_propagation();
                        table.run(|t| t.delete_clicked(id));
                    }
                >
                    <i class="fas fa-trash"></i>
                </button>
            </td>
        </tr>
    }
}

/// Static text, or an input while the row is editing
#[component]
fn EditableCell(id: RowId, field: Field) -> impl IntoView {
    let table = use_table();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    // Escape blurs the input itself; that blur must not commit
    let escaping = StoredValue::new(false);

    let editing = move || table.state.with(|t| t.row(id).is_some_and(|r| r.is_editing()));
    let value = move || table.state.with(|t| t.row(id).map(|r| r.value(field).to_string()).unwrap_or_default());
    let busy = move || table.state.with(|t| t.is_busy(id));
    let input_type = if field == Field::Quantity { "number" } else { "text" };

    Effect::new(move |_| {
        if table.focus.get() != Some((id, field)) {
            return;
        }
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
            table.focus.set(None);
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            table.run(|t| t.commit(id, CommitTrigger::Enter));
        }
        "Escape" | "Esc" => {
            ev.prevent_default();
            let still_shown = table.state.try_update(|t| t.cancel_field(id, field)).unwrap_or(false);
            if still_shown {
                if let Some(input) = input_ref.get_untracked().filter(|i| !i.disabled()) {
                    escaping.set_value(true);
                    let _ = input.blur();
                }
            }
        }
        _ => {}
    };

    let on_blur = move |_| {
        if escaping.try_update_value(std::mem::take).unwrap_or(true) {
            return;
        }
        table.run(|t| t.commit(id, CommitTrigger::Blur));
    };

    view! {
        <td class="editable-cell" data-label=field.label()>
            <Show
                when=editing
                fallback=move || view! { <span class="display-text">{value}</span> }
            >
                <input
                    node_ref=input_ref
                    class="edit-input"
                    type=input_type
                    placeholder=field.placeholder()
                    prop:value=value
                    disabled=busy
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        table.state.update(|t| t.set_value(id, field, text));
                    }
                    on:keydown=on_keydown
                    on:blur=on_blur
                />
            </Show>
        </td>
    }
}
