//! Inventory Table Component
//!
//! Mounts the table controller and carries out the actions it returns:
//! requests, confirmation prompts, alerts and focus moves.

use gloo::dialogs;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::config::InventoryConfig;
use crate::context::{use_app_context, AppContext};
use crate::models::{Field, RowId};
use crate::table::{Action, Outcome, Submission, TableController};

use super::{ModeToolbar, TableRow};

/// Reactive handle on the table, provided to rows and toolbar via context
#[derive(Clone, Copy)]
pub struct TableHandle {
    pub state: RwSignal<TableController>,
    /// Cell that should take focus once it is rendered
    pub focus: RwSignal<Option<(RowId, Field)>>,
    /// Set while a blocking alert is open; blur events fired by the dialog
    /// must not start another commit
    alerting: StoredValue<bool>,
    app: AppContext,
}

impl TableHandle {
    pub fn new(inventory: &InventoryConfig, app: AppContext) -> Self {
        Self {
            state: RwSignal::new(TableController::new(&inventory.items, inventory.show_location)),
            focus: RwSignal::new(None),
            alerting: StoredValue::new(false),
            app,
        }
    }

    /// Call into the controller and carry out whatever it asks for
    pub fn run(&self, f: impl FnOnce(&mut TableController) -> Action) {
        if self.alerting.try_get_value().unwrap_or(true) {
            return;
        }
        if let Some(action) = self.state.try_update(f) {
            self.dispatch(action);
        }
    }

    pub fn request_focus(&self, id: RowId, field: Field) {
        self.focus.set(Some((id, field)));
    }

    fn dispatch(&self, action: Action) {
        match action {
            Action::Idle => {}
            Action::Submit(submission) => self.send(submission),
            Action::Confirm(pending) => {
                if !dialogs::confirm(pending.prompt()) {
                    log::debug!("[TABLE] delete of {:?} declined", pending.item_ids());
                    return;
                }
                if let Some(submission) = self.state.try_update(|t| t.confirm_delete(pending)).flatten() {
                    self.send(submission);
                }
            }
            Action::Alert { message, focus } => self.alert(&message, focus),
        }
    }

    fn alert(&self, message: &str, focus: Option<(RowId, Field)>) {
        self.alerting.set_value(true);
        dialogs::alert(message);
        self.alerting.set_value(false);
        if focus.is_some() {
            self.focus.set(focus);
        }
    }

    fn send(&self, submission: Submission) {
        let handle = *self;
        let endpoint = self.app.endpoint();
        let csrf_token = self.app.csrf_token();
        log::info!("[TABLE] sending {} for {:?}", submission.mutation.action(), submission.target);

        spawn_local(async move {
            let result = commands::submit_mutation(&endpoint, csrf_token.as_deref(), &submission.mutation).await;
            let Some(outcome) = handle.state.try_update(|t| t.apply(submission, result)) else {
                return;
            };
            match outcome {
                Outcome::Committed(id) => log::info!("[TABLE] {:?} saved", id),
                Outcome::Removed(ids) => log::info!("[TABLE] removed {} row(s)", ids.len()),
                Outcome::Reload => handle.app.reload(),
                Outcome::Failed { alert, focus } => handle.alert(&alert, focus),
            }
        });
    }
}

pub fn use_table() -> TableHandle {
    use_context::<TableHandle>().expect("TableHandle should be provided")
}

fn typing_in_field(ev: &web_sys::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .is_some_and(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
}

/// Editable inventory table with mode toolbar and add-row button
#[component]
pub fn InventoryTable(inventory: InventoryConfig) -> impl IntoView {
    let app = use_app_context();
    let table = TableHandle::new(&inventory, app);
    provide_context(table);

    // Delete key acts as the delete-selected button while in delete mode
    let delete_key = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Delete" && !typing_in_field(&ev) {
            table.run(TableController::delete_selected);
        }
    });
    on_cleanup(move || delete_key.remove());

    let columns = table.state.with_untracked(|t| t.columns());
    let container_class = move || match table.state.with(|t| t.mode().container_class()) {
        Some(mode) => format!("inventory-table-container {}", mode),
        None => "inventory-table-container".to_string(),
    };
    let row_ids = move || table.state.with(|t| t.row_ids());

    let add_row = move |_| {
        if let Some(id) = table.state.try_update(TableController::add_row) {
            table.request_focus(id, Field::Name);
        }
    };

    view! {
        <ModeToolbar />
        <div class=container_class>
            <table class="inventory-table">
                <thead>
                    <tr>
                        {columns.iter().map(|field| view! { <th>{field.label()}</th> }).collect_view()}
                        <th>"DATE ADDED"</th>
                        <th class="actions-header"></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=row_ids
                        key=|id| *id
                        children=move |id| view! { <TableRow id=id /> }
                    />
                </tbody>
            </table>
            <Show when=move || table.state.with(|t| t.rows().is_empty())>
                <p class="empty-table">"No items yet."</p>
            </Show>
            <div class="add-button-container">
                <button type="button" class="add-item-btn" on:click=add_row>
                    "+ Add Item"
                </button>
            </div>
        </div>
    }
}
