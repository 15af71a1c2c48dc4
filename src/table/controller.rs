//! Table Controller
//!
//! Single state object for the inventory table, created once per page load.
//! Handlers call into it and get back an [`Action`] telling them what to do
//! next (send a request, ask for confirmation, or alert); replies are fed
//! back through [`TableController::apply`].

use std::collections::BTreeMap;

use crate::error::{MutationError, ValidationError};
use crate::models::{Field, Item, RowId};
use crate::table::editor::{validate, OriginalValues};
use crate::table::mode::{Mode, ModeController, Transition};
use crate::table::mutation::{Mutation, MutationResponse, NewRow, Outcome, SavedRow, Submission, Target};
use crate::table::row::RowModel;
use crate::table::selection::SelectionSet;

/// What the event handler must do after calling the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Idle,
    Submit(Submission),
    Confirm(PendingDelete),
    Alert {
        message: String,
        focus: Option<(RowId, Field)>,
    },
}

impl Action {
    fn rejected(id: RowId, err: ValidationError) -> Self {
        Action::Alert { message: err.to_string(), focus: Some((id, err.field())) }
    }
}

/// A delete waiting on user confirmation.
///
/// The only way to get a delete [`Submission`] is
/// [`TableController::confirm_delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    prompt: String,
    target: Target,
    item_ids: Vec<u32>,
}

impl PendingDelete {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn item_ids(&self) -> &[u32] {
        &self.item_ids
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTrigger {
    Enter,
    Blur,
}

#[derive(Debug, Clone, Default)]
pub struct TableController {
    show_location: bool,
    rows: Vec<RowModel>,
    modes: ModeController,
    originals: OriginalValues,
    selection: SelectionSet,
    /// Rows with an unsettled request, with the edit session that sent it
    in_flight: BTreeMap<RowId, u32>,
    batch_in_flight: bool,
    edit_session: u32,
    next_transient: u32,
}

impl TableController {
    pub fn new(items: &[Item], show_location: bool) -> Self {
        Self {
            show_location,
            rows: items.iter().map(RowModel::from_item).collect(),
            ..Default::default()
        }
    }

    // ========================
    // Queries
    // ========================

    pub fn mode(&self) -> Mode {
        self.modes.mode()
    }

    pub fn columns(&self) -> &'static [Field] {
        Field::columns(self.show_location)
    }

    pub fn rows(&self) -> &[RowModel] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&RowModel> {
        self.rows.iter().find(|r| r.id() == id)
    }

    pub fn row_ids(&self) -> Vec<RowId> {
        self.rows.iter().map(RowModel::id).collect()
    }

    pub fn is_selected(&self, id: RowId) -> bool {
        id.saved().is_some_and(|id| self.selection.contains(id))
    }

    pub fn selected_count(&self) -> usize {
        self.selection.selected_count()
    }

    /// True while a request touching this row is unsettled
    pub fn is_busy(&self, id: RowId) -> bool {
        self.batch_in_flight || self.in_flight.contains_key(&id)
    }

    pub fn batch_in_flight(&self) -> bool {
        self.batch_in_flight
    }

    // ========================
    // Mode Controller
    // ========================

    pub fn toggle_edit(&mut self) -> Action {
        if self.modes.is(Mode::Edit) {
            return match self.flush_pending() {
                Ok(Some(submission)) => Action::Submit(submission),
                Ok(None) => {
                    self.modes.reset();
                    self.leave_edit();
                    Action::Idle
                }
                Err(action) => action,
            };
        }
        let transition = self.modes.toggle_edit();
        self.after_transition(transition);
        Action::Idle
    }

    pub fn toggle_delete(&mut self) -> Action {
        let flush = if self.modes.is(Mode::Edit) {
            match self.flush_pending() {
                Ok(flush) => flush,
                Err(action) => return action,
            }
        } else {
            None
        };
        let transition = self.modes.toggle_delete();
        self.after_transition(transition);
        flush.map(Action::Submit).unwrap_or(Action::Idle)
    }

    fn after_transition(&mut self, transition: Transition) {
        log::debug!("[TABLE] mode transition {:?}", transition);
        if transition.exited(Mode::Edit) {
            self.leave_edit();
        }
        if transition.exited(Mode::Delete) {
            self.selection.clear();
        }
        if let Transition::Entered { to: Mode::Edit, .. } = transition {
            self.edit_session += 1;
            // A row still awaiting its reply keeps the baseline it was edited from
            let pending: Vec<_> = self
                .in_flight
                .keys()
                .filter_map(|id| self.originals.get(*id).map(|values| (*id, values.clone())))
                .collect();
            self.originals.capture(&self.rows);
            for (id, values) in pending {
                self.originals.commit(id, values);
            }
            for row in &mut self.rows {
                row.set_editing(true);
            }
        }
    }

    /// Rows return to static display; edits that were not flushed are dropped
    fn leave_edit(&mut self) {
        for row in &mut self.rows {
            if !self.in_flight.contains_key(&row.id()) {
                self.originals.restore_row(row);
            }
            row.set_editing(false);
        }
    }

    /// Build the update for the first row with unsaved edits
    fn flush_pending(&mut self) -> Result<Option<Submission>, Action> {
        let dirty = self
            .rows
            .iter()
            .find(|r| !self.in_flight.contains_key(&r.id()) && self.originals.is_dirty(r))
            .map(RowModel::id);
        match dirty {
            Some(id) => self.submit_row(id).map(Some),
            None => Ok(None),
        }
    }

    // ========================
    // Row Editor
    // ========================

    pub fn set_value(&mut self, id: RowId, field: Field, value: String) {
        if self.is_busy(id) {
            return;
        }
        if let Some(row) = self.row_mut(id) {
            if row.is_editing() {
                row.set_value(field, value);
            }
        }
    }

    pub fn commit(&mut self, id: RowId, trigger: CommitTrigger) -> Action {
        let Some(row) = self.row(id) else {
            return Action::Idle;
        };
        if !row.is_editing() {
            return Action::Idle;
        }
        if self.is_busy(id) {
            log::info!("[TABLE] {:?} already has a request in flight", id);
            return Action::Idle;
        }
        if trigger == CommitTrigger::Blur {
            let worth_saving = match id {
                RowId::Saved(_) => self.originals.is_dirty(row),
                RowId::Transient(_) => row.values().all_filled(&Field::REQUIRED),
            };
            if !worth_saving {
                return Action::Idle;
            }
        }
        match self.submit_row(id) {
            Ok(submission) => Action::Submit(submission),
            Err(action) => action,
        }
    }

    fn submit_row(&mut self, id: RowId) -> Result<Submission, Action> {
        let row = self.row(id).ok_or(Action::Idle)?;
        let validated = validate(row.values()).map_err(|err| Action::rejected(id, err))?;
        let mutation = match id {
            RowId::Saved(item_id) => Mutation::update_single(item_id, validated, self.show_location),
            RowId::Transient(_) => Mutation::create(validated, self.show_location),
        };
        self.in_flight.insert(id, self.edit_session);
        Ok(Submission { target: Target::Row(id), mutation })
    }

    /// Escape on a field. Returns false when the row no longer exists.
    pub fn cancel_field(&mut self, id: RowId, field: Field) -> bool {
        if self.is_busy(id) {
            return self.row(id).is_some();
        }
        match id {
            RowId::Transient(_) => {
                self.rows.retain(|r| r.id() != id);
                false
            }
            RowId::Saved(_) => {
                let Some(index) = self.rows.iter().position(|r| r.id() == id) else {
                    return false;
                };
                self.originals.restore_field(&mut self.rows[index], field);
                true
            }
        }
    }

    // ========================
    // New-Row Builder
    // ========================

    /// Append an empty transient row; callers focus its first field
    pub fn add_row(&mut self) -> RowId {
        let row = RowModel::transient(self.next_transient);
        self.next_transient += 1;
        let id = row.id();
        self.rows.push(row);
        id
    }

    // ========================
    // Selection Tracker / delete
    // ========================

    /// Click on a row's delete affordance
    pub fn delete_clicked(&mut self, id: RowId) -> Action {
        match id {
            RowId::Transient(_) => {
                if !self.in_flight.contains_key(&id) {
                    self.rows.retain(|r| r.id() != id);
                }
                Action::Idle
            }
            RowId::Saved(item_id) if self.modes.is(Mode::Delete) => {
                if !self.batch_in_flight {
                    self.selection.toggle(item_id);
                }
                Action::Idle
            }
            RowId::Saved(item_id) => {
                if self.is_busy(id) {
                    return Action::Idle;
                }
                Action::Confirm(PendingDelete {
                    prompt: "Delete this item?".to_string(),
                    target: Target::Row(id),
                    item_ids: vec![item_id],
                })
            }
        }
    }

    /// Delete-selected button or Delete key
    pub fn delete_selected(&mut self) -> Action {
        if !self.modes.is(Mode::Delete) || self.selection.is_empty() || self.batch_in_flight {
            return Action::Idle;
        }
        let ids = self.selection.ids();
        Action::Confirm(PendingDelete {
            prompt: format!("Delete {} selected item(s)?", ids.len()),
            target: Target::Selection(ids.clone()),
            item_ids: ids,
        })
    }

    /// Called only after the user accepted the prompt
    pub fn confirm_delete(&mut self, pending: PendingDelete) -> Option<Submission> {
        match &pending.target {
            Target::Row(id) => {
                if self.is_busy(*id) {
                    return None;
                }
                self.in_flight.insert(*id, self.edit_session);
            }
            _ => {
                if self.batch_in_flight {
                    return None;
                }
                self.batch_in_flight = true;
            }
        }
        Some(Submission {
            target: pending.target,
            mutation: Mutation::Delete { item_ids: pending.item_ids },
        })
    }

    // ========================
    // Bulk save
    // ========================

    pub fn save_all(&mut self) -> Action {
        if !self.modes.is(Mode::Edit) {
            return Action::Idle;
        }
        if self.batch_in_flight || !self.in_flight.is_empty() {
            log::info!("[TABLE] bulk save refused while a request is in flight");
            return Action::Idle;
        }
        let mut items = Vec::new();
        let mut new_items = Vec::new();
        for row in &self.rows {
            if row.id().is_transient() && row.values().is_blank() {
                continue;
            }
            let validated = match validate(row.values()) {
                Ok(v) => v,
                Err(err) => return Action::rejected(row.id(), err),
            };
            match row.id() {
                RowId::Saved(id) => items.push(SavedRow::new(id, validated)),
                RowId::Transient(_) => new_items.push(NewRow::from(validated)),
            }
        }
        self.batch_in_flight = true;
        Action::Submit(Submission { target: Target::Table, mutation: Mutation::Save { items, new_items } })
    }

    // ========================
    // Reconciliation
    // ========================

    pub fn apply(&mut self, submission: Submission, result: Result<MutationResponse, MutationError>) -> Outcome {
        let sent_in = match &submission.target {
            Target::Row(id) => self.in_flight.remove(id),
            Target::Selection(_) | Target::Table => {
                self.batch_in_flight = false;
                None
            }
        };
        let describe = submission.mutation.describe();
        match (result, submission.mutation) {
            (Ok(_), Mutation::UpdateSingle { item_id, name, description, quantity, location }) => {
                let id = RowId::Saved(item_id);
                if let Some(row) = self.row_mut(id) {
                    row.set_value(Field::Name, name);
                    row.set_value(Field::Description, description);
                    row.set_value(Field::Quantity, quantity.to_string());
                    if let Some(location) = location {
                        row.set_value(Field::Location, location);
                    }
                    let values = row.values().clone();
                    self.originals.commit(id, values);
                }
                // Only the session that made the edit is closed by its reply
                if self.modes.is(Mode::Edit) && sent_in == Some(self.edit_session) {
                    self.modes.reset();
                    self.leave_edit();
                }
                Outcome::Committed(id)
            }
            (Ok(reply), Mutation::Delete { item_ids }) => {
                log::info!("[TABLE] deleted {:?} (server count {:?})", item_ids, reply.deleted_count);
                self.rows.retain(|r| !r.id().saved().is_some_and(|id| item_ids.contains(&id)));
                self.selection.remove_all(&item_ids);
                Outcome::Removed(item_ids)
            }
            (Ok(_), Mutation::Create { .. } | Mutation::Save { .. }) => Outcome::Reload,
            (Err(err), mutation) => {
                log::warn!("[TABLE] {} failed: {}", mutation.action(), err);
                if let (Target::Row(id @ RowId::Saved(_)), Mutation::UpdateSingle { .. }) = (&submission.target, &mutation) {
                    let id = *id;
                    if let Some(index) = self.rows.iter().position(|r| r.id() == id) {
                        self.originals.restore_row(&mut self.rows[index]);
                    }
                }
                Outcome::Failed { alert: err.alert_text(describe), focus: None }
            }
        }
    }

    fn row_mut(&mut self, id: RowId) -> Option<&mut RowModel> {
        self.rows.iter_mut().find(|r| r.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(id: u32, name: &str, quantity: u32) -> Item {
        Item {
            id,
            name: name.into(),
            description: format!("{} description", name),
            quantity,
            location: String::new(),
            date_added: "Oct 1, 2026".into(),
        }
    }

    fn table() -> TableController {
        TableController::new(&[item(3, "Nut", 4), item(5, "Washer", 8), item(7, "Widget", 10)], false)
    }

    fn ok() -> Result<MutationResponse, MutationError> {
        Ok(MutationResponse { success: true, ..Default::default() })
    }

    fn submission(action: Action) -> Submission {
        match action {
            Action::Submit(s) => s,
            other => panic!("expected submission, got {:?}", other),
        }
    }

    fn pending(action: Action) -> PendingDelete {
        match action {
            Action::Confirm(p) => p,
            other => panic!("expected confirmation, got {:?}", other),
        }
    }

    #[test]
    fn test_escape_on_every_field_restores_row() {
        let mut table = table();
        let before: Vec<_> = table.rows().to_vec();
        table.toggle_edit();
        for id in table.row_ids() {
            for field in Field::REQUIRED {
                table.set_value(id, field, "scribble".into());
                assert!(table.cancel_field(id, field));
            }
        }
        for (row, original) in table.rows().iter().zip(&before) {
            assert_eq!(row.values(), original.values());
        }
    }

    #[test]
    fn test_negative_quantity_rejected_without_request() {
        let mut table = table();
        table.toggle_edit();
        let id = RowId::Saved(7);
        table.set_value(id, Field::Quantity, "-2".into());

        let action = table.commit(id, CommitTrigger::Enter);
        assert_eq!(
            action,
            Action::Alert {
                message: "Quantity must be a valid number".into(),
                focus: Some((id, Field::Quantity)),
            }
        );
        assert!(!table.is_busy(id));
        assert_eq!(table.mode(), Mode::Edit);
    }

    #[test]
    fn test_whitespace_name_rejected_without_request() {
        let mut table = table();
        table.toggle_edit();
        let id = RowId::Saved(3);
        table.set_value(id, Field::Name, "   ".into());
        let action = table.commit(id, CommitTrigger::Enter);
        assert!(matches!(action, Action::Alert { focus: Some((_, Field::Name)), .. }));
    }

    #[test]
    fn test_successful_update_commits_and_leaves_edit_mode() {
        let mut table = table();
        table.toggle_edit();
        let id = RowId::Saved(7);
        table.set_value(id, Field::Name, " Gadget ".into());
        table.set_value(id, Field::Quantity, "0".into());

        let sub = submission(table.commit(id, CommitTrigger::Enter));
        assert_eq!(
            sub.mutation,
            Mutation::UpdateSingle {
                item_id: 7,
                name: "Gadget".into(),
                description: "Widget description".into(),
                quantity: 0,
                location: None,
            }
        );
        assert!(table.is_busy(id));
        assert_eq!(table.commit(id, CommitTrigger::Enter), Action::Idle);

        assert_eq!(table.apply(sub, ok()), Outcome::Committed(id));
        assert_eq!(table.mode(), Mode::None);
        let row = table.row(id).unwrap();
        assert_eq!(row.value(Field::Name), "Gadget");
        assert!(!row.is_editing());
        assert!(!table.is_busy(id));
    }

    #[test]
    fn test_failed_update_reverts_to_original() {
        let mut table = table();
        table.toggle_edit();
        let id = RowId::Saved(5);
        table.set_value(id, Field::Quantity, "99".into());
        let sub = submission(table.commit(id, CommitTrigger::Enter));

        let outcome = table.apply(sub, Err(MutationError::Application("Item not found".into())));
        assert_eq!(
            outcome,
            Outcome::Failed { alert: "Error saving changes: Item not found".into(), focus: None }
        );
        assert_eq!(table.row(id).unwrap().value(Field::Quantity), "8");
        assert_eq!(table.mode(), Mode::Edit);
    }

    #[test]
    fn test_transport_failure_reverts_like_application_failure() {
        let mut table = table();
        table.toggle_edit();
        let id = RowId::Saved(5);
        table.set_value(id, Field::Name, "Spring".into());
        let sub = submission(table.commit(id, CommitTrigger::Blur));
        table.apply(sub, Err(MutationError::Transport("Failed to fetch".into())));
        assert_eq!(table.row(id).unwrap().value(Field::Name), "Washer");
    }

    #[test]
    fn test_blur_without_changes_does_not_submit() {
        let mut table = table();
        table.toggle_edit();
        assert_eq!(table.commit(RowId::Saved(3), CommitTrigger::Blur), Action::Idle);
    }

    #[test]
    fn test_delete_mode_exits_edit_mode_first() {
        let mut table = table();
        table.toggle_edit();
        assert!(table.rows().iter().all(RowModel::is_editing));

        assert_eq!(table.toggle_delete(), Action::Idle);
        assert_eq!(table.mode(), Mode::Delete);
        assert!(table.rows().iter().all(|r| !r.is_editing()));
    }

    #[test]
    fn test_edit_mode_exits_delete_mode_and_clears_selection() {
        let mut table = table();
        table.toggle_delete();
        table.delete_clicked(RowId::Saved(3));
        assert_eq!(table.selected_count(), 1);

        table.toggle_edit();
        assert_eq!(table.mode(), Mode::Edit);
        assert_eq!(table.selected_count(), 0);
    }

    #[test]
    fn test_leaving_edit_mode_flushes_pending_edit() {
        let mut table = table();
        table.toggle_edit();
        table.set_value(RowId::Saved(3), Field::Description, "Hex".into());

        let sub = submission(table.toggle_edit());
        assert_eq!(sub.target, Target::Row(RowId::Saved(3)));
        assert_eq!(table.mode(), Mode::Edit);

        table.apply(sub, ok());
        assert_eq!(table.mode(), Mode::None);
        assert_eq!(table.row(RowId::Saved(3)).unwrap().value(Field::Description), "Hex");
    }

    #[test]
    fn test_leaving_edit_mode_with_invalid_edit_is_blocked() {
        let mut table = table();
        table.toggle_edit();
        table.set_value(RowId::Saved(3), Field::Quantity, "abc".into());
        assert!(matches!(table.toggle_edit(), Action::Alert { .. }));
        assert!(matches!(table.toggle_delete(), Action::Alert { .. }));
        assert_eq!(table.mode(), Mode::Edit);
    }

    #[test]
    fn test_batch_delete_removes_exactly_sent_rows() {
        let mut table = table();
        table.toggle_delete();
        table.delete_clicked(RowId::Saved(3));
        table.delete_clicked(RowId::Saved(5));

        let selected = pending(table.delete_selected());
        assert_eq!(selected.prompt(), "Delete 2 selected item(s)?");
        let sub = table.confirm_delete(selected).unwrap();
        assert_eq!(sub.mutation, Mutation::Delete { item_ids: vec![3, 5] });
        assert!(table.batch_in_flight());
        assert_eq!(table.delete_selected(), Action::Idle);

        assert_eq!(table.apply(sub, ok()), Outcome::Removed(vec![3, 5]));
        assert_eq!(table.row_ids(), vec![RowId::Saved(7)]);
        assert_eq!(table.selected_count(), 0);
        assert_eq!(table.mode(), Mode::Delete);
    }

    #[test]
    fn test_failed_batch_delete_keeps_rows() {
        let mut table = table();
        table.toggle_delete();
        table.delete_clicked(RowId::Saved(5));
        let selected = pending(table.delete_selected());
        let sub = table.confirm_delete(selected).unwrap();
        let outcome = table.apply(sub, Err(MutationError::Application("nope".into())));
        assert!(matches!(outcome, Outcome::Failed { .. }));
        assert_eq!(table.rows().len(), 3);
        assert!(table.is_selected(RowId::Saved(5)));
    }

    #[test]
    fn test_single_delete_requires_confirmation() {
        let mut table = table();
        let declined = pending(table.delete_clicked(RowId::Saved(7)));
        assert_eq!(declined.prompt(), "Delete this item?");
        assert_eq!(declined.item_ids(), &[7]);
        // declining is simply dropping the pending delete
        drop(declined);
        assert_eq!(table.rows().len(), 3);

        let accepted = pending(table.delete_clicked(RowId::Saved(7)));
        let sub = table.confirm_delete(accepted).unwrap();
        assert_eq!(table.apply(sub, ok()), Outcome::Removed(vec![7]));
        assert!(table.row(RowId::Saved(7)).is_none());
    }

    #[test]
    fn test_selection_toggle_only_in_delete_mode() {
        let mut table = table();
        assert!(matches!(table.delete_clicked(RowId::Saved(3)), Action::Confirm(_)));
        assert_eq!(table.selected_count(), 0);

        table.toggle_delete();
        table.delete_clicked(RowId::Saved(3));
        table.delete_clicked(RowId::Saved(3));
        assert_eq!(table.selected_count(), 0);
        table.delete_clicked(RowId::Saved(3));
        table.toggle_delete();
        assert_eq!(table.selected_count(), 0);
    }

    #[test]
    fn test_new_row_created_then_reload() {
        let mut table = table();
        let id = table.add_row();
        assert!(table.row(id).unwrap().is_editing());
        table.set_value(id, Field::Name, "Bolt".into());
        table.set_value(id, Field::Description, "M3".into());
        table.set_value(id, Field::Quantity, "50".into());

        let sub = submission(table.commit(id, CommitTrigger::Enter));
        assert_eq!(
            sub.mutation,
            Mutation::Create { name: "Bolt".into(), description: "M3".into(), quantity: 50, location: None }
        );
        assert_eq!(table.apply(sub, ok()), Outcome::Reload);
    }

    #[test]
    fn test_new_row_failure_keeps_entered_values() {
        let mut table = table();
        let id = table.add_row();
        table.set_value(id, Field::Name, "Bolt".into());
        table.set_value(id, Field::Quantity, "5".into());
        let sub = submission(table.commit(id, CommitTrigger::Enter));
        table.apply(sub, Err(MutationError::Transport("offline".into())));
        let row = table.row(id).unwrap();
        assert_eq!(row.value(Field::Name), "Bolt");
        assert!(row.is_editing());
    }

    #[test]
    fn test_new_row_blur_waits_for_required_fields() {
        let mut table = table();
        let id = table.add_row();
        table.set_value(id, Field::Name, "Bolt".into());
        table.set_value(id, Field::Quantity, "5".into());
        assert_eq!(table.commit(id, CommitTrigger::Blur), Action::Idle);
        table.set_value(id, Field::Description, "M3".into());
        assert!(matches!(table.commit(id, CommitTrigger::Blur), Action::Submit(_)));
    }

    #[test]
    fn test_new_row_escape_discards() {
        let mut table = table();
        let id = table.add_row();
        assert!(!table.cancel_field(id, Field::Description));
        assert!(table.row(id).is_none());

        let id = table.add_row();
        assert_eq!(table.delete_clicked(id), Action::Idle);
        assert_eq!(table.rows().len(), 3);
    }

    #[test]
    fn test_save_all_collects_rows_and_skips_blank_new_rows() {
        let mut table = TableController::new(&[item(1, "Nut", 4)], true);
        table.toggle_edit();
        table.add_row();
        let filled = table.add_row();
        table.set_value(filled, Field::Name, "Bolt".into());
        table.set_value(filled, Field::Quantity, "2".into());
        table.set_value(filled, Field::Location, "Bin 4".into());

        let sub = submission(table.save_all());
        assert_eq!(sub.target, Target::Table);
        match sub.mutation {
            Mutation::Save { items, new_items } => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].id, 1);
                assert_eq!(new_items.len(), 1);
                assert_eq!(new_items[0].location, "Bin 4");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(table.batch_in_flight());
    }

    #[test]
    fn test_save_all_rejects_invalid_row() {
        let mut table = table();
        table.toggle_edit();
        table.set_value(RowId::Saved(5), Field::Quantity, "-1".into());
        assert_eq!(
            table.save_all(),
            Action::Alert {
                message: "Quantity must be a valid number".into(),
                focus: Some((RowId::Saved(5), Field::Quantity)),
            }
        );
        assert!(!table.batch_in_flight());
    }

    #[test]
    fn test_location_variant_sends_location() {
        let mut table = TableController::new(&[item(2, "Nut", 1)], true);
        table.toggle_edit();
        table.set_value(RowId::Saved(2), Field::Location, "Garage".into());
        let sub = submission(table.commit(RowId::Saved(2), CommitTrigger::Enter));
        assert!(matches!(sub.mutation, Mutation::UpdateSingle { location: Some(ref l), .. } if l == "Garage"));
    }

    #[test]
    fn test_reentering_edit_keeps_baseline_of_row_in_flight() {
        let mut table = table();
        table.toggle_edit();
        let id = RowId::Saved(7);
        table.set_value(id, Field::Name, "Attempt".into());
        let sub = submission(table.commit(id, CommitTrigger::Enter));

        assert_eq!(table.toggle_edit(), Action::Idle);
        assert_eq!(table.mode(), Mode::None);
        assert_eq!(table.toggle_edit(), Action::Idle);
        assert_eq!(table.mode(), Mode::Edit);

        table.apply(sub, Err(MutationError::Application("Item not found".into())));
        assert_eq!(table.row(id).unwrap().value(Field::Name), "Widget");
        assert_eq!(table.mode(), Mode::Edit);
    }

    #[test]
    fn test_late_success_does_not_close_new_edit_session() {
        let mut table = table();
        table.toggle_edit();
        let id = RowId::Saved(7);
        table.set_value(id, Field::Name, "Gadget".into());
        let sub = submission(table.commit(id, CommitTrigger::Enter));

        table.toggle_edit();
        table.toggle_edit();
        assert_eq!(table.apply(sub, ok()), Outcome::Committed(id));
        assert_eq!(table.mode(), Mode::Edit);
        assert_eq!(table.row(id).unwrap().value(Field::Name), "Gadget");

        // the committed value is the new baseline for this session
        table.set_value(id, Field::Name, "Scratch".into());
        assert!(table.cancel_field(id, Field::Name));
        assert_eq!(table.row(id).unwrap().value(Field::Name), "Gadget");
    }

    #[test]
    fn test_save_all_refused_while_row_in_flight() {
        let mut table = table();
        table.toggle_edit();
        table.set_value(RowId::Saved(3), Field::Quantity, "9".into());
        let _sub = submission(table.commit(RowId::Saved(3), CommitTrigger::Enter));
        assert_eq!(table.save_all(), Action::Idle);
        assert!(!table.batch_in_flight());
    }
}
