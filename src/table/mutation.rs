//! Batch Mutator
//!
//! Every table change is one JSON POST to the page URL. This module shapes
//! the request body, parses the reply, and names how the table reconciles.

use serde::{Deserialize, Serialize};

use crate::error::MutationError;
use crate::models::{Field, RowId};
use crate::table::editor::ValidatedRow;

/// Persisted row inside a bulk `save`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedRow {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub quantity: u32,
    pub location: String,
}

/// Transient row inside a bulk `save`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRow {
    pub name: String,
    pub description: String,
    pub quantity: u32,
    pub location: String,
}

impl SavedRow {
    pub fn new(id: u32, row: ValidatedRow) -> Self {
        Self { id, name: row.name, description: row.description, quantity: row.quantity, location: row.location }
    }
}

impl From<ValidatedRow> for NewRow {
    fn from(row: ValidatedRow) -> Self {
        Self { name: row.name, description: row.description, quantity: row.quantity, location: row.location }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Mutation {
    UpdateSingle {
        item_id: u32,
        name: String,
        description: String,
        quantity: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        location: Option<String>,
    },
    Delete {
        item_ids: Vec<u32>,
    },
    Create {
        name: String,
        description: String,
        quantity: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        location: Option<String>,
    },
    Save {
        items: Vec<SavedRow>,
        new_items: Vec<NewRow>,
    },
}

impl Mutation {
    pub fn update_single(item_id: u32, row: ValidatedRow, with_location: bool) -> Self {
        Mutation::UpdateSingle {
            item_id,
            name: row.name,
            description: row.description,
            quantity: row.quantity,
            location: with_location.then_some(row.location),
        }
    }

    pub fn create(row: ValidatedRow, with_location: bool) -> Self {
        Mutation::Create {
            name: row.name,
            description: row.description,
            quantity: row.quantity,
            location: with_location.then_some(row.location),
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            Mutation::UpdateSingle { .. } => "update_single",
            Mutation::Delete { .. } => "delete",
            Mutation::Create { .. } => "create",
            Mutation::Save { .. } => "save",
        }
    }

    /// Phrase used in failure alerts
    pub fn describe(&self) -> &'static str {
        match self {
            Mutation::UpdateSingle { .. } | Mutation::Save { .. } => "saving changes",
            Mutation::Delete { item_ids } if item_ids.len() > 1 => "deleting items",
            Mutation::Delete { .. } => "deleting item",
            Mutation::Create { .. } => "creating item",
        }
    }

    pub fn to_body(&self) -> Result<String, MutationError> {
        serde_json::to_string(self).map_err(|e| MutationError::Transport(e.to_string()))
    }
}

/// Server reply shared by every action
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub deleted_count: Option<u32>,
    #[serde(default)]
    pub item_ids: Option<Vec<u32>>,
}

impl MutationResponse {
    pub fn into_result(self) -> Result<Self, MutationError> {
        if self.success {
            Ok(self)
        } else {
            let message = self.error.unwrap_or_else(|| "Unknown error".to_string());
            Err(MutationError::Application(message))
        }
    }
}

pub fn parse_response(body: &str) -> Result<MutationResponse, MutationError> {
    serde_json::from_str::<MutationResponse>(body)
        .map_err(|e| MutationError::Transport(format!("Invalid response: {}", e)))?
        .into_result()
}

/// What a submission is about, so its reply can be reconciled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Row(RowId),
    /// Batch delete of the selection
    Selection(Vec<u32>),
    /// Bulk save of the whole table
    Table,
}

/// A request ready to go out; holding one means the target is marked in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub target: Target,
    pub mutation: Mutation,
}

/// How the table looks after a reply was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Row values written back to display, edit mode left
    Committed(RowId),
    /// Exactly these rows were dropped from the table
    Removed(Vec<u32>),
    /// Server-computed fields changed; the page must be reloaded
    Reload,
    Failed {
        alert: String,
        focus: Option<(RowId, Field)>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn bolt() -> ValidatedRow {
        ValidatedRow { name: "Bolt".into(), description: "M3".into(), quantity: 50, location: "Shelf A".into() }
    }

    #[test]
    fn test_update_single_body() {
        let body = Mutation::update_single(7, bolt(), false).to_body().unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            value,
            json!({"action": "update_single", "item_id": 7, "name": "Bolt", "description": "M3", "quantity": 50})
        );
    }

    #[test]
    fn test_create_body_with_location() {
        let value = serde_json::to_value(Mutation::create(bolt(), true)).unwrap();
        assert_eq!(
            value,
            json!({"action": "create", "name": "Bolt", "description": "M3", "quantity": 50, "location": "Shelf A"})
        );
    }

    #[test]
    fn test_save_body() {
        let mutation = Mutation::Save {
            items: vec![SavedRow::new(2, bolt())],
            new_items: vec![NewRow::from(bolt())],
        };
        let value = serde_json::to_value(&mutation).unwrap();
        assert_eq!(value["action"], "save");
        assert_eq!(value["items"][0]["id"], 2);
        assert_eq!(value["new_items"][0].get("id"), None);
        assert_eq!(value["new_items"][0]["location"], "Shelf A");
    }

    #[test]
    fn test_delete_body_and_description() {
        let mutation = Mutation::Delete { item_ids: vec![3, 5] };
        assert_eq!(mutation.to_body().unwrap(), r#"{"action":"delete","item_ids":[3,5]}"#);
        assert_eq!(mutation.describe(), "deleting items");
        assert_eq!(Mutation::Delete { item_ids: vec![3] }.describe(), "deleting item");
    }

    #[test]
    fn test_parse_success() {
        let reply = parse_response(r#"{"success": true, "deleted_count": 2, "item_ids": [3, 5]}"#).unwrap();
        assert_eq!(reply.deleted_count, Some(2));
        assert_eq!(reply.item_ids, Some(vec![3, 5]));
    }

    #[test]
    fn test_parse_application_error() {
        assert_eq!(
            parse_response(r#"{"success": false, "error": "Item not found"}"#),
            Err(MutationError::Application("Item not found".into()))
        );
        assert_eq!(
            parse_response(r#"{"success": false}"#),
            Err(MutationError::Application("Unknown error".into()))
        );
    }

    #[test]
    fn test_parse_non_json_is_transport() {
        assert!(matches!(parse_response("<html>403</html>"), Err(MutationError::Transport(_))));
    }
}
