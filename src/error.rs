//! Error Taxonomy
//!
//! Client-side validation failures and the two ways a mutation can fail
//! after it has been sent.

use thiserror::Error;

use crate::models::Field;

/// Rejected before any request is made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Item name cannot be empty")]
    EmptyName,
    #[error("Quantity must be a valid number")]
    InvalidQuantity,
}

impl ValidationError {
    /// Field that receives focus after the alert
    pub fn field(&self) -> Field {
        match self {
            ValidationError::EmptyName => Field::Name,
            ValidationError::InvalidQuantity => Field::Quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Server answered `success: false`
    #[error("{0}")]
    Application(String),
    /// Fetch rejected, body was not the expected JSON, or a JS exception
    #[error("{0}")]
    Transport(String),
}

impl MutationError {
    /// Alert text shown for a failed action, e.g. "Error saving changes: ..."
    ///
    /// Transport failures carry no server message, so only the action is named.
    pub fn alert_text(&self, action: &str) -> String {
        match self {
            MutationError::Validation(err) => err.to_string(),
            MutationError::Application(msg) => format!("Error {}: {}", action, msg),
            MutationError::Transport(_) => format!("Error {}", action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_text() {
        let err = MutationError::Application("Item not found".into());
        assert_eq!(err.alert_text("saving changes"), "Error saving changes: Item not found");

        let err = MutationError::Transport("TypeError: Failed to fetch".into());
        assert_eq!(err.alert_text("deleting item"), "Error deleting item");

        let err = MutationError::from(ValidationError::EmptyName);
        assert_eq!(err.alert_text("creating item"), "Item name cannot be empty");
    }

    #[test]
    fn test_validation_focus_field() {
        assert_eq!(ValidationError::EmptyName.field(), Field::Name);
        assert_eq!(ValidationError::InvalidQuantity.field(), Field::Quantity);
    }
}
