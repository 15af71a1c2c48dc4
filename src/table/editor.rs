//! Row Editor
//!
//! Field validation and the pre-edit value cache used for escape-cancel and
//! rollback after a failed update.

use std::collections::HashMap;

use crate::error::ValidationError;
use crate::models::{Field, RowId};
use crate::table::row::{FieldValues, RowModel};

/// Trimmed, validated row contents ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRow {
    pub name: String,
    pub description: String,
    pub quantity: u32,
    pub location: String,
}

/// Whole, non-negative quantities only; the server stores a positive integer field
pub fn parse_quantity(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

pub fn validate(values: &FieldValues) -> Result<ValidatedRow, ValidationError> {
    let name = values.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let quantity = parse_quantity(&values.quantity).ok_or(ValidationError::InvalidQuantity)?;
    Ok(ValidatedRow {
        name: name.to_string(),
        description: values.description.trim().to_string(),
        quantity,
        location: values.location.trim().to_string(),
    })
}

/// Pre-edit text per row, rebuilt each time edit mode is entered
#[derive(Debug, Clone, Default)]
pub struct OriginalValues {
    rows: HashMap<RowId, FieldValues>,
}

impl OriginalValues {
    pub fn capture<'a>(&mut self, rows: impl IntoIterator<Item = &'a RowModel>) {
        self.rows.clear();
        for row in rows {
            if !row.id().is_transient() {
                self.rows.insert(row.id(), row.values().clone());
            }
        }
    }

    pub fn get(&self, id: RowId) -> Option<&FieldValues> {
        self.rows.get(&id)
    }

    /// Record committed values as the new baseline
    pub fn commit(&mut self, id: RowId, values: FieldValues) {
        self.rows.insert(id, values);
    }

    /// Put one field back; returns false when nothing was captured for the row
    pub fn restore_field(&self, row: &mut RowModel, field: Field) -> bool {
        match self.rows.get(&row.id()) {
            Some(original) => {
                row.set_value(field, original.get(field).to_string());
                true
            }
            None => false,
        }
    }

    pub fn restore_row(&self, row: &mut RowModel) -> bool {
        match self.rows.get(&row.id()) {
            Some(original) => {
                row.replace_values(original.clone());
                true
            }
            None => false,
        }
    }

    pub fn is_dirty(&self, row: &RowModel) -> bool {
        self.rows
            .get(&row.id())
            .map(|original| original != row.values())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn values(name: &str, quantity: &str) -> FieldValues {
        FieldValues {
            name: name.into(),
            description: " M3 ".into(),
            quantity: quantity.into(),
            location: String::new(),
        }
    }

    #[test]
    fn test_whitespace_name_rejected() {
        assert_eq!(validate(&values("   ", "1")), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_quantity_rules() {
        assert_eq!(validate(&values("Bolt", "-1")), Err(ValidationError::InvalidQuantity));
        assert_eq!(validate(&values("Bolt", "abc")), Err(ValidationError::InvalidQuantity));
        assert_eq!(validate(&values("Bolt", "")), Err(ValidationError::InvalidQuantity));
        assert_eq!(validate(&values("Bolt", "1.5")), Err(ValidationError::InvalidQuantity));
        assert_eq!(validate(&values("Bolt", "0")).map(|r| r.quantity), Ok(0));
        assert_eq!(validate(&values("Bolt", " 50 ")).map(|r| r.quantity), Ok(50));
    }

    #[test]
    fn test_validated_row_is_trimmed() {
        let row = validate(&values(" Bolt ", "50")).unwrap();
        assert_eq!(row.name, "Bolt");
        assert_eq!(row.description, "M3");
    }

    #[test]
    fn test_restore_and_dirty() {
        let item = Item {
            id: 1,
            name: "Widget".into(),
            description: String::new(),
            quantity: 10,
            location: String::new(),
            date_added: String::new(),
        };
        let mut row = RowModel::from_item(&item);
        let mut originals = OriginalValues::default();
        originals.capture([&row]);

        row.set_value(Field::Name, "Gadget");
        row.set_value(Field::Quantity, "3");
        assert!(originals.is_dirty(&row));

        originals.restore_field(&mut row, Field::Name);
        assert_eq!(row.value(Field::Name), "Widget");
        assert!(originals.is_dirty(&row));

        originals.restore_row(&mut row);
        assert!(!originals.is_dirty(&row));
    }

    #[test]
    fn test_transient_rows_not_captured() {
        let row = RowModel::transient(0);
        let mut originals = OriginalValues::default();
        originals.capture([&row]);
        assert!(originals.get(row.id()).is_none());
        assert!(!originals.is_dirty(&row));
    }
}
