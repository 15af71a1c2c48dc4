//! Row View Model
//!
//! One typed accessor surface per row, whether a cell is currently shown as
//! static text or as an input.

use crate::models::{Field, Item, RowId};

/// Text of every editable column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub name: String,
    pub description: String,
    pub quantity: String,
    pub location: String,
}

impl FieldValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Quantity => &self.quantity,
            Field::Location => &self.location,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Description => self.description = value,
            Field::Quantity => self.quantity = value,
            Field::Location => self.location = value,
        }
    }

    /// True when every `fields` entry has non-whitespace content
    pub fn all_filled(&self, fields: &[Field]) -> bool {
        fields.iter().all(|f| !self.get(*f).trim().is_empty())
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).trim().is_empty())
    }
}

impl From<&Item> for FieldValues {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            quantity: item.quantity.to_string(),
            location: item.location.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowModel {
    id: RowId,
    values: FieldValues,
    date_added: String,
    editing: bool,
}

impl RowModel {
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: RowId::Saved(item.id),
            values: FieldValues::from(item),
            date_added: item.date_added.clone(),
            editing: false,
        }
    }

    /// Unsaved row; starts out editable and has no display state
    pub fn transient(key: u32) -> Self {
        Self {
            id: RowId::Transient(key),
            values: FieldValues::default(),
            date_added: "New Item".to_string(),
            editing: true,
        }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value.into());
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn replace_values(&mut self, values: FieldValues) {
        self.values = values;
    }

    pub fn date_added(&self) -> &str {
        &self.date_added
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Transient rows stay editable until they are created or discarded
    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing || self.id.is_transient();
    }
}
