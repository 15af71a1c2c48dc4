//! Frontend Models
//!
//! Data structures matching the inventory server's item projection.

use serde::{Deserialize, Serialize};

/// Inventory item as rendered by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub quantity: u32,
    #[serde(default)]
    pub location: String,
    /// Display string, server formatted
    #[serde(default)]
    pub date_added: String,
}

/// Identity of a table row.
///
/// `Transient` rows have not been created on the server yet. Their wire form
/// is the `"new"` sentinel; the local key only keeps sibling transient rows
/// apart and is never sent anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowId {
    Saved(u32),
    Transient(u32),
}

impl RowId {
    pub fn saved(&self) -> Option<u32> {
        match self {
            RowId::Saved(id) => Some(*id),
            RowId::Transient(_) => None,
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, RowId::Transient(_))
    }

    /// Value of the row's `data-item-id` attribute
    pub fn attr(&self) -> String {
        match self {
            RowId::Saved(id) => id.to_string(),
            RowId::Transient(_) => "new".to_string(),
        }
    }
}

/// Editable columns of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Description,
    Quantity,
    Location,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Description, Field::Quantity, Field::Location];
    pub const REQUIRED: [Field; 3] = [Field::Name, Field::Description, Field::Quantity];

    /// Columns shown for a table, with or without the location column
    pub fn columns(show_location: bool) -> &'static [Field] {
        if show_location { &Self::ALL } else { &Self::REQUIRED }
    }

    /// Column header, also used as the cell's `data-label`
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "ITEM",
            Field::Description => "DESCRIPTION",
            Field::Quantity => "QUANTITY",
            Field::Location => "LOCATION",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Item name",
            Field::Description => "Description",
            Field::Quantity => "0",
            Field::Location => "Location",
        }
    }
}
