//! UI Components
//!
//! Leptos components mounted into the server-rendered pages.

mod inventory_table;
mod table_row;
mod mode_toolbar;
mod auth_modal;
mod nav_auth;

pub use inventory_table::InventoryTable;
pub use table_row::TableRow;
pub use mode_toolbar::ModeToolbar;
pub use auth_modal::AuthModal;
pub use nav_auth::NavAuthBar;
