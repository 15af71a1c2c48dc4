//! Inventory Table
//!
//! DOM-free state for inline editing, selection and batch mutation of the
//! inventory table. Components own one [`TableController`] per page.

pub mod controller;
pub mod editor;
pub mod mode;
pub mod mutation;
pub mod row;
pub mod selection;

pub use controller::{Action, CommitTrigger, PendingDelete, TableController};
pub use mode::Mode;
pub use mutation::{Mutation, MutationResponse, Outcome, Submission};
pub use row::RowModel;
