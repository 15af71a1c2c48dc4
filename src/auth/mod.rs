//! Authentication
//!
//! Login/signup modal state, credential validation and the local-storage
//! session flags.

pub mod panel;
pub mod session;
pub mod validation;

pub use panel::{AuthPanel, ModalState};
pub use session::{BrowserStorage, SessionSnapshot, SessionStore};
pub use validation::{message_for, AuthField, FieldErrors, LoginForm, SignupForm};
