//! Reusable UI components

pub mod form_field;
pub mod navbar;
pub mod password_dialog;

pub use form_field::{FieldKind, FormField};
pub use navbar::Navbar;
pub use password_dialog::PasswordDialog;
