//! Error handling
//!
//! Defines error types and handling for the record manager.

pub mod handlers;
pub mod types;

pub use handlers::{ErrorKind, error_kind, handle_error};
pub use types::*;
