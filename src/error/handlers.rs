//! Error handlers
//!
//! Classifies errors into the categories reported to the user and logs them.
//! Nothing here is fatal: the shell prints the message and keeps going.

use crate::error::types::{AppError, AuthError, RecordError, UserError};
use log::{debug, error};

/// User-facing error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Duplicate,
    Forbidden,
    LastAdminProtected,
    SelfDeletion,
    InvalidCredentials,
    Internal,
}

/// Handle an application error. Refusals were already logged where they
/// were decided, so only internal failures are logged above debug.
pub fn handle_error(err: &AppError) {
    match error_kind(err) {
        ErrorKind::Internal => error!("Operation failed: {}", err),
        kind => debug!("Operation refused ({:?}): {}", kind, err),
    }
}

/// Map an error onto its category
pub fn error_kind(err: &AppError) -> ErrorKind {
    match err {
        AppError::Auth(AuthError::InvalidCredentials) => ErrorKind::InvalidCredentials,
        AppError::Auth(AuthError::Signup(e)) | AppError::User(e) => user_error_kind(e),
        AppError::Record(e) => record_error_kind(e),
        AppError::Config(_) | AppError::Io(_) => ErrorKind::Internal,
    }
}

fn user_error_kind(err: &UserError) -> ErrorKind {
    match err {
        UserError::Validation(_) => ErrorKind::Validation,
        UserError::DuplicateAdmin | UserError::DuplicateUsername(_) => ErrorKind::Duplicate,
        UserError::NotFound(_) => ErrorKind::NotFound,
        UserError::SelfDeletion => ErrorKind::SelfDeletion,
        UserError::LastAdminProtected(_) => ErrorKind::LastAdminProtected,
        UserError::Forbidden(_) => ErrorKind::Forbidden,
        UserError::Hashing(_) | UserError::Storage(_) => ErrorKind::Internal,
    }
}

fn record_error_kind(err: &RecordError) -> ErrorKind {
    match err {
        RecordError::Validation(_) => ErrorKind::Validation,
        RecordError::DuplicateId(_) => ErrorKind::Duplicate,
        RecordError::NotFound(_) => ErrorKind::NotFound,
        RecordError::Forbidden(_) => ErrorKind::Forbidden,
        RecordError::Storage(_) => ErrorKind::Internal,
    }
}
