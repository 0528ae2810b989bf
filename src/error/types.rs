//! Error types
//!
//! Defines domain-specific error types for each component of the record manager.

use std::fmt;
use std::io;

use crate::auth::{Operation, Role};

/// Input validation errors, raised before any collection is touched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyUsername,
    ReservedUsername(String),
    EmptyPassword,
    PasswordMismatch,
    EmptyField(&'static str),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyUsername => write!(f, "Username cannot be empty"),
            ValidationError::ReservedUsername(u) => write!(f, "Username '{}' is reserved", u),
            ValidationError::EmptyPassword => write!(f, "Password cannot be empty"),
            ValidationError::PasswordMismatch => write!(f, "Passwords do not match"),
            ValidationError::EmptyField(field) => write!(f, "{} cannot be empty", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// The caller's role lacks the capability for an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDenied {
    pub operation: Operation,
    pub role: Role,
}

impl fmt::Display for AccessDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Access denied: {} users may not {}", self.role, self.operation)
    }
}

impl std::error::Error for AccessDenied {}

/// Storage adapter errors. Only the write path surfaces these; unreadable
/// collections load as empty.
#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Serialize(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "IO error: {}", e),
            StorageError::Serialize(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::Io(error)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::Serialize(error)
    }
}

/// User directory errors
#[derive(Debug)]
pub enum UserError {
    Validation(ValidationError),
    DuplicateAdmin,
    DuplicateUsername(String),
    NotFound(String),
    SelfDeletion,
    LastAdminProtected(String),
    Forbidden(AccessDenied),
    Hashing(String),
    Storage(StorageError),
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserError::Validation(e) => write!(f, "{}", e),
            UserError::DuplicateAdmin => write!(f, "An admin account already exists"),
            UserError::DuplicateUsername(u) => write!(f, "Username '{}' is already taken", u),
            UserError::NotFound(u) => write!(f, "User '{}' not found", u),
            UserError::SelfDeletion => write!(f, "You cannot delete your own account"),
            UserError::LastAdminProtected(u) => {
                write!(f, "Cannot delete '{}': it is the only admin account", u)
            }
            UserError::Forbidden(e) => write!(f, "{}", e),
            UserError::Hashing(msg) => write!(f, "Password hashing failed: {}", msg),
            UserError::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for UserError {}

impl From<ValidationError> for UserError {
    fn from(error: ValidationError) -> Self {
        UserError::Validation(error)
    }
}

impl From<AccessDenied> for UserError {
    fn from(error: AccessDenied) -> Self {
        UserError::Forbidden(error)
    }
}

impl From<StorageError> for UserError {
    fn from(error: StorageError) -> Self {
        UserError::Storage(error)
    }
}

/// Authentication gate errors
#[derive(Debug)]
pub enum AuthError {
    /// Unknown username and wrong password are deliberately indistinguishable.
    InvalidCredentials,
    Signup(UserError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid username or password"),
            AuthError::Signup(e) => write!(f, "Signup failed: {}", e),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<UserError> for AuthError {
    fn from(error: UserError) -> Self {
        AuthError::Signup(error)
    }
}

/// Record directory errors
#[derive(Debug)]
pub enum RecordError {
    Validation(ValidationError),
    DuplicateId(String),
    NotFound(String),
    Forbidden(AccessDenied),
    Storage(StorageError),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Validation(e) => write!(f, "{}", e),
            RecordError::DuplicateId(id) => write!(f, "Record with ID '{}' already exists", id),
            RecordError::NotFound(id) => write!(f, "Record with ID '{}' not found", id),
            RecordError::Forbidden(e) => write!(f, "{}", e),
            RecordError::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for RecordError {}

impl From<ValidationError> for RecordError {
    fn from(error: ValidationError) -> Self {
        RecordError::Validation(error)
    }
}

impl From<AccessDenied> for RecordError {
    fn from(error: AccessDenied) -> Self {
        RecordError::Forbidden(error)
    }
}

impl From<StorageError> for RecordError {
    fn from(error: StorageError) -> Self {
        RecordError::Storage(error)
    }
}

/// Application error that encompasses all error types
#[derive(Debug)]
pub enum AppError {
    Auth(AuthError),
    User(UserError),
    Record(RecordError),
    Config(config::ConfigError),
    Io(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Auth(e) => write!(f, "{}", e),
            AppError::User(e) => write!(f, "{}", e),
            AppError::Record(e) => write!(f, "{}", e),
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<AuthError> for AppError {
    fn from(error: AuthError) -> Self {
        AppError::Auth(error)
    }
}

impl From<UserError> for AppError {
    fn from(error: UserError) -> Self {
        AppError::User(error)
    }
}

impl From<RecordError> for AppError {
    fn from(error: RecordError) -> Self {
        AppError::Record(error)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::Io(error)
    }
}
