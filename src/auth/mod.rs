//! Authentication and authorization
//!
//! Handles password hashing, input validation, roles, the capability table
//! and the login/signup gate.

pub mod credentials;
pub mod gate;
pub mod permissions;
pub mod role;
pub mod validator;

pub use credentials::PasswordHasher;
pub use gate::AuthGate;
pub use permissions::{Operation, authorize, is_permitted};
pub use role::{Identity, Role};
