//! User accounts
//!
//! Account model and the directory that enforces username uniqueness and
//! admin-count invariants.

pub mod directory;
pub mod model;

pub use directory::UserDirectory;
pub use model::{User, UserSummary};
