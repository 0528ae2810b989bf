//! Roles and session identities
//!
//! A role is the capability tier of a principal. An identity pairs a role with
//! the username it was granted to and lives only as long as the shell session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Username carried by the synthetic guest identity.
pub const GUEST_USERNAME: &str = "guest";

/// Capability tier of a user or session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
    /// Never persisted; only produced by guest login.
    Guest,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Guest => "guest",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated (or guest) principal attached to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    username: String,
    role: Role,
}

impl Identity {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }

    pub fn guest() -> Self {
        Self::new(GUEST_USERNAME, Role::Guest)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.username, self.role)
    }
}
