//! User account types

use serde::{Deserialize, Serialize};

use crate::auth::{Identity, Role};

/// A stored user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    /// bcrypt hash; stored under the `password` key.
    #[serde(rename = "password")]
    pub password_hash: String,
    pub role: Role,
}

impl User {
    pub fn identity(&self) -> Identity {
        Identity::new(self.username.clone(), self.role)
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            username: self.username.clone(),
            role: self.role,
        }
    }
}

/// What `list_users` exposes: never the password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub username: String,
    pub role: Role,
}
