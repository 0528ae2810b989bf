//! Session gate
//!
//! Signup, login and guest login. Every successful call yields the
//! [`Identity`] the shell carries for the rest of the session.

use log::{info, warn};

use super::role::Identity;
use crate::error::AuthError;
use crate::users::UserDirectory;

#[derive(Clone)]
pub struct AuthGate {
    users: UserDirectory,
}

impl AuthGate {
    pub fn new(users: UserDirectory) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    /// Authenticates against the user directory. An unknown user and a wrong
    /// password fail identically.
    pub fn login(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        let user = self.users.find_by_username(username);

        match user {
            Some(user) if self.users.hasher().verify(password, &user.password_hash) => {
                info!("User '{}' logged in as {}", user.username, user.role);
                Ok(user.identity())
            }
            _ => {
                warn!("Failed login attempt for '{}'", username);
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Always succeeds; the guest is never written to the directory.
    pub fn guest_login(&self) -> Identity {
        info!("Guest session started");
        Identity::guest()
    }

    /// Registers the admin account and logs it in.
    pub fn signup_admin(
        &self,
        username: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<Identity, AuthError> {
        let user = self.users.create_admin(username, password, confirmation)?;
        Ok(user.identity())
    }

    /// Registers a staff account and logs it in.
    pub fn signup_staff(
        &self,
        username: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<Identity, AuthError> {
        let user = self.users.create_staff(username, password, confirmation)?;
        Ok(user.identity())
    }
}
