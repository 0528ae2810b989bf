//! Shell session state
//!
//! Holds the identity produced by the auth gate until logout.

use crate::auth::Identity;

#[derive(Debug, Default)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    /// Discards the identity, returning it if there was one.
    pub fn logout(&mut self) -> Option<Identity> {
        self.identity.take()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.identity.is_some()
    }
}
