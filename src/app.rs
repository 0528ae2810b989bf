//! Application wiring
//!
//! Builds the store, directories and auth gate from configuration. Each
//! component receives the store handle explicitly.

use std::sync::Arc;

use crate::auth::{AuthGate, PasswordHasher};
use crate::config::AppConfig;
use crate::records::RecordDirectory;
use crate::storage::{CollectionStore, JsonFileStore, RECORDS, USERS};
use crate::users::UserDirectory;

#[derive(Clone)]
pub struct App {
    pub gate: AuthGate,
    pub records: RecordDirectory,
}

impl App {
    pub fn new(store: Arc<dyn CollectionStore>, hasher: PasswordHasher) -> Self {
        let users = UserDirectory::new(store.clone(), hasher);
        Self {
            gate: AuthGate::new(users),
            records: RecordDirectory::new(store),
        }
    }

    /// JSON file storage at the configured paths, relative to the working
    /// directory.
    pub fn from_config(config: &AppConfig) -> Self {
        let store = JsonFileStore::new(".")
            .with_collection(USERS, config.users_path())
            .with_collection(RECORDS, config.records_path());
        Self::new(Arc::new(store), PasswordHasher::new(config.bcrypt_cost))
    }

    pub fn users(&self) -> &UserDirectory {
        self.gate.users()
    }
}
