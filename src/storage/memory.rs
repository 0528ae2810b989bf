//! In-memory stores
//!
//! Keep collections in a map. Used as the test doubles for the directories.

use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::Mutex;

use super::{CollectionStore, Document};
use crate::error::StorageError;

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CollectionStore for MemoryStore {
    fn load(&self, collection: &str) -> Vec<Document> {
        // A poisoned lock still holds the last complete save.
        let collections = self
            .collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        collections.get(collection).cloned().unwrap_or_default()
    }

    fn save(&self, collection: &str, documents: &[Document]) -> Result<(), StorageError> {
        let mut collections = self
            .collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        collections.insert(collection.to_string(), documents.to_vec());
        Ok(())
    }
}

/// A [`MemoryStore`] whose saves to selected collections fail with an I/O
/// error, leaving the stored contents as they were.
#[derive(Debug, Default)]
pub struct FailingStore {
    inner: MemoryStore,
    failing: Mutex<HashSet<String>>,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every later save to `collection` fails.
    pub fn fail_saves(&self, collection: &str) {
        self.failing
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(collection.to_string());
    }
}

impl CollectionStore for FailingStore {
    fn load(&self, collection: &str) -> Vec<Document> {
        self.inner.load(collection)
    }

    fn save(&self, collection: &str, documents: &[Document]) -> Result<(), StorageError> {
        let failing = self
            .failing
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(collection);
        if failing {
            return Err(StorageError::Io(io::Error::other("disk full")));
        }
        self.inner.save(collection, documents)
    }
}
