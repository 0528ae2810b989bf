//! JSON file backed store
//!
//! Each collection lives in its own pretty-printed JSON array file. Saves go to
//! a sibling `.tmp` file first and are renamed into place.

use log::{debug, error, warn};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{CollectionStore, Document};
use crate::error::StorageError;

/// Store that maps each collection name to one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
    paths: HashMap<String, PathBuf>,
}

impl JsonFileStore {
    /// Collections default to `<root>/<name>.json`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            paths: HashMap::new(),
        }
    }

    /// Overrides the file used for one collection. Relative paths resolve
    /// against the store root.
    pub fn with_collection(mut self, collection: &str, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(collection.to_string(), path.into());
        self
    }

    /// Get the file backing a collection
    pub fn path_for(&self, collection: &str) -> PathBuf {
        match self.paths.get(collection) {
            Some(path) => self.root.join(path),
            None => self.root.join(format!("{}.json", collection)),
        }
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Parses a collection file. Anything but a JSON array of objects is corrupt;
/// non-object array elements are dropped.
fn parse_collection(path: &Path, content: &str) -> Vec<Document> {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Array(items)) => {
            let total = items.len();
            let documents: Vec<Document> = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(map) => Some(map),
                    _ => None,
                })
                .collect();
            if documents.len() != total {
                warn!(
                    "Dropped {} malformed entries from {}",
                    total - documents.len(),
                    path.display()
                );
            }
            documents
        }
        Ok(_) => {
            warn!("{} is not a JSON array, treating as empty", path.display());
            Vec::new()
        }
        Err(e) => {
            warn!("{} is corrupt ({}), treating as empty", path.display(), e);
            Vec::new()
        }
    }
}

impl CollectionStore for JsonFileStore {
    fn load(&self, collection: &str) -> Vec<Document> {
        let path = self.path_for(collection);

        if !path.is_file() {
            debug!("Collection {} has no file at {}", collection, path.display());
            return Vec::new();
        }

        match fs::read_to_string(&path) {
            Ok(content) => parse_collection(&path, &content),
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    fn save(&self, collection: &str, documents: &[Document]) -> Result<(), StorageError> {
        let path = self.path_for(collection);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(documents)?;
        let temp = temp_path(&path);

        if let Err(e) = fs::write(&temp, content).and_then(|_| fs::rename(&temp, &path)) {
            error!("Failed to save collection {} to {}: {}", collection, path.display(), e);
            let _ = fs::remove_file(&temp);
            return Err(StorageError::from(e));
        }

        debug!(
            "Saved {} documents to collection {} ({})",
            documents.len(),
            collection,
            path.display()
        );
        Ok(())
    }
}
