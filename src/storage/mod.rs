//! Collection storage
//!
//! A collection is a named, ordered sequence of JSON documents that is always
//! loaded and saved as a whole. Directories never touch files directly; they
//! go through [`CollectionStore`] so the backing store can be swapped.

pub mod filesystem;
pub mod memory;
pub mod operations;

use crate::error::StorageError;
use serde_json::{Map, Value};

pub use filesystem::JsonFileStore;
pub use memory::{FailingStore, MemoryStore};
pub use operations::{load_typed, save_typed};

/// Name of the user account collection.
pub const USERS: &str = "users";
/// Name of the student record collection.
pub const RECORDS: &str = "records";

/// One stored entry: a mapping from field name to value.
pub type Document = Map<String, Value>;

/// Whole-collection load/save.
pub trait CollectionStore {
    /// Returns the collection in stored order. A missing or unreadable
    /// collection is empty, never an error.
    fn load(&self, collection: &str) -> Vec<Document>;

    /// Replaces the entire collection. A subsequent `load` sees either the old
    /// or the new contents, never a mix.
    fn save(&self, collection: &str, documents: &[Document]) -> Result<(), StorageError>;
}
