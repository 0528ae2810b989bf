//! Typed collection access
//!
//! Converts between stored documents and the directory entity types.

use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::CollectionStore;
use crate::error::StorageError;

/// Loads a collection as `T`, skipping documents that do not fit the type.
pub fn load_typed<T, S>(store: &S, collection: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: CollectionStore + ?Sized,
{
    store
        .load(collection)
        .into_iter()
        .enumerate()
        .filter_map(|(index, document)| {
            match serde_json::from_value(Value::Object(document)) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!("Skipping entry {} of {}: {}", index, collection, e);
                    None
                }
            }
        })
        .collect()
}

/// Replaces a collection with the given items.
pub fn save_typed<T, S>(store: &S, collection: &str, items: &[T]) -> Result<(), StorageError>
where
    T: Serialize,
    S: CollectionStore + ?Sized,
{
    let mut documents = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::to_value(item)? {
            Value::Object(map) => documents.push(map),
            other => {
                return Err(StorageError::Serialize(serde::ser::Error::custom(format!(
                    "{} entries must serialize to objects, got {}",
                    collection, other
                ))));
            }
        }
    }

    store.save(collection, &documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Document, MemoryStore};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Item {
        key: String,
        count: u32,
    }

    #[test]
    fn test_mistyped_documents_are_skipped() {
        let store = MemoryStore::new();
        let documents: Vec<Document> = [
            json!({"key": "a", "count": 1}),
            json!({"key": "b"}),
            json!({"key": "c", "count": 3}),
        ]
        .into_iter()
        .filter_map(|v| v.as_object().cloned())
        .collect();
        store.save("items", &documents).unwrap();

        let items: Vec<Item> = load_typed(&store, "items");

        assert_eq!(
            items,
            vec![
                Item { key: "a".into(), count: 1 },
                Item { key: "c".into(), count: 3 },
            ]
        );
    }

    #[test]
    fn test_save_typed_writes_objects() {
        let store = MemoryStore::new();
        save_typed(&store, "items", &[Item { key: "a".into(), count: 7 }]).unwrap();

        let documents = store.load("items");
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0]["count"], 7);
    }
}
