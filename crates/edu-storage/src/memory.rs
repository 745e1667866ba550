//! In-memory resource store.

use std::sync::{PoisonError, RwLock};

use tracing::info;

use crate::resource::{NewResource, UploadedResource};
use crate::store::{ResourceStore, StorageError, validate};

/// In-process [`ResourceStore`] with no persistence.
///
/// Used in tests and when persistence is disabled in configuration.
#[derive(Debug, Default)]
pub struct MemoryStore {
    resources: RwLock<Vec<UploadedResource>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `resources`.
    #[must_use]
    pub fn with_resources(resources: Vec<UploadedResource>) -> Self {
        Self {
            resources: RwLock::new(resources),
        }
    }
}

impl ResourceStore for MemoryStore {
    fn list(&self) -> Result<Vec<UploadedResource>, StorageError> {
        Ok(self
            .resources
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn add(&self, resource: NewResource) -> Result<UploadedResource, StorageError> {
        validate(&resource).map_err(|e| e.with_backend("Memory"))?;
        let stored = resource.into_resource();
        info!("Added resource {} ({})", stored.id, stored.title);
        self.resources
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(stored.clone());
        Ok(stored)
    }

    fn delete(&self, id: &str) -> Result<UploadedResource, StorageError> {
        let mut resources = self
            .resources
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let pos = resources
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StorageError::not_found(id).with_backend("Memory"))?;
        info!("Deleted resource {id}");
        Ok(resources.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{ResourceCategory, TopicKey};
    use crate::store::StorageErrorKind;
    use pretty_assertions::assert_eq;

    fn key() -> TopicKey {
        TopicKey::new("Class 10", "science", "electricity")
    }

    #[test]
    fn test_add_then_list() {
        let store = MemoryStore::new();
        let a = store
            .add(NewResource::new(&key(), "Ohm", ResourceCategory::Notes, "V = IR"))
            .unwrap();
        let b = store
            .add(NewResource::new(
                &key(),
                "Video",
                ResourceCategory::Video,
                "https://example.com/v",
            ))
            .unwrap();
        assert_eq!(store.list().unwrap(), vec![a, b]);
    }

    #[test]
    fn test_add_rejects_invalid() {
        let store = MemoryStore::new();
        let err = store
            .add(NewResource::new(&key(), "", ResourceCategory::Notes, "x"))
            .unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::InvalidInput);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_add_accepts_four_mib_pdf() {
        let store = MemoryStore::new();
        let content = crate::export::encode_data_uri("application/pdf", &vec![0u8; 4 * 1024 * 1024]);
        let added = store
            .add(NewResource::new(&key(), "Past paper", ResourceCategory::Pdf, content))
            .unwrap();
        assert_eq!(store.get(&added.id).unwrap().title, "Past paper");
    }

    #[test]
    fn test_list_for_topic_filters() {
        let store = MemoryStore::new();
        let other = TopicKey::new("Class 10", "science", "light");
        store
            .add(NewResource::new(&key(), "A", ResourceCategory::Notes, "a"))
            .unwrap();
        store
            .add(NewResource::new(&other, "B", ResourceCategory::Notes, "b"))
            .unwrap();

        let found = store.list_for_topic(&other).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "B");
    }

    #[test]
    fn test_get_and_delete() {
        let store = MemoryStore::new();
        let added = store
            .add(NewResource::new(&key(), "A", ResourceCategory::Notes, "a"))
            .unwrap();

        assert_eq!(store.get(&added.id).unwrap(), added);
        assert_eq!(store.delete(&added.id).unwrap(), added);
        assert_eq!(store.get(&added.id).unwrap_err().kind, StorageErrorKind::NotFound);
    }

    #[test]
    fn test_delete_missing() {
        let store = MemoryStore::new();
        let err = store.delete("nope").unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::NotFound);
        assert_eq!(err.resource_id.as_deref(), Some("nope"));
    }
}
