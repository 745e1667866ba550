//! JSON file resource store.
//!
//! The whole resource list is kept in memory and written back as a single
//! JSON array after every mutation. Writes go to a sibling temporary file
//! that is renamed over the target, so a crash mid-write leaves the previous
//! list intact.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::{debug, info, warn};

use crate::resource::{NewResource, UploadedResource};
use crate::seed::seed_resources;
use crate::store::{ResourceStore, StorageError, StorageErrorKind, validate};

const BACKEND: &str = "Json";

/// [`ResourceStore`] persisted as one JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    resources: Mutex<Vec<UploadedResource>>,
}

impl JsonFileStore {
    /// Open the store at `path`.
    ///
    /// A missing file starts from [`seed_resources`]. A file that exists but
    /// cannot be parsed is logged and also replaced by the seed list; it is
    /// overwritten on the next mutation. Nothing is written by `open` itself.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let resources = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<UploadedResource>>(&content) {
                Ok(resources) => {
                    debug!("Loaded {} resources from {}", resources.len(), path.display());
                    resources
                }
                Err(e) => {
                    warn!(
                        "Failed to parse resources in {}, using sample resources: {e}",
                        path.display()
                    );
                    seed_resources()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No resource store at {}, using sample resources", path.display());
                seed_resources()
            }
            Err(e) => return Err(StorageError::io(e, &path).with_backend(BACKEND)),
        };

        Ok(Self {
            path,
            resources: Mutex::new(resources),
        })
    }

    /// Path of the backing JSON file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `resources` to disk via a temporary sibling file.
    fn persist(&self, resources: &[UploadedResource]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| StorageError::io(e, parent).with_backend(BACKEND))?;
        }

        let json = serde_json::to_string_pretty(resources).map_err(|e| {
            StorageError::new(StorageErrorKind::Corrupt)
                .with_source(e)
                .with_backend(BACKEND)
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| StorageError::io(e, &tmp).with_backend(BACKEND))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| StorageError::io(e, &self.path).with_backend(BACKEND))?;

        debug!("Wrote {} resources to {}", resources.len(), self.path.display());
        Ok(())
    }
}

impl ResourceStore for JsonFileStore {
    fn list(&self) -> Result<Vec<UploadedResource>, StorageError> {
        Ok(self
            .resources
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn add(&self, resource: NewResource) -> Result<UploadedResource, StorageError> {
        validate(&resource).map_err(|e| e.with_backend(BACKEND))?;
        let stored = resource.into_resource();

        let mut resources = self.resources.lock().unwrap_or_else(PoisonError::into_inner);
        resources.push(stored.clone());
        if let Err(e) = self.persist(&resources) {
            resources.pop();
            return Err(e);
        }

        info!("Added resource {} ({})", stored.id, stored.title);
        Ok(stored)
    }

    fn delete(&self, id: &str) -> Result<UploadedResource, StorageError> {
        let mut resources = self.resources.lock().unwrap_or_else(PoisonError::into_inner);
        let pos = resources
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StorageError::not_found(id).with_backend(BACKEND))?;

        let removed = resources.remove(pos);
        if let Err(e) = self.persist(&resources) {
            resources.insert(pos, removed);
            return Err(e);
        }

        info!("Deleted resource {id}");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{ResourceCategory, TopicKey};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn upload(title: &str) -> NewResource {
        NewResource::new(
            &TopicKey::new("Class 12", "chemistry", "solutions"),
            title,
            ResourceCategory::Notes,
            "Raoult's law",
        )
    }

    #[test]
    fn test_open_missing_file_uses_seed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("resources.json");
        let store = JsonFileStore::open(&path).unwrap();

        let ids: Vec<String> = store.list().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["mock-1".to_owned(), "mock-2".to_owned()]);
        assert!(!path.exists());
    }

    #[test]
    fn test_open_corrupt_file_uses_seed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("resources.json");
        fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn test_add_persists_and_reloads() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data").join("resources.json");

        let store = JsonFileStore::open(&path).unwrap();
        let added = store.add(upload("Colligative properties")).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());

        let reopened = JsonFileStore::open(&path).unwrap();
        let list = reopened.list().unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[2], added);
    }

    #[test]
    fn test_delete_persists() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("resources.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.delete("mock-1").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        let ids: Vec<String> = reopened.list().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["mock-2".to_owned()]);
    }

    #[test]
    fn test_empty_list_round_trips_as_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("resources.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.delete("mock-1").unwrap();
        store.delete("mock-2").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert!(reopened.list().unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_keeps_file_untouched() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("resources.json");

        let store = JsonFileStore::open(&path).unwrap();
        let err = store.delete("missing").unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::NotFound);
        assert!(!path.exists());
    }

    #[test]
    fn test_add_invalid_not_persisted() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("resources.json");

        let store = JsonFileStore::open(&path).unwrap();
        assert!(store.add(upload(" ")).is_err());
        assert!(!path.exists());
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn test_reads_web_portal_format() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("resources.json");
        fs::write(
            &path,
            r#"[{"id":"x1","classLevel":"Class 10","subjectId":"english","topicId":"grammar",
                "title":"Tenses","category":"notes","content":"- past\n- present","timestamp":1}]"#,
        )
        .unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        let resource = store.get("x1").unwrap();
        assert_eq!(resource.topic_id, "grammar");
        assert_eq!(resource.content, "- past\n- present");
    }
}
