//! Resource store for uploaded study material.
//!
//! Instructors attach material (notes, past questions, links, videos, PDFs,
//! images) to a topic. This crate provides:
//!
//! - [`ResourceStore`] trait with `list`, `get`, `add` and `delete`
//! - [`JsonFileStore`]: the whole list persisted as one JSON array on disk
//! - [`MemoryStore`]: in-process store for tests and non-persistent sessions
//! - [`export_resource`] / [`export_generated`]: download payloads
//!
//! # Example
//!
//! ```
//! use edu_storage::{MemoryStore, NewResource, ResourceCategory, ResourceStore, TopicKey};
//!
//! let store = MemoryStore::new();
//! let key = TopicKey::new("Class 10", "math", "real-numbers");
//! let added = store
//!     .add(NewResource::new(&key, "Formula sheet", ResourceCategory::Notes, "# Formulas"))
//!     .unwrap();
//! assert_eq!(store.list_for_topic(&key).unwrap(), vec![added]);
//! ```

mod export;
mod fs;
mod memory;
mod resource;
mod seed;
mod store;

pub use export::{
    Export, ExportError, encode_data_uri, export_generated, export_resource, safe_file_stem,
};
pub use fs::JsonFileStore;
pub use memory::MemoryStore;
pub use resource::{NewResource, ResourceCategory, TopicKey, UploadedResource};
pub use seed::seed_resources;
pub use store::{MAX_CONTENT_BYTES, ResourceStore, StorageError, StorageErrorKind};
