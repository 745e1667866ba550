//! Store trait and error types.
//!
//! Provides the core [`ResourceStore`] trait shared by every backend, along
//! with [`StorageError`] for unified error handling.

use std::path::PathBuf;

use crate::resource::{NewResource, ResourceCategory, TopicKey, UploadedResource};

/// Largest accepted resource content, in bytes (5 MiB).
pub const MAX_CONTENT_BYTES: usize = 5 * 1024 * 1024;

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Upload form failed validation.
    InvalidInput,
    /// Content exceeds [`MAX_CONTENT_BYTES`].
    TooLarge,
    /// Stored data could not be decoded.
    Corrupt,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// Resource id context (if applicable).
    pub resource_id: Option<String>,
    /// File path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Json", "Memory").
    pub backend: Option<&'static str>,
    detail: Option<String>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            resource_id: None,
            path: None,
            backend: None,
            detail: None,
            source: None,
        }
    }

    /// Attach resource id context.
    #[must_use]
    pub fn with_resource_id(mut self, id: impl Into<String>) -> Self {
        self.resource_id = Some(id.into());
        self
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach a human-readable detail message.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error for a resource id.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_resource_id(id)
    }

    /// Create a validation error.
    #[must_use]
    pub fn invalid_input(detail: impl Into<String>) -> Self {
        Self::new(StorageErrorKind::InvalidInput).with_detail(detail)
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            _ => StorageErrorKind::Other,
        };
        Self::new(kind).with_source(err).with_path(path)
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: detail: source (resource: id) (path: /foo)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::InvalidInput => "Invalid input",
            StorageErrorKind::TooLarge => "Too large",
            StorageErrorKind::Corrupt => "Corrupt data",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(detail) = &self.detail {
            write!(f, ": {detail}")?;
        }

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(id) = &self.resource_id {
            write!(f, " (resource: {id})")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Check an upload before it is stored.
///
/// Title and content must be non-blank; the uploaded file must fit in
/// [`MAX_CONTENT_BYTES`].
pub(crate) fn validate(resource: &NewResource) -> Result<(), StorageError> {
    if resource.title.trim().is_empty() {
        return Err(StorageError::invalid_input("title cannot be empty"));
    }
    if resource.content.trim().is_empty() {
        return Err(StorageError::invalid_input("content cannot be empty"));
    }
    let size = file_size(resource);
    if size > MAX_CONTENT_BYTES {
        return Err(StorageError::new(StorageErrorKind::TooLarge).with_detail(format!(
            "content is {size} bytes, limit is {MAX_CONTENT_BYTES}"
        )));
    }
    Ok(())
}

/// Size of the file an upload stands for.
///
/// PDFs and images are stored as base64 data URIs; the limit applies to the
/// decoded payload, not the encoded text.
fn file_size(resource: &NewResource) -> usize {
    if matches!(resource.category, ResourceCategory::Pdf | ResourceCategory::Image)
        && let Some(rest) = resource.content.strip_prefix("data:")
        && let Some((_, payload)) = rest.split_once(";base64,")
    {
        let payload = payload.trim();
        let padding = payload.bytes().rev().take_while(|&b| b == b'=').count();
        return (payload.len() / 4 * 3).saturating_sub(padding);
    }
    resource.content.len()
}

/// Store abstraction for uploaded resources.
///
/// Resources keep insertion order. Backends own their synchronisation, so all
/// methods take `&self`.
pub trait ResourceStore: Send + Sync {
    /// Return every resource in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn list(&self) -> Result<Vec<UploadedResource>, StorageError>;

    /// Store a new resource, assigning its id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`StorageErrorKind::InvalidInput`] for a blank title or content,
    /// [`StorageErrorKind::TooLarge`] for oversized content, or an I/O error
    /// if the backend fails to persist.
    fn add(&self, resource: NewResource) -> Result<UploadedResource, StorageError>;

    /// Remove a resource and return it.
    ///
    /// # Errors
    ///
    /// Returns [`StorageErrorKind::NotFound`] if no resource has this id.
    fn delete(&self, id: &str) -> Result<UploadedResource, StorageError>;

    /// Resources attached to one topic, in insertion order.
    fn list_for_topic(&self, key: &TopicKey) -> Result<Vec<UploadedResource>, StorageError> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|r| r.belongs_to(key))
            .collect())
    }

    /// Look up a resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageErrorKind::NotFound`] if no resource has this id.
    fn get(&self, id: &str) -> Result<UploadedResource, StorageError> {
        self.list()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| StorageError::not_found(id))
    }
}
