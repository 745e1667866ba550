//! Resource types.
//!
//! The JSON layout uses camelCase field names so stores written by the web
//! portal (`classLevel`, `subjectId`, `topicId`) load unchanged.

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Kind of uploaded material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    /// Markdown study notes.
    Notes,
    /// Previous year questions, as Markdown.
    Pyq,
    /// Video URL.
    Video,
    /// External link.
    Link,
    /// PDF as a base64 data URI.
    Pdf,
    /// Image as a base64 data URI.
    Image,
}

impl ResourceCategory {
    /// All categories in display order.
    pub const ALL: [Self; 6] = [
        Self::Notes,
        Self::Pyq,
        Self::Video,
        Self::Link,
        Self::Pdf,
        Self::Image,
    ];

    /// Lowercase name as stored in JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::Pyq => "pyq",
            Self::Video => "video",
            Self::Link => "link",
            Self::Pdf => "pdf",
            Self::Image => "image",
        }
    }

    /// Whether the content is Markdown text that can be rendered.
    #[must_use]
    pub fn is_markdown(self) -> bool {
        matches!(self, Self::Notes | Self::Pyq)
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown resource category: {s}"))
    }
}

/// Class/subject/topic triple identifying where a resource is attached.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TopicKey {
    /// Class level name (e.g., "Class 10").
    pub class_level: String,
    /// Subject id (e.g., "math").
    pub subject_id: String,
    /// Topic id (e.g., "real-numbers").
    pub topic_id: String,
}

impl TopicKey {
    /// Create a topic key.
    pub fn new(
        class_level: impl Into<String>,
        subject_id: impl Into<String>,
        topic_id: impl Into<String>,
    ) -> Self {
        Self {
            class_level: class_level.into(),
            subject_id: subject_id.into(),
            topic_id: topic_id.into(),
        }
    }
}

/// A stored resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedResource {
    /// Unique id (UUID v4 for uploads).
    pub id: String,
    /// Class level name.
    pub class_level: String,
    /// Subject id.
    pub subject_id: String,
    /// Topic id.
    pub topic_id: String,
    /// Display title.
    pub title: String,
    /// Material kind.
    pub category: ResourceCategory,
    /// Markdown text, URL, or base64 data URI depending on `category`.
    pub content: String,
    /// Upload time in milliseconds since the Unix epoch.
    pub timestamp: u64,
}

impl UploadedResource {
    /// Whether this resource is attached to `key`.
    #[must_use]
    pub fn belongs_to(&self, key: &TopicKey) -> bool {
        self.class_level == key.class_level
            && self.subject_id == key.subject_id
            && self.topic_id == key.topic_id
    }
}

/// Upload form fields; id and timestamp are assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewResource {
    /// Where the resource is attached.
    pub key: TopicKey,
    /// Display title.
    pub title: String,
    /// Material kind.
    pub category: ResourceCategory,
    /// Markdown text, URL, or data URI.
    pub content: String,
}

impl NewResource {
    /// Create upload fields for a topic.
    pub fn new(
        key: &TopicKey,
        title: impl Into<String>,
        category: ResourceCategory,
        content: impl Into<String>,
    ) -> Self {
        Self {
            key: key.clone(),
            title: title.into(),
            category,
            content: content.into(),
        }
    }

    /// Turn the form into a stored resource with a fresh id and timestamp.
    pub(crate) fn into_resource(self) -> UploadedResource {
        UploadedResource {
            id: uuid::Uuid::new_v4().to_string(),
            class_level: self.key.class_level,
            subject_id: self.key.subject_id,
            topic_id: self.key.topic_id,
            title: self.title,
            category: self.category,
            content: self.content,
            timestamp: now_millis(),
        }
    }
}

/// Current time in milliseconds since the Unix epoch.
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_category_from_str() {
        assert_eq!("pyq".parse::<ResourceCategory>(), Ok(ResourceCategory::Pyq));
        assert_eq!("PDF".parse::<ResourceCategory>(), Ok(ResourceCategory::Pdf));
        assert!("audio".parse::<ResourceCategory>().is_err());
    }

    #[test]
    fn test_category_is_markdown() {
        assert!(ResourceCategory::Notes.is_markdown());
        assert!(ResourceCategory::Pyq.is_markdown());
        assert!(!ResourceCategory::Link.is_markdown());
        assert!(!ResourceCategory::Image.is_markdown());
    }

    #[test]
    fn test_resource_json_field_names() {
        let json = r#"{
            "id": "mock-2",
            "classLevel": "Class 10",
            "subjectId": "math",
            "topicId": "real-numbers",
            "title": "NCERT Official PDF",
            "category": "link",
            "content": "https://ncert.nic.in/textbook.php?jemh1=1-15",
            "timestamp": 1700000000000
        }"#;
        let resource: UploadedResource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.class_level, "Class 10");
        assert_eq!(resource.category, ResourceCategory::Link);
        assert_eq!(resource.timestamp, 1_700_000_000_000);

        let value = serde_json::to_value(&resource).unwrap();
        assert_eq!(value["subjectId"], "math");
        assert_eq!(value["category"], "link");
    }

    #[test]
    fn test_into_resource_assigns_id_and_timestamp() {
        let key = TopicKey::new("Class 12", "cs", "sql");
        let a = NewResource::new(&key, "Joins", ResourceCategory::Notes, "text").into_resource();
        let b = NewResource::new(&key, "Joins", ResourceCategory::Notes, "text").into_resource();

        assert_ne!(a.id, b.id);
        assert!(uuid::Uuid::parse_str(&a.id).is_ok());
        assert!(a.timestamp > 0);
        assert!(a.belongs_to(&key));
    }

    #[test]
    fn test_belongs_to_requires_all_parts() {
        let key = TopicKey::new("Class 10", "math", "stats");
        let resource =
            NewResource::new(&key, "t", ResourceCategory::Notes, "c").into_resource();
        assert!(!resource.belongs_to(&TopicKey::new("Class 12", "math", "stats")));
        assert!(!resource.belongs_to(&TopicKey::new("Class 10", "science", "stats")));
        assert!(!resource.belongs_to(&TopicKey::new("Class 10", "math", "polynomials")));
    }
}
