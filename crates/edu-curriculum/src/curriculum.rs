//! Curriculum types and lookups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A subject taught at a class level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Stable identifier (e.g., "math"). Unique within a class level.
    pub id: String,
    /// Display name (e.g., "Mathematics").
    pub name: String,
    /// Icon name used by the view layer.
    pub icon: String,
}

/// A topic within a subject.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Stable identifier (e.g., "real-numbers"). Unique within a subject.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short syllabus description.
    pub description: String,
}

/// Subjects and topics for one class level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassLevel {
    /// Class level name (e.g., "Class 10"). Used as the class identifier.
    pub name: String,
    /// Subjects in display order.
    pub subjects: Vec<Subject>,
    /// Topics keyed by subject id.
    #[serde(default)]
    pub topics: BTreeMap<String, Vec<Topic>>,
}

/// The full class → subject → topic catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curriculum {
    /// Class levels in display order.
    #[serde(default, rename = "class")]
    pub classes: Vec<ClassLevel>,
}

/// Lookup error for an unknown class, subject or topic.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CurriculumError {
    /// No class level with this name.
    #[error("unknown class: {0}")]
    UnknownClass(String),
    /// No subject with this id in the class.
    #[error("unknown subject '{subject}' in {class}")]
    UnknownSubject {
        /// Class level name.
        class: String,
        /// Requested subject id.
        subject: String,
    },
    /// No topic with this id in the subject.
    #[error("unknown topic '{topic}' in {class}/{subject}")]
    UnknownTopic {
        /// Class level name.
        class: String,
        /// Subject id.
        subject: String,
        /// Requested topic id.
        topic: String,
    },
    /// Navigation step attempted before its parent level was selected.
    #[error("no {0} selected")]
    NotSelected(&'static str),
}

impl Curriculum {
    /// Class level names in display order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|c| c.name.as_str())
    }

    /// Look up a class level by name.
    pub fn class(&self, class: &str) -> Result<&ClassLevel, CurriculumError> {
        self.classes
            .iter()
            .find(|c| c.name == class)
            .ok_or_else(|| CurriculumError::UnknownClass(class.to_owned()))
    }

    /// Subjects offered at a class level.
    pub fn subjects(&self, class: &str) -> Result<&[Subject], CurriculumError> {
        Ok(&self.class(class)?.subjects)
    }

    /// Look up a subject by id.
    pub fn subject(&self, class: &str, subject_id: &str) -> Result<&Subject, CurriculumError> {
        self.class(class)?
            .subjects
            .iter()
            .find(|s| s.id == subject_id)
            .ok_or_else(|| CurriculumError::UnknownSubject {
                class: class.to_owned(),
                subject: subject_id.to_owned(),
            })
    }

    /// Topics of a subject.
    ///
    /// A known subject without a topic list yields an empty slice.
    pub fn topics(&self, class: &str, subject_id: &str) -> Result<&[Topic], CurriculumError> {
        self.subject(class, subject_id)?;
        let level = self.class(class)?;
        Ok(level
            .topics
            .get(subject_id)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    /// Look up a topic by id.
    pub fn topic(
        &self,
        class: &str,
        subject_id: &str,
        topic_id: &str,
    ) -> Result<&Topic, CurriculumError> {
        self.topics(class, subject_id)?
            .iter()
            .find(|t| t.id == topic_id)
            .ok_or_else(|| CurriculumError::UnknownTopic {
                class: class.to_owned(),
                subject: subject_id.to_owned(),
                topic: topic_id.to_owned(),
            })
    }

    /// Topics whose name or description contains `query`, ignoring case.
    ///
    /// An empty query matches every topic.
    pub fn search_topics(
        &self,
        class: &str,
        subject_id: &str,
        query: &str,
    ) -> Result<Vec<&Topic>, CurriculumError> {
        let needle = query.to_lowercase();
        Ok(self
            .topics(class, subject_id)?
            .iter()
            .filter(|t| {
                t.name.to_lowercase().contains(&needle)
                    || t.description.to_lowercase().contains(&needle)
            })
            .collect())
    }
}
