//! Navigation state over the curriculum hierarchy.
//!
//! The selection is owned by a [`Navigator`] and handed to views as a
//! read-only [`NavigationView`] snapshot. Selecting a level clears every
//! deeper level, and the reset operations walk back up the hierarchy.

use crate::curriculum::{Curriculum, CurriculumError, Subject, Topic};

/// Read-only snapshot of the current navigation position.
#[derive(Debug, PartialEq, Eq)]
pub enum NavigationView<'a> {
    /// Class selection screen.
    Home,
    /// Subject selection for a class.
    Class {
        /// Selected class level.
        class: &'a str,
    },
    /// Topic selection for a subject.
    Subject {
        /// Selected class level.
        class: &'a str,
        /// Selected subject.
        subject: &'a Subject,
    },
    /// Content view for a topic.
    Topic {
        /// Selected class level.
        class: &'a str,
        /// Selected subject.
        subject: &'a Subject,
        /// Selected topic.
        topic: &'a Topic,
    },
}

/// Selection state for walking class → subject → topic.
#[derive(Debug)]
pub struct Navigator<'a> {
    curriculum: &'a Curriculum,
    class: Option<String>,
    subject: Option<String>,
    topic: Option<String>,
    search: String,
}

impl<'a> Navigator<'a> {
    /// Start at the class selection screen.
    #[must_use]
    pub fn new(curriculum: &'a Curriculum) -> Self {
        Self {
            curriculum,
            class: None,
            subject: None,
            topic: None,
            search: String::new(),
        }
    }

    /// Select a class level, clearing subject, topic and search.
    pub fn select_class(&mut self, class: &str) -> Result<(), CurriculumError> {
        self.curriculum.class(class)?;
        self.reset_to_home();
        self.class = Some(class.to_owned());
        Ok(())
    }

    /// Select a subject of the current class, clearing topic and search.
    pub fn select_subject(&mut self, subject_id: &str) -> Result<(), CurriculumError> {
        let class = self.class.as_deref().ok_or(CurriculumError::NotSelected("class"))?;
        self.curriculum.subject(class, subject_id)?;
        self.reset_to_subject();
        self.subject = Some(subject_id.to_owned());
        Ok(())
    }

    /// Select a topic of the current subject.
    pub fn select_topic(&mut self, topic_id: &str) -> Result<(), CurriculumError> {
        let class = self.class.as_deref().ok_or(CurriculumError::NotSelected("class"))?;
        let subject = self
            .subject
            .as_deref()
            .ok_or(CurriculumError::NotSelected("subject"))?;
        self.curriculum.topic(class, subject, topic_id)?;
        self.topic = Some(topic_id.to_owned());
        Ok(())
    }

    /// Set the topic search query for the current subject.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Current topic search query.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Topics of the current subject filtered by the search query.
    pub fn visible_topics(&self) -> Result<Vec<&'a Topic>, CurriculumError> {
        let class = self.class.as_deref().ok_or(CurriculumError::NotSelected("class"))?;
        let subject = self
            .subject
            .as_deref()
            .ok_or(CurriculumError::NotSelected("subject"))?;
        self.curriculum.search_topics(class, subject, &self.search)
    }

    /// Return to the class selection screen.
    pub fn reset_to_home(&mut self) {
        self.class = None;
        self.reset_to_subject();
    }

    /// Return to subject selection, keeping the class.
    pub fn reset_to_subject(&mut self) {
        self.subject = None;
        self.topic = None;
        self.search.clear();
    }

    /// Return to topic selection, keeping class, subject and search.
    pub fn reset_to_topic(&mut self) {
        self.topic = None;
    }

    /// Snapshot of the current position.
    pub fn view(&self) -> NavigationView<'a> {
        let Some(class) = self.class.as_deref() else {
            return NavigationView::Home;
        };
        let Ok(level) = self.curriculum.class(class) else {
            return NavigationView::Home;
        };
        let class = level.name.as_str();

        let Some(subject) = self
            .subject
            .as_deref()
            .and_then(|id| self.curriculum.subject(class, id).ok())
        else {
            return NavigationView::Class { class };
        };

        match self
            .topic
            .as_deref()
            .and_then(|id| self.curriculum.topic(class, &subject.id, id).ok())
        {
            Some(topic) => NavigationView::Topic {
                class,
                subject,
                topic,
            },
            None => NavigationView::Subject { class, subject },
        }
    }

    /// Display names from class down to the deepest selected level.
    pub fn breadcrumb(&self) -> Vec<&'a str> {
        match self.view() {
            NavigationView::Home => Vec::new(),
            NavigationView::Class { class } => vec![class],
            NavigationView::Subject { class, subject } => vec![class, subject.name.as_str()],
            NavigationView::Topic {
                class,
                subject,
                topic,
            } => vec![class, subject.name.as_str(), topic.name.as_str()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_at_home() {
        let curriculum = Curriculum::builtin();
        let nav = Navigator::new(&curriculum);
        assert_eq!(nav.view(), NavigationView::Home);
        assert!(nav.breadcrumb().is_empty());
    }

    #[test]
    fn test_full_walk() {
        let curriculum = Curriculum::builtin();
        let mut nav = Navigator::new(&curriculum);
        nav.select_class("Class 10").unwrap();
        nav.select_subject("math").unwrap();
        nav.select_topic("real-numbers").unwrap();

        assert!(matches!(nav.view(), NavigationView::Topic { topic, .. } if topic.id == "real-numbers"));
        assert_eq!(
            nav.breadcrumb(),
            vec!["Class 10", "Mathematics", "Real Numbers"]
        );
    }

    #[test]
    fn test_select_subject_requires_class() {
        let curriculum = Curriculum::builtin();
        let mut nav = Navigator::new(&curriculum);
        assert_eq!(
            nav.select_subject("math"),
            Err(CurriculumError::NotSelected("class"))
        );
    }

    #[test]
    fn test_select_unknown_class_keeps_state() {
        let curriculum = Curriculum::builtin();
        let mut nav = Navigator::new(&curriculum);
        nav.select_class("Class 12").unwrap();
        assert!(nav.select_class("Class 7").is_err());
        assert_eq!(nav.view(), NavigationView::Class { class: "Class 12" });
    }

    #[test]
    fn test_select_class_clears_deeper_levels() {
        let curriculum = Curriculum::builtin();
        let mut nav = Navigator::new(&curriculum);
        nav.select_class("Class 10").unwrap();
        nav.select_subject("science").unwrap();
        nav.set_search("light");
        nav.select_class("Class 12").unwrap();

        assert_eq!(nav.view(), NavigationView::Class { class: "Class 12" });
        assert_eq!(nav.search(), "");
    }

    #[test]
    fn test_reset_to_topic_keeps_search() {
        let curriculum = Curriculum::builtin();
        let mut nav = Navigator::new(&curriculum);
        nav.select_class("Class 10").unwrap();
        nav.select_subject("math").unwrap();
        nav.set_search("poly");
        nav.select_topic("polynomials").unwrap();
        nav.reset_to_topic();

        assert!(matches!(nav.view(), NavigationView::Subject { .. }));
        assert_eq!(nav.search(), "poly");
    }

    #[test]
    fn test_reset_to_subject_clears_search() {
        let curriculum = Curriculum::builtin();
        let mut nav = Navigator::new(&curriculum);
        nav.select_class("Class 10").unwrap();
        nav.select_subject("math").unwrap();
        nav.set_search("poly");
        nav.reset_to_subject();

        assert_eq!(nav.view(), NavigationView::Class { class: "Class 10" });
        assert_eq!(nav.search(), "");
    }

    #[test]
    fn test_reset_to_home() {
        let curriculum = Curriculum::builtin();
        let mut nav = Navigator::new(&curriculum);
        nav.select_class("Class 10").unwrap();
        nav.select_subject("math").unwrap();
        nav.reset_to_home();
        assert_eq!(nav.view(), NavigationView::Home);
    }

    #[test]
    fn test_visible_topics_filtered() {
        let curriculum = Curriculum::builtin();
        let mut nav = Navigator::new(&curriculum);
        nav.select_class("Class 12").unwrap();
        nav.select_subject("physics").unwrap();
        assert_eq!(nav.visible_topics().unwrap().len(), 3);

        nav.set_search("DIODES");
        let topics = nav.visible_topics().unwrap();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].id, "semiconductors");
    }
}
