//! `edu classes`, `edu subjects` and `edu topics` command implementations.

use clap::Args;
use edu_curriculum::{Curriculum, Navigator, Topic};

use crate::error::CliError;
use crate::output::Output;

/// Print every class level.
pub(crate) fn list_classes(curriculum: &Curriculum) {
    let output = Output::new();
    output.highlight("Classes");
    for class in curriculum.classes() {
        output.document(&format!("  {class}"));
    }
}

/// Arguments for the subjects command.
#[derive(Args)]
pub(crate) struct SubjectsArgs {
    /// Class level name (e.g., "Class 10").
    class: String,
}

impl SubjectsArgs {
    pub(crate) fn execute(self, curriculum: &Curriculum) -> Result<(), CliError> {
        let output = Output::new();
        let mut navigator = Navigator::new(curriculum);
        navigator.select_class(&self.class)?;

        output.highlight(&navigator.breadcrumb().join(" / "));
        for subject in curriculum.subjects(&self.class)? {
            output.row(&subject.id, &subject.name);
        }
        Ok(())
    }
}

/// Arguments for the topics command.
#[derive(Args)]
pub(crate) struct TopicsArgs {
    /// Class level name (e.g., "Class 10").
    class: String,

    /// Subject id (e.g., "math").
    subject: String,

    /// Only show topics whose name or description contains this text.
    #[arg(short, long)]
    search: Option<String>,
}

impl TopicsArgs {
    pub(crate) fn execute(self, curriculum: &Curriculum) -> Result<(), CliError> {
        let output = Output::new();
        let mut navigator = Navigator::new(curriculum);
        navigator.select_class(&self.class)?;
        navigator.select_subject(&self.subject)?;
        if let Some(query) = &self.search {
            navigator.set_search(query.as_str());
        }

        output.highlight(&navigator.breadcrumb().join(" / "));
        let topics = navigator.visible_topics()?;
        if topics.is_empty() {
            output.warning(&format!("No topics match '{}'", navigator.search()));
        }
        for topic in topics {
            output.row(&topic.id, &topic_detail(topic));
        }
        Ok(())
    }
}

fn topic_detail(topic: &Topic) -> String {
    if topic.description.is_empty() {
        topic.name.clone()
    } else {
        format!("{} - {}", topic.name, topic.description)
    }
}
