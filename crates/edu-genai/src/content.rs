//! Content types and prompt templates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// System instruction sent with every prompt.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a helpful and knowledgeable academic tutor designed to help students excel.";

/// Kind of material to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Structured study notes.
    Notes,
    /// Previous-year-question style exam set with model answers.
    Pyq,
    /// One-page revision summary.
    Summary,
    /// Five-question multiple-choice quiz.
    Quiz,
}

impl ContentType {
    /// All content types in display order.
    pub const ALL: [Self; 4] = [Self::Notes, Self::Pyq, Self::Summary, Self::Quiz];

    /// Lowercase identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::Pyq => "pyq",
            Self::Summary => "summary",
            Self::Quiz => "quiz",
        }
    }

    /// Human-readable title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Notes => "Study Notes",
            Self::Pyq => "Previous Year Questions",
            Self::Summary => "Quick Summary",
            Self::Quiz => "Practice Quiz",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown content type: {s}"))
    }
}

/// A request for generated material on one topic.
///
/// Names are display names (e.g., "Mathematics"), not ids; they are pasted
/// into the prompt verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudyRequest {
    /// Class level name.
    pub class_name: String,
    /// Subject display name.
    pub subject_name: String,
    /// Topic display name.
    pub topic_name: String,
    /// What to generate.
    pub content_type: ContentType,
}

impl StudyRequest {
    /// Create a request.
    pub fn new(
        class_name: impl Into<String>,
        subject_name: impl Into<String>,
        topic_name: impl Into<String>,
        content_type: ContentType,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            subject_name: subject_name.into(),
            topic_name: topic_name.into(),
            content_type,
        }
    }
}

/// Build the user prompt for a request.
///
/// The notes, PYQ and summary templates ask for Markdown without tables,
/// since the renderer has no table support. The quiz template fixes its own
/// plain-text layout.
pub fn build_prompt(request: &StudyRequest) -> String {
    let StudyRequest {
        class_name: class,
        subject_name: subject,
        topic_name: topic,
        content_type,
    } = request;

    match content_type {
        ContentType::Notes => format!(
            "You are an expert academic tutor. Create comprehensive, structured study notes for:
    **Class:** {class}
    **Subject:** {subject}
    **Topic:** {topic}

    **Structure:**
    1. **Introduction**: Brief overview of the topic.
    2. **Key Concepts & Definitions**: Explain core terms clearly. Use bold text for terms.
    3. **Detailed Explanation**: Break down the topic into easy-to-understand sections with examples.
    4. **Important Formulas / Rules**: (If applicable) List them clearly.
    5. **Common Mistakes**: What should students avoid?
    6. **Key Takeaways**: A quick summary for revision.

    **Formatting Rules:**
    - Use clean Markdown.
    - **Do NOT use tables**. Use bulleted lists instead for compatibility.
    - Use bolding for emphasis.
    - Use code blocks for formulas if needed."
        ),
        ContentType::Pyq => format!(
            "You are an expert academic examiner. Generate a set of Previous Year Question (PYQ) style questions for:
    **Class:** {class}
    **Subject:** {subject}
    **Topic:** {topic}

    **Guidelines:**
    1. **Authenticity**: Generate questions that look like they appeared in actual board exams. Tag each question with a likely year in brackets, e.g., **[CBSE 2023]**, **[2019]**, or **[Sample Paper 2021]**.
    2. **Structure**:
       - **Section A: Very Short Answer (1 Mark)**: Provide 2 questions.
       - **Section B: Short Answer (3 Marks)**: Provide 2 questions.
       - **Section C: Long Answer (5 Marks)**: Provide 1 detailed question.
    3. **Solutions**: After the questions, add a horizontal rule \"---\" and provide **detailed Model Answers** for each question.
    4. **Formatting**: Use clean Markdown. Avoid tables. Use bold for question numbers."
        ),
        ContentType::Summary => format!(
            "Provide a quick 1-page revision summary for {topic} ({subject}, {class}). \
             Focus on high-yield points for exams. Format in Markdown. Avoid tables."
        ),
        ContentType::Quiz => format!(
            "Create a short multiple-choice quiz (5 questions) for {topic} ({subject}, {class}).
    Format:
    Question 1: [Question text]
    A) [Option]
    B) [Option]
    C) [Option]
    D) [Option]

    [Separator]

    Answer Key:
    1. [Answer] - [Explanation]
    ..."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request(content_type: ContentType) -> StudyRequest {
        StudyRequest::new("Class 10", "Mathematics", "Real Numbers", content_type)
    }

    #[test]
    fn test_content_type_round_trip_str() {
        for t in ContentType::ALL {
            assert_eq!(t.as_str().parse::<ContentType>(), Ok(t));
        }
        assert_eq!("QUIZ".parse::<ContentType>(), Ok(ContentType::Quiz));
        assert!("essay".parse::<ContentType>().is_err());
    }

    #[test]
    fn test_content_type_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ContentType::Pyq).unwrap(), r#""pyq""#);
    }

    #[test]
    fn test_notes_prompt_names_request() {
        let prompt = build_prompt(&request(ContentType::Notes));
        assert!(prompt.contains("**Class:** Class 10"));
        assert!(prompt.contains("**Subject:** Mathematics"));
        assert!(prompt.contains("**Topic:** Real Numbers"));
        assert!(prompt.contains("Do NOT use tables"));
    }

    #[test]
    fn test_pyq_prompt_asks_for_rule_before_answers() {
        let prompt = build_prompt(&request(ContentType::Pyq));
        assert!(prompt.contains("horizontal rule \"---\""));
        assert!(prompt.contains("Section C: Long Answer (5 Marks)"));
    }

    #[test]
    fn test_summary_prompt() {
        assert_eq!(
            build_prompt(&request(ContentType::Summary)),
            "Provide a quick 1-page revision summary for Real Numbers (Mathematics, Class 10). \
             Focus on high-yield points for exams. Format in Markdown. Avoid tables."
        );
    }

    #[test]
    fn test_quiz_prompt() {
        let prompt = build_prompt(&request(ContentType::Quiz));
        assert!(prompt.starts_with(
            "Create a short multiple-choice quiz (5 questions) for Real Numbers (Mathematics, Class 10)."
        ));
        assert!(prompt.contains("Answer Key:"));
    }

    #[test]
    fn test_prose_prompts_avoid_tables() {
        for t in [ContentType::Notes, ContentType::Pyq, ContentType::Summary] {
            let prompt = build_prompt(&request(t)).to_lowercase();
            assert!(prompt.contains("tables"), "{t} prompt should mention tables");
        }
    }
}
