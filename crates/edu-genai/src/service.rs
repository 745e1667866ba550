//! Study content generation with Markdown error documents.

use std::fmt::Display;

use tracing::{error, info};

use crate::client::TextGenerator;
use crate::content::{SYSTEM_INSTRUCTION, StudyRequest, build_prompt};

/// Document returned when no API key is configured.
pub const API_KEY_MISSING: &str = "# API Key Missing\n\n\
Please check your environment configuration. Set `genai.api_key` in `edu.toml` \
or the `GEMINI_API_KEY` environment variable.";

/// Document returned when the model produced no text.
pub const EMPTY_RESPONSE: &str = "No content generated. Please try again.";

/// Markdown document describing a failed generation call.
pub fn generation_error_document(err: &dyn Display) -> String {
    format!(
        "## Error Generating Content\n\n\
         We encountered an issue connecting to the AI tutor. Please try again later.\n\n\
         *Technical Details: {err}*"
    )
}

/// Generates study material, always returning a Markdown document.
///
/// Failures (missing key, transport errors, empty output) are reported as
/// Markdown text so callers render them through the same path as content.
pub struct StudyContentService {
    generator: Option<Box<dyn TextGenerator>>,
}

impl StudyContentService {
    /// Create a service backed by `generator`.
    pub fn new(generator: impl TextGenerator + 'static) -> Self {
        Self {
            generator: Some(Box::new(generator)),
        }
    }

    /// Create a service with no API key; every request yields [`API_KEY_MISSING`].
    #[must_use]
    pub fn without_api_key() -> Self {
        Self { generator: None }
    }

    /// Whether a generator is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    /// Generate Markdown for a request.
    pub fn generate(&self, request: &StudyRequest) -> String {
        let Some(generator) = &self.generator else {
            return API_KEY_MISSING.to_owned();
        };

        info!(
            "Generating {} for {} / {} / {}",
            request.content_type, request.class_name, request.subject_name, request.topic_name
        );

        match generator.generate(SYSTEM_INSTRUCTION, &build_prompt(request)) {
            Ok(text) if text.is_empty() => EMPTY_RESPONSE.to_owned(),
            Ok(text) => text,
            Err(err) => {
                error!("Content generation failed: {err}");
                generation_error_document(&err)
            }
        }
    }
}
