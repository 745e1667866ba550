//! Generated study content.
//!
//! Students can ask for notes, previous-year questions, a summary or a quiz
//! for any topic. This crate turns such a request into a prompt, sends it to
//! a generative-text API and returns Markdown.
//!
//! - [`ContentType`] / [`StudyRequest`]: what to generate
//! - [`build_prompt`]: the fixed prompt templates
//! - [`TextGenerator`]: seam for the remote call, implemented by [`GeminiClient`]
//! - [`StudyContentService`]: never fails; errors come back as Markdown
//!   documents so the caller renders them like any other content

mod client;
mod content;
mod error;
mod service;

pub use client::{GeminiClient, GeminiConfig, TextGenerator};
pub use content::{ContentType, StudyRequest, SYSTEM_INSTRUCTION, build_prompt};
pub use error::GenAiError;
pub use service::{API_KEY_MISSING, EMPTY_RESPONSE, StudyContentService, generation_error_document};
