//! Generative-text API client.
//!
//! Provides a sync HTTP client for the Gemini `generateContent` REST
//! endpoint, authenticated with an API key header.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ureq::Agent;

use crate::error::GenAiError;

/// Default API base URL.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model.
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default sampling temperature.
const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 60;

/// Seam for the remote text-generation call.
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt` under the given system instruction.
    ///
    /// Returns the concatenated model text, which may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError`] on transport, HTTP status or decoding failure.
    fn generate(&self, system: &str, prompt: &str) -> Result<String, GenAiError>;
}

/// Gemini API configuration.
#[derive(Clone, Debug)]
pub struct GeminiConfig {
    /// API key sent in the `x-goog-api-key` header.
    pub api_key: String,
    /// API base URL, without trailing slash.
    pub base_url: String,
    /// Model name.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Global request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Config with default model, endpoint, temperature and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
    system_instruction: RequestContent<'a>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GenerateResponse {
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

fn build_request<'a>(system: &'a str, prompt: &'a str, temperature: f64) -> GenerateRequest<'a> {
    GenerateRequest {
        contents: [RequestContent {
            parts: [RequestPart { text: prompt }],
        }],
        system_instruction: RequestContent {
            parts: [RequestPart { text: system }],
        },
        generation_config: GenerationConfig { temperature },
    }
}

/// Concatenate the text parts of the first candidate.
///
/// A blocked prompt with no candidates is an error; a candidate without text
/// yields an empty string.
fn extract_text(response: GenerateResponse) -> Result<String, GenAiError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(GenAiError::Blocked(reason));
        }
        return Ok(String::new());
    };

    Ok(candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default())
}

/// Gemini REST API client.
pub struct GeminiClient {
    agent: Agent,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a client from config values.
    #[must_use]
    pub fn new(mut config: GeminiConfig) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(false)
            .build()
            .into();

        config.base_url = config.base_url.trim_end_matches('/').to_owned();
        Self { agent, config }
    }

    /// Model this client sends requests to.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Get the `generateContent` URL for the configured model.
    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, system: &str, prompt: &str) -> Result<String, GenAiError> {
        let url = self.generate_url();
        info!("Generating content with {}", self.config.model);

        let request = build_request(system, prompt, self.config.temperature);
        let response = self
            .agent
            .post(&url)
            .header("x-goog-api-key", self.config.api_key.as_str())
            .header("Accept", "application/json")
            .send_json(&request)?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(GenAiError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let raw = body_reader.read_to_string()?;
        let body: GenerateResponse = serde_json::from_str(&raw)?;
        let text = extract_text(body)?;
        debug!("Received {} bytes of generated text", text.len());
        Ok(text)
    }
}
