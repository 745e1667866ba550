//! Error types for content generation.

/// Error from the text-generation API.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API refused the prompt.
    #[error("prompt blocked: {0}")]
    Blocked(String),
}
