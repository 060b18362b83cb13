use std::time::Duration;

use thiserror::Error;

/// Failures raised while invoking or interpreting a chat completion.
///
/// `Upstream` keeps the status code and the fully read response body so
/// callers can surface what the completion endpoint rejected.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion endpoint returned status {status}: {body}")]
    Upstream {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion request timed out after {0:?}")]
    Timeout(Duration),

    #[error("completion response contained no message content")]
    MissingContent,

    #[error("failed to parse completion as JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("completion does not match the expected schema: {0}")]
    SchemaMismatch(String),
}
