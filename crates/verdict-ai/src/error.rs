//! Error types for the decision engine

use thiserror::Error;

/// Decision engine error types
#[derive(Error, Debug)]
pub enum AiError {
    /// No usable completion backend. Fatal at startup, before any
    /// query is accepted.
    #[error("configuration error: {0}")]
    Config(String),

    /// The completion backend returned a non-success status.
    #[error("upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The completion backend replied 2xx but the content field was
    /// missing or unusable.
    #[error("upstream response malformed: {0}")]
    UpstreamMalformed(String),

    #[error("tool error: {0}")]
    Tool(String),

    #[error("tool not found: {0}")]
    ToolNotFound(String),

    #[error("no final answer within step limit ({0} iterations)")]
    MaxIterations(usize),

    #[error("completion timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for decision engine operations
pub type Result<T> = std::result::Result<T, AiError>;
