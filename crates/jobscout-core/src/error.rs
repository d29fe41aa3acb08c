use thiserror::Error;

/// Application-wide error types for jobscout.
#[derive(Error, Debug)]
pub enum AppError {
    /// An HTTP request completed with a failure status.
    #[error("fetch failed: {message}")]
    FetchFailed {
        status: Option<u16>,
        message: String,
    },

    /// A single fetch attempt timed out.
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// Network/connection error (DNS failure, refused connection).
    #[error("network error: {0}")]
    NetworkError(String),

    /// A response could not be parsed into job postings
    /// (unexpected markup, invalid JSON shape).
    #[error("parse error: {0}")]
    ParseError(String),

    /// The search request itself is invalid (empty site list, zero budget).
    /// Surfaced to the caller before any scraping starts.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// JSON serialization/deserialization failed.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Invalid configuration (bad env var, malformed header value).
    #[error("config error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Returns true if this error is transient and worth another attempt.
    ///
    /// Timeouts, connection faults, server-side failures (5xx), and rate
    /// limiting (429) are transient. Client errors (4xx), parse errors,
    /// and request errors are deterministic; retrying them only burns
    /// the fetch budget.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Timeout(_) | AppError::NetworkError(_) => true,
            AppError::FetchFailed { status, .. } => {
                matches!(status, Some(429) | Some(500..=599) | None)
            }
            _ => false,
        }
    }
}
