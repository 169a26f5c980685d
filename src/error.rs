use thiserror::Error;

/// Main error type for the odds pipeline
#[derive(Error, Debug)]
pub enum OddsError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Network errors
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gamma API error {status}: {body}")]
    Api { status: u16, body: String },

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Market data errors
    #[error("Market data unavailable: {0}")]
    MarketDataUnavailable(String),

    // Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for OddsError
pub type Result<T> = std::result::Result<T, OddsError>;

impl OddsError {
    /// Whether retrying the same request could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            OddsError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            OddsError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
