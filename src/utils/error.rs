use crate::core::validator::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MiddlewareError {
    #[error("Log validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Log request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("HTTP {status}: {reason}")]
    StatusError { status: u16, reason: String },

    #[error("Log request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Malformed log response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl MiddlewareError {
    /// Transport failures may succeed on another attempt; local errors never do.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            MiddlewareError::HttpError(_)
                | MiddlewareError::StatusError { .. }
                | MiddlewareError::Timeout { .. }
                | MiddlewareError::MalformedResponse(_)
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MiddlewareError::Validation(e) => format!("The log record was rejected: {}", e),
            MiddlewareError::HttpError(_) => {
                "Could not reach the log endpoint. Check the network and api_url.".to_string()
            }
            MiddlewareError::StatusError { status, .. } => {
                format!("The log endpoint answered with HTTP {}", status)
            }
            MiddlewareError::Timeout { timeout_ms } => {
                format!("The log endpoint did not answer within {}ms", timeout_ms)
            }
            MiddlewareError::MalformedResponse(_) => {
                "The log endpoint returned an unexpected response body".to_string()
            }
            MiddlewareError::IoError(e) => format!("Could not read a file: {}", e),
            MiddlewareError::TomlError(e) => format!("The configuration file is invalid: {}", e),
            MiddlewareError::ConfigError { message } => message.clone(),
            MiddlewareError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MiddlewareError>;
