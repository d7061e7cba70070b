use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Usage: gitgraphed <username> [year]")]
    Usage,

    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP request failed with status code: {status}")]
    HttpStatus { status: u16 },

    #[error("Failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    #[error("Error encoding JSON: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Transport,
    Protocol,
    Read,
    Encoding,
    Io,
    Configuration,
}

impl GraphError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GraphError::Usage => ErrorCategory::Usage,
            GraphError::Transport(_) => ErrorCategory::Transport,
            GraphError::HttpStatus { .. } => ErrorCategory::Protocol,
            GraphError::BodyRead(_) => ErrorCategory::Read,
            GraphError::Encoding(_) => ErrorCategory::Encoding,
            GraphError::Io(_) => ErrorCategory::Io,
            GraphError::Pattern(_)
            | GraphError::ConfigError { .. }
            | GraphError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
        }
    }

    /// Every failure aborts the single invocation with the same status.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
