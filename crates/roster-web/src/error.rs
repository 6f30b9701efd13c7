/// Error types for the Roster web interface

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure of a call against the users API.
///
/// The detail is only ever logged; views show a fixed message per operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize body: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid API URL: {0}")]
    InvalidApiUrl(String),
    #[error("Company id is missing")]
    MissingCompanyId,
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}
