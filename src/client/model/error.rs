use thiserror::Error;

use crate::client::constant::NETWORK_ERROR_MESSAGE;

/// Failure of a call made through the API client.
///
/// `Display` yields the text shown to the user, so components can render
/// `err.to_string()` directly.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ApiError {
    /// Backend answered with a non-2xx status.
    ///
    /// `message` comes from the body's `errorMessage` or `message` field, or
    /// the generic fallback when neither is present.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Request never completed (DNS failure, refused connection, CORS block).
    ///
    /// The underlying transport error is logged, not carried.
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network,

    /// A 2xx body could not be read as the expected response type.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Request body could not be encoded as JSON.
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

impl ApiError {
    /// HTTP status for server errors, `None` for client-side failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Base URL is empty or does not use an http(s) scheme.
    #[error("Invalid API base URL '{0}': expected an http:// or https:// URL")]
    InvalidBaseUrl(String),
}
