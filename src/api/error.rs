//! API Error Types
//!
//! Errors raised while talking to the remote dashboard API.

use thiserror::Error;

/// Errors that can occur when calling the dashboard API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection, TLS or timeout failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API rejected the bearer token (HTTP 401)
    #[error("Unauthorized")]
    Unauthorized,

    /// Any other non-success status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// True for an invalid or expired token
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;
