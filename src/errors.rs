//! Error types for Foreman API operations

use thiserror::Error;

/// Errors that can occur when talking to the Foreman API
#[derive(Debug, Error)]
pub enum ForemanError {
    /// Client configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Local data could not be serialized for the wire
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Request could not be constructed (bad URL, un-cloneable body)
    #[error("Request construction error: {0}")]
    RequestConstruction(String),

    /// Network-level failure while sending the request
    #[error("Transport error: {0}")]
    Transport(String),

    /// The API answered with a non-success status
    #[error("Foreman API returned {status}: {body}")]
    Api { status: u16, body: String },

    /// Response body could not be decoded
    #[error("Response decode error: {0}")]
    Decode(String),

    /// The BMC responded, but reported the operation as failed
    #[error("BMC operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for Foreman API operations
pub type ForemanResult<T> = Result<T, ForemanError>;

impl From<serde_json::Error> for ForemanError {
    fn from(err: serde_json::Error) -> Self {
        ForemanError::Serialization(err.to_string())
    }
}
