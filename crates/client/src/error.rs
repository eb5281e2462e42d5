//! Error types for the OCR client.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use scanidcard_config::ConfigError;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during OCR client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Credentials are missing or incomplete.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error returned by the Tencent Cloud API in `Response.Error`.
    #[error("API error {code}: {message}{}", .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    Api {
        code: String,
        message: String,
        request_id: Option<String>,
    },

    /// Response body could not be interpreted.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Could not connect to the endpoint.
    #[error("Connection failed to {0}")]
    ConnectionFailed(String),

    /// Invalid endpoint URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Request signing failed.
    #[error("Failed to sign request: {0}")]
    Signing(String),

    /// Timestamp cannot be represented as a UTC date.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),

    /// Image file could not be read.
    #[error("Failed to read image {path}: {source}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image data is empty.
    #[error("Image is empty")]
    EmptyImage,

    /// Encoded image exceeds the service limit.
    #[error("Encoded image is {size} bytes, over the {limit}-byte limit")]
    ImageTooLarge { size: usize, limit: usize },

    /// Unrecognized card side.
    #[error("Invalid card side '{0}': expected auto, front or back")]
    InvalidCardSide(String),
}

impl ClientError {
    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError(_) | Self::Timeout(_) | Self::ConnectionFailed(_) => true,
            Self::Api { code, .. } => Self::is_retryable_code(code),
            _ => false,
        }
    }

    /// Check if a Tencent Cloud error code is transient.
    ///
    /// Retryable codes:
    /// - `RequestLimitExceeded*`: rate limiting
    /// - `InternalError*`: transient server error
    /// - `ResourceUnavailable*`: service temporarily unavailable
    pub fn is_retryable_code(code: &str) -> bool {
        ["RequestLimitExceeded", "InternalError", "ResourceUnavailable"]
            .iter()
            .any(|prefix| code.starts_with(prefix))
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::Config(_) => true,
            Self::Api { code, .. } => code.starts_with("AuthFailure"),
            _ => false,
        }
    }
}
