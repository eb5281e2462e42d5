//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants and Tencent Cloud error codes to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use scanidcard_client::ClientError;
use scanidcard_config::ConfigError;

/// Structured exit codes for scanidcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - rejected secret id, key or signature.
    ///
    /// Scripts should check the credentials in the .env file.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ///
    /// Scripts may retry with exponential backoff.
    ConnectionError = 3,

    /// Validation error - missing credentials, unreadable image, bad parameters.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Rate limited - `RequestLimitExceeded`.
    ///
    /// Scripts should back off and retry later.
    RateLimited = 7,

    /// Service unavailable - `InternalError` or `ResourceUnavailable`.
    ///
    /// Scripts should back off and retry later.
    ServiceUnavailable = 8,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    /// Map a Tencent Cloud `Response.Error.Code` to an exit code.
    pub fn from_api_code(code: &str) -> Self {
        let has_prefix = |prefixes: &[&str]| prefixes.iter().any(|p| code.starts_with(p));

        if has_prefix(&["AuthFailure"]) {
            ExitCode::AuthenticationFailed
        } else if has_prefix(&["RequestLimitExceeded"]) {
            ExitCode::RateLimited
        } else if has_prefix(&["InternalError", "ResourceUnavailable"]) {
            ExitCode::ServiceUnavailable
        } else if has_prefix(&["InvalidParameter", "FailedOperation"]) {
            ExitCode::ValidationError
        } else {
            ExitCode::GeneralError
        }
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            // Service-reported errors
            ClientError::Api { code, .. } => Self::from_api_code(code),

            // Connection errors (exit code 3)
            ClientError::Timeout(_) => ExitCode::ConnectionError,
            ClientError::ConnectionFailed(_) => ExitCode::ConnectionError,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            // Validation errors (exit code 5)
            ClientError::Config(_) => ExitCode::ValidationError,
            ClientError::ImageRead { .. } => ExitCode::ValidationError,
            ClientError::EmptyImage => ExitCode::ValidationError,
            ClientError::ImageTooLarge { .. } => ExitCode::ValidationError,
            ClientError::InvalidCardSide(_) => ExitCode::ValidationError,

            ClientError::InvalidResponse(_) => ExitCode::GeneralError,
            ClientError::Signing(_) => ExitCode::GeneralError,
            ClientError::InvalidTimestamp(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;

    /// True if a transient ClientError (network, throttling, server fault) is in the chain.
    fn is_retryable(&self) -> bool;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ValidationError;
            }
        }

        ExitCode::GeneralError
    }

    fn is_retryable(&self) -> bool {
        self.chain()
            .filter_map(|cause| cause.downcast_ref::<ClientError>())
            .any(ClientError::is_retryable)
    }
}
