//! Client builder for constructing [`OcrClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating that credentials are present
//! - Normalizing the endpoint URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts)
//!
//! # Invariants
//! - `credentials` is required and must carry a non-empty secret id and key
//! - The endpoint is always normalized to have no trailing slashes

use std::time::Duration;

use scanidcard_config::{Credentials, Setting};
use scanidcard_config::constants::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_LANGUAGE, DEFAULT_TIMEOUT_SECS,
};

use crate::client::OcrClient;
use crate::endpoints::DEFAULT_ENDPOINT;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`OcrClient`].
pub struct OcrClientBuilder {
    credentials: Option<Credentials>,
    endpoint: String,
    language: String,
    timeout: Duration,
    connect_timeout: Duration,
}

impl Default for OcrClientBuilder {
    fn default() -> Self {
        Self {
            credentials: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl OcrClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the credentials and region.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Override the endpoint base URL.
    ///
    /// Defaults to `https://ocr.tencentcloudapi.com`. Trailing slashes are removed.
    /// The signed `Host` stays `ocr.tencentcloudapi.com`.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the `X-TC-Language` header. Default is `zh-CN`.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the request timeout. Default is 20 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout. Default is 15 seconds.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    fn normalize_endpoint(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`OcrClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if credentials are missing or empty.
    /// Returns [`ClientError::InvalidUrl`] if the endpoint is not http(s).
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<OcrClient> {
        let credentials = self
            .credentials
            .ok_or_else(|| Setting::SECRET_ID.missing())?;
        credentials.ensure_present()?;

        let endpoint = Self::normalize_endpoint(self.endpoint);
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ClientError::InvalidUrl(endpoint));
        }
        if endpoint.starts_with("http://") {
            tracing::warn!(endpoint = %endpoint, "Using a plain-HTTP OCR endpoint");
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .build()?;

        Ok(OcrClient {
            http,
            endpoint,
            credentials,
            language: self.language,
            timeout: self.timeout,
        })
    }
}
