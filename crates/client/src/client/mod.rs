//! Main OCR client.
//!
//! This module provides [`OcrClient`], which owns the HTTP client and the
//! resolved credentials and issues signed `IDCardOCR` requests.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//!
//! # What this module does NOT handle:
//! - Request signing (delegated to [`crate::signer`])
//! - HTTP request construction (delegated to [`crate::endpoints`])
//! - Loading credentials (see the `scanidcard-config` crate)
//!
//! # Invariants
//! - A built client always holds a non-empty secret id and secret key.

pub mod builder;

use std::time::Duration;

use scanidcard_config::Credentials;

use crate::endpoints::{self, IdCardOcrCall};
use crate::error::Result;
use crate::models::{CardSide, IdentifyResult};

/// Tencent Cloud ID-card OCR client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use scanidcard_client::OcrClient;
///
/// let client = OcrClient::builder()
///     .credentials(credentials)
///     .build()?;
/// let result = client.id_card_ocr(&image_base64, CardSide::Front).await?;
/// ```
#[derive(Debug)]
pub struct OcrClient {
    pub(crate) http: reqwest::Client,
    pub(crate) endpoint: String,
    pub(crate) credentials: Credentials,
    pub(crate) language: String,
    pub(crate) timeout: Duration,
}

impl OcrClient {
    /// Create a new client builder.
    pub fn builder() -> builder::OcrClientBuilder {
        builder::OcrClientBuilder::new()
    }

    /// Get the endpoint base URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the region sent in `X-TC-Region`.
    pub fn region(&self) -> &str {
        &self.credentials.region
    }

    /// Recognize an ID card image, signing with the current time.
    ///
    /// Service-side failures are reported in the returned result's
    /// `error_code`/`error_message`; use [`IdentifyResult::into_result`] to
    /// turn them into errors.
    pub async fn id_card_ocr(&self, image_base64: &str, side: CardSide) -> Result<IdentifyResult> {
        self.id_card_ocr_at(image_base64, side, chrono::Utc::now().timestamp())
            .await
    }

    /// Recognize an ID card image, signing with an explicit timestamp.
    pub async fn id_card_ocr_at(
        &self,
        image_base64: &str,
        side: CardSide,
        timestamp: i64,
    ) -> Result<IdentifyResult> {
        let call = IdCardOcrCall {
            endpoint: &self.endpoint,
            credentials: &self.credentials,
            language: &self.language,
            image_base64,
            side,
            timestamp,
            timeout: self.timeout,
        };
        endpoints::id_card_ocr(&self.http, &call).await
    }
}
