//! `IDCardOCR` endpoint.

use std::time::Duration;

use reqwest::Client;
use scanidcard_config::Credentials;

use crate::error::{ClientError, Result};
use crate::models::{CardSide, IdCardOcrRequest, IdentifyResult};
use crate::signer::{SigningParams, sign};

/// Request host; also the value signed into the `host` canonical header.
pub const HOST: &str = "ocr.tencentcloudapi.com";
pub const SERVICE: &str = "ocr";
pub const ACTION: &str = "IDCardOCR";
pub const VERSION: &str = "2018-11-19";
pub const DEFAULT_ENDPOINT: &str = "https://ocr.tencentcloudapi.com";
pub const CONTENT_TYPE: &str = "application/json";

/// Everything needed to issue one `IDCardOCR` request.
#[derive(Debug, Clone, Copy)]
pub struct IdCardOcrCall<'a> {
    /// Endpoint base URL without a trailing slash.
    pub endpoint: &'a str,
    pub credentials: &'a Credentials,
    pub language: &'a str,
    pub image_base64: &'a str,
    pub side: CardSide,
    /// Unix timestamp in seconds used for signing and `X-TC-Timestamp`.
    pub timestamp: i64,
    /// Request timeout, reported in [`ClientError::Timeout`].
    pub timeout: Duration,
}

/// Recognize an ID card image.
///
/// The response body is parsed for both success and error HTTP statuses, since
/// the service reports failures inside `Response.Error`.
pub async fn id_card_ocr(client: &Client, call: &IdCardOcrCall<'_>) -> Result<IdentifyResult> {
    let payload = serde_json::to_string(&IdCardOcrRequest::new(call.image_base64, call.side))
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to encode request: {}", e)))?;

    let signed = sign(
        &call.credentials.secret_id,
        &call.credentials.secret_key,
        &SigningParams {
            service: SERVICE,
            host: HOST,
            action: ACTION,
            timestamp: call.timestamp,
            payload: &payload,
            content_type: CONTENT_TYPE,
        },
    )?;

    let url = format!("{}/", call.endpoint);
    let mut builder = client
        .post(&url)
        .header("Authorization", &signed.authorization)
        .header("Content-Type", CONTENT_TYPE)
        .header("Host", HOST)
        .header("X-TC-Action", ACTION)
        .header("X-TC-Timestamp", call.timestamp.to_string())
        .header("X-TC-Version", VERSION)
        .header("X-TC-Language", call.language);

    let region = call.credentials.region.trim();
    if !region.is_empty() {
        builder = builder.header("X-TC-Region", region);
    }

    tracing::debug!(
        url = %url,
        side = %call.side,
        region = region,
        image_len = call.image_base64.len(),
        "Sending IDCardOCR request"
    );

    let response = builder.body(payload).send().await.map_err(|e| {
        if e.is_timeout() {
            ClientError::Timeout(call.timeout)
        } else if e.is_connect() {
            ClientError::ConnectionFailed(url.clone())
        } else {
            ClientError::HttpError(e)
        }
    })?;

    let status = response.status().as_u16();
    let text = response.text().await?;
    let result = IdentifyResult::from_response_text(&text);

    tracing::debug!(
        status,
        request_id = %result.request_id,
        error_code = result.error_code,
        "Received IDCardOCR response"
    );

    Ok(result)
}
