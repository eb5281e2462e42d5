//! Tencent Cloud API 3.0 request signing (`TC3-HMAC-SHA256`).
//!
//! This module is responsible for:
//! - Building the canonical request and string to sign for a POST to `/`
//! - Deriving the signing key from the secret key, date and service
//! - Rendering the `Authorization` header
//!
//! # Invariants
//! - The payload and content type passed here must be byte-identical to what
//!   is sent, otherwise the service rejects the request with a signature mismatch.
//! - The credential date is the UTC date of the timestamp, never local time.

use chrono::DateTime;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

use crate::error::{ClientError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Signature algorithm name.
pub const ALGORITHM: &str = "TC3-HMAC-SHA256";

/// Headers covered by the signature, in canonical order.
pub const SIGNED_HEADERS: &str = "content-type;host;x-tc-action";

/// Inputs describing the request to sign.
#[derive(Debug, Clone, Copy)]
pub struct SigningParams<'a> {
    /// Product name, e.g. `ocr`.
    pub service: &'a str,
    /// Request host, e.g. `ocr.tencentcloudapi.com`.
    pub host: &'a str,
    /// API action, e.g. `IDCardOCR`.
    pub action: &'a str,
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    /// Exact request body.
    pub payload: &'a str,
    pub content_type: &'a str,
}

/// Output of [`sign`], keeping the intermediate strings for debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub authorization: String,
    pub signature: String,
    pub canonical_request: String,
    pub string_to_sign: String,
    /// `YYYY-MM-DD` in UTC.
    pub date: String,
    pub timestamp: i64,
    pub signed_headers: String,
    pub canonical_headers: String,
}

/// Sign a request.
///
/// # Errors
///
/// Returns [`ClientError::InvalidTimestamp`] if the timestamp has no UTC date.
pub fn sign(
    secret_id: &str,
    secret_key: &SecretString,
    params: &SigningParams<'_>,
) -> Result<SignedRequest> {
    let date = DateTime::from_timestamp(params.timestamp, 0)
        .ok_or(ClientError::InvalidTimestamp(params.timestamp))?
        .format("%Y-%m-%d")
        .to_string();

    let canonical_headers = format!(
        "content-type:{}\nhost:{}\nx-tc-action:{}\n",
        params.content_type,
        params.host,
        params.action.to_lowercase()
    );
    let canonical_request = format!(
        "POST\n/\n\n{}\n{}\n{}",
        canonical_headers,
        SIGNED_HEADERS,
        sha256_hex(params.payload)
    );

    let credential_scope = format!("{}/{}/tc3_request", date, params.service);
    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        params.timestamp,
        credential_scope,
        sha256_hex(&canonical_request)
    );

    let secret_date = hmac_sha256(
        format!("TC3{}", secret_key.expose_secret()).as_bytes(),
        &date,
    )?;
    let secret_service = hmac_sha256(&secret_date, params.service)?;
    let secret_signing = hmac_sha256(&secret_service, "tc3_request")?;
    let signature = hex::encode(hmac_sha256(&secret_signing, &string_to_sign)?);

    let authorization = format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        ALGORITHM, secret_id, credential_scope, SIGNED_HEADERS, signature
    );

    Ok(SignedRequest {
        authorization,
        signature,
        canonical_request,
        string_to_sign,
        date,
        timestamp: params.timestamp,
        signed_headers: SIGNED_HEADERS.to_string(),
        canonical_headers,
    })
}

fn sha256_hex(data: &str) -> String {
    hex::encode(Sha256::digest(data.as_bytes()))
}

fn hmac_sha256(key: &[u8], message: &str) -> Result<Vec<u8>> {
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|e| ClientError::Signing(e.to_string()))?;
    mac.update(message.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}
