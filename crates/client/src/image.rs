//! Image preparation for the `ImageBase64` request field.
//!
//! # Invariants
//! - Output is standard-alphabet Base64 with padding and no line breaks.
//! - Output never carries a `data:` URL prefix; the service rejects it.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{ClientError, Result};

/// Maximum size of the Base64-encoded image accepted by the service (10 MiB).
pub const MAX_ENCODED_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Base64-encode raw image bytes.
///
/// # Errors
///
/// Returns [`ClientError::EmptyImage`] for empty input and
/// [`ClientError::ImageTooLarge`] if the encoding exceeds the service limit.
pub fn encode_image(bytes: &[u8]) -> Result<String> {
    if bytes.is_empty() {
        return Err(ClientError::EmptyImage);
    }
    check_size(STANDARD.encode(bytes))
}

/// Read an image file and Base64-encode it.
pub fn encode_image_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| ClientError::ImageRead {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read image file");
    encode_image(&bytes)
}

/// Read a file that already contains Base64 text, optionally as a `data:` URL.
pub fn read_base64_file(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path).map_err(|source| ClientError::ImageRead {
        path: path.to_path_buf(),
        source,
    })?;
    let encoded: String = strip_data_url_prefix(text.trim())
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    if encoded.is_empty() {
        return Err(ClientError::EmptyImage);
    }
    check_size(encoded)
}

/// Remove a leading `data:<mime>;base64,` prefix if present.
pub fn strip_data_url_prefix(value: &str) -> &str {
    if !value.starts_with("data:") {
        return value;
    }
    match value.split_once(";base64,") {
        Some((_, rest)) => rest,
        None => value,
    }
}

fn check_size(encoded: String) -> Result<String> {
    if encoded.len() > MAX_ENCODED_IMAGE_BYTES {
        return Err(ClientError::ImageTooLarge {
            size: encoded.len(),
            limit: MAX_ENCODED_IMAGE_BYTES,
        });
    }
    Ok(encoded)
}
