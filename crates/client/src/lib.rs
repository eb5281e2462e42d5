//! Tencent Cloud ID-card OCR client.
//!
//! This crate signs requests with the Tencent Cloud API 3.0
//! `TC3-HMAC-SHA256` scheme, calls the `IDCardOCR` action, and parses the
//! response into an [`IdentifyResult`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod image;
pub mod models;
pub mod signer;

pub use client::OcrClient;
pub use client::builder::OcrClientBuilder;
pub use error::{ClientError, Result};
pub use models::{CardSide, IdentifyResult};
pub use signer::{SignedRequest, SigningParams};
