//! Error types for configuration loading.
//!
//! Invariants:
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the `.env` file or validating credentials.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The `.env` file exists but could not be read.
    ///
    /// SAFETY: Only the path and the I/O error kind are reported, never content.
    #[error("Failed to read .env file at {path}: {kind}")]
    DotenvIo { path: PathBuf, kind: ErrorKind },

    /// A credential resolved to the empty string and is required by the caller.
    #[error("Missing {name}: set {primary} or {alias} in the .env file")]
    MissingCredential {
        name: &'static str,
        primary: &'static str,
        alias: &'static str,
    },
}
