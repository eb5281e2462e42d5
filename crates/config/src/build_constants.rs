//! Build-time constant generation.
//!
//! Responsibilities:
//! - Render resolved credentials as Rust `const` items for inclusion via `include!`.
//! - Provide the cargo directives a build script needs to track the `.env` file
//!   and report problems with it.
//!
//! Does NOT handle:
//! - Loading or resolving the `.env` file (see `loader`).
//!
//! Invariants:
//! - Values are emitted as escaped Rust string literals, so any `.env` value
//!   yields source that compiles.
//! - The output is deterministic: constants always appear in the same order.

use std::io;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};

use crate::constants::{CONST_REGION, CONST_SECRET_ID, CONST_SECRET_KEY};
use crate::loader::Credentials;

/// File name the generated source is written to inside `OUT_DIR`.
pub const GENERATED_FILE_NAME: &str = "build_constants.rs";

/// Credential values to be baked into a binary at compile time.
#[derive(Debug, Clone)]
pub struct BuildConstants {
    secret_id: String,
    secret_key: SecretString,
    region: String,
}

impl BuildConstants {
    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self {
            secret_id: credentials.secret_id.clone(),
            secret_key: credentials.secret_key.clone(),
            region: credentials.region.clone(),
        }
    }

    /// Render `pub const NAME: &str = "...";` lines for every constant.
    pub fn to_rust_source(&self) -> String {
        let entries = [
            (CONST_SECRET_ID, self.secret_id.as_str()),
            (CONST_SECRET_KEY, self.secret_key.expose_secret()),
            (CONST_REGION, self.region.as_str()),
        ];

        let mut source = String::from("// @generated by scanidcard-config. Do not edit.\n");
        for (name, value) in entries {
            // `{:?}` on a str produces a valid, fully escaped Rust string literal.
            source.push_str(&format!("pub const {}: &str = {:?};\n", name, value));
        }
        source
    }

    /// Write the generated source into `out_dir`, returning the file path.
    ///
    /// The file is left untouched when it already holds the same source, so
    /// its mtime only moves when a constant changes.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from writing the file.
    pub fn write_to(&self, out_dir: &Path) -> io::Result<PathBuf> {
        let path = out_dir.join(GENERATED_FILE_NAME);
        let source = self.to_rust_source();
        if std::fs::read(&path).is_ok_and(|existing| existing == source.as_bytes()) {
            return Ok(path);
        }
        std::fs::write(&path, source)?;
        Ok(path)
    }
}

/// Cargo directive that re-runs the build script when `dotenv_path` changes.
pub fn rerun_if_changed(dotenv_path: &Path) -> String {
    format!("cargo:rerun-if-changed={}", dotenv_path.display())
}

/// Cargo directive that surfaces `message` as a build warning, folded onto one line.
pub fn cargo_warning(message: impl std::fmt::Display) -> String {
    let message = message.to_string();
    format!("cargo:warning={}", message.lines().collect::<Vec<_>>().join(" "))
}
