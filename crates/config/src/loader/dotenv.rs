//! `.env` file parsing.
//!
//! Responsibilities:
//! - Read an optional `.env` file and parse it line by line.
//! - Strip one layer of matching `"` or `'` quotes from values.
//!
//! Does NOT handle:
//! - Escape sequences, nested quotes, `export` prefixes, variable expansion or
//!   inline comments. A value is the text after the first `=`, trimmed.
//! - Mutating the process environment (unlike `dotenvy::dotenv()`).
//!
//! Invariants:
//! - Later occurrences of a key overwrite earlier ones.
//! - Lines that are blank, start with `#`, or contain no `=` are skipped silently.

use std::borrow::Cow;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use super::error::ConfigError;

/// Mapping of `.env` keys to their parsed values.
pub type EnvMap = HashMap<String, String>;

/// Load `path` and parse it, treating any failure as "no overrides".
///
/// A missing file yields an empty mapping silently. A file that exists but
/// cannot be read (permissions, a directory) also yields an empty mapping,
/// with a warning naming the path and the error kind. Invalid UTF-8 is not a
/// read failure; see [`try_load`].
pub fn load(path: &Path) -> EnvMap {
    match try_load(path) {
        Ok(env) => env,
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable .env file");
            EnvMap::new()
        }
    }
}

/// Load `path` and parse it, surfacing read failures other than "not found".
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD, so only the
/// lines containing them are affected.
///
/// # Errors
///
/// Returns [`ConfigError::DotenvIo`] if the file exists but cannot be read.
pub fn try_load(path: &Path) -> Result<EnvMap, ConfigError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No .env file found");
            return Ok(EnvMap::new());
        }
        Err(e) => {
            return Err(ConfigError::DotenvIo {
                path: path.to_path_buf(),
                kind: e.kind(),
            });
        }
    };

    // Non-UTF-8 bytes (a GBK comment, say) become U+FFFD; the other lines still parse.
    let contents = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = contents {
        tracing::warn!(path = %path.display(), "The .env file is not valid UTF-8; invalid bytes were replaced");
    }

    let env = parse(&contents);
    tracing::debug!(path = %path.display(), keys = env.len(), "Loaded .env file");
    Ok(env)
}

/// Parse `.env` contents into a mapping.
pub fn parse(contents: &str) -> EnvMap {
    // Editors on Windows like to prepend a BOM, which would otherwise stick to the first key.
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);

    let mut env = EnvMap::new();
    for line in contents.lines() {
        if let Some((key, value)) = parse_line(line) {
            env.insert(key.to_string(), value.to_string());
        }
    }
    env
}

/// Split a single line into `(key, value)`, or `None` if the line is skipped.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    Some((key.trim(), strip_matching_quotes(value.trim())))
}

/// Remove exactly one surrounding pair of `"` or `'`, if present.
fn strip_matching_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
