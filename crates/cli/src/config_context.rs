//! Credential context for command execution.
//!
//! Responsibilities:
//! - Choose between the build-time credentials and a run-time `--env-file`.
//! - Apply the `--region` override.
//!
//! Does NOT handle:
//! - Parsing `.env` files (see `scanidcard-config`).
//! - Validating that credentials are non-empty (done by commands that spend them).
//!
//! Invariants:
//! - Without `--env-file`, only the baked constants are used; the process
//!   environment is never consulted for credentials.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use scanidcard_config::{CredentialSources, Credentials, EnvMap, resolve_credentials, try_load};
use secrecy::SecretString;

use crate::baked;

/// Where the active credentials came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CredentialSource {
    /// Constants baked in by `build.rs`.
    BuildTime,
    /// A `.env` file loaded at run time.
    EnvFile(PathBuf),
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialSource::BuildTime => f.write_str("build-time constants"),
            CredentialSource::EnvFile(path) => write!(f, ".env file {}", path.display()),
        }
    }
}

/// Resolved credentials plus their provenance.
#[derive(Debug, Clone)]
pub(crate) struct CredentialContext {
    pub(crate) source: CredentialSource,
    pub(crate) credentials: Credentials,
    /// Keys each setting resolved from; `None` for build-time constants.
    pub(crate) sources: Option<CredentialSources>,
}

impl CredentialContext {
    /// Resolve credentials from `env_file` if given, otherwise from the baked constants.
    pub(crate) fn resolve(env_file: Option<&Path>, region: Option<&str>) -> Result<Self> {
        let mut context = match env_file {
            Some(path) => Self::from_env_file(path)?,
            None => Self::build_time(),
        };
        context.credentials = context.credentials.with_region_override(region);
        Ok(context)
    }

    fn build_time() -> Self {
        Self {
            source: CredentialSource::BuildTime,
            credentials: Credentials::new(
                baked::TENCENT_SECRET_ID,
                SecretString::new(baked::TENCENT_SECRET_KEY.into()),
                baked::TENCENT_REGION,
            ),
            sources: None,
        }
    }

    fn from_env_file(path: &Path) -> Result<Self> {
        let env: EnvMap = try_load(path)
            .with_context(|| format!("Failed to load credentials from {}", path.display()))?;
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Env file not found; using defaults");
        }
        Ok(Self {
            source: CredentialSource::EnvFile(path.to_path_buf()),
            credentials: resolve_credentials(&env),
            sources: Some(CredentialSources::from_env(&env)),
        })
    }
}
