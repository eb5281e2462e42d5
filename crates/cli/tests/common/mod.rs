//! Shared test utilities for scanidcard integration tests.
//!
//! Responsibilities:
//! - Provide a CLI command factory that never depends on build-time credentials.
//! - Write throwaway `.env` files and images.
//!
//! Invariants / Assumptions:
//! - Every command built here passes `--env-file`, so the workspace `.env`
//!   baked into the binary is never used.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const TEST_SECRET_ID: &str = "AKIDEXAMPLE1234";
pub const TEST_SECRET_KEY: &str = "SECRETEXAMPLE";

/// Scratch directory holding a `.env` file and test images.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    /// A workspace whose `.env` carries complete test credentials.
    pub fn with_credentials() -> Self {
        Self::with_env(&format!(
            "SecretId={}\nSecretKey={}\nRegion=ap-beijing\n",
            TEST_SECRET_ID, TEST_SECRET_KEY
        ))
    }

    pub fn with_env(contents: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".env"), contents).unwrap();
        Self { dir }
    }

    pub fn env_file(&self) -> PathBuf {
        self.dir.path().join(".env")
    }

    /// Write `bytes` to `name` inside the workspace and return its path.
    #[allow(dead_code)]
    pub fn file(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    /// A `scanidcard` command reading credentials from this workspace.
    pub fn cmd(&self) -> Command {
        scanidcard_cmd(&self.env_file())
    }
}

/// Returns a `scanidcard` command reading credentials from `env_file`.
pub fn scanidcard_cmd(env_file: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("scanidcard");
    cmd.arg("--env-file").arg(env_file);
    cmd.env_remove("RUST_LOG");
    cmd
}
