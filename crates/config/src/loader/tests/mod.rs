//! Tests for loading `.env` files from disk.
//!
//! Invariants / Assumptions:
//! - Each test writes into its own `tempfile::TempDir`; no cwd or process env mutation.
//! - Error messages must never contain secret values from `.env` files.
