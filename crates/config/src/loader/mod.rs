//! Loader for the project `.env` file and the credentials it carries.
//!
//! Responsibilities:
//! - Parse `KEY=VALUE` lines from an optional `.env` file into an [`EnvMap`].
//! - Resolve the secret identifier, secret key and region through their
//!   primary key, alias key and default.
//!
//! Does NOT handle:
//! - Reading process environment variables. Only the file is consulted.
//! - Emitting build-time constants (see `build_constants.rs`).
//!
//! Invariants / Assumptions:
//! - A missing `.env` file is never an error; it yields an empty mapping.
//! - Resolution never fails; absent settings fall back to their defaults.
//! - Errors and log events never include raw `.env` line contents.

mod credentials;
mod dotenv;
mod error;

pub use credentials::{CredentialSources, Credentials, Setting, resolve_credentials};
pub use dotenv::{EnvMap, load, parse, try_load};
pub use error::ConfigError;

#[cfg(test)]
mod tests;
