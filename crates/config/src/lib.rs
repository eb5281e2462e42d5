//! Configuration management for scanidcard.
//!
//! This crate reads the optional project `.env` file, resolves the Tencent
//! Cloud credentials it carries, and renders them as build-time constants.

pub mod build_constants;
pub mod constants;
mod loader;

pub use build_constants::BuildConstants;
pub use loader::{
    ConfigError, CredentialSources, Credentials, EnvMap, Setting, load, parse,
    resolve_credentials, try_load,
};
