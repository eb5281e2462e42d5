//! Credential configuration commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use scanidcard_config::constants::DOTENV_FILE_NAME;
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::config_context::CredentialContext;
use crate::formatters::{OutputFormat, format_fields, mask_secret_id, to_json};

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the credentials the recognize command would use (secrets masked)
    Show,

    /// Check that a .env file provides a complete set of credentials
    Check {
        /// Path to the .env file (defaults to --env-file, then ./.env)
        path: Option<PathBuf>,
    },
}

/// Masked view of a credential context.
#[derive(Debug, Serialize)]
struct CredentialReport {
    source: String,
    secret_id: String,
    secret_id_key: Option<&'static str>,
    secret_key_length: usize,
    secret_key_key: Option<&'static str>,
    region: String,
    region_key: Option<&'static str>,
    complete: bool,
}

impl CredentialReport {
    fn new(context: &CredentialContext) -> Self {
        let sources = context.sources.unwrap_or_default();
        let credentials = &context.credentials;
        Self {
            source: context.source.to_string(),
            secret_id: mask_secret_id(&credentials.secret_id),
            secret_id_key: sources.secret_id,
            secret_key_length: credentials.secret_key.expose_secret().chars().count(),
            secret_key_key: sources.secret_key,
            region: credentials.region.clone(),
            region_key: sources.region,
            complete: credentials.ensure_present().is_ok(),
        }
    }

    fn to_text(&self, show_keys: bool) -> String {
        let from = |key: Option<&'static str>| match (show_keys, key) {
            (false, _) => String::new(),
            (true, Some(key)) => format!(" (from {})", key),
            (true, None) => " (default)".to_string(),
        };
        let or_unset = |value: &str| {
            if value.is_empty() {
                "<not set>".to_string()
            } else {
                value.to_string()
            }
        };

        let secret_id = format!("{}{}", or_unset(&self.secret_id), from(self.secret_id_key));
        let secret_key = if self.secret_key_length == 0 {
            format!("<not set>{}", from(self.secret_key_key))
        } else {
            format!("<{} chars>{}", self.secret_key_length, from(self.secret_key_key))
        };
        let region = format!("{}{}", self.region, from(self.region_key));
        let complete = if self.complete { "yes" } else { "no" };

        format_fields([
            ("Source", self.source.as_str()),
            ("Secret ID", secret_id.as_str()),
            ("Secret key", secret_key.as_str()),
            ("Region", region.as_str()),
            ("Complete", complete),
        ])
    }
}

pub fn run(
    command: ConfigCommand,
    env_file: Option<&Path>,
    region: Option<&str>,
    output: OutputFormat,
) -> Result<()> {
    match command {
        ConfigCommand::Show => run_show(env_file, region, output),
        ConfigCommand::Check { path } => {
            let path = path
                .or_else(|| env_file.map(Path::to_path_buf))
                .unwrap_or_else(|| PathBuf::from(DOTENV_FILE_NAME));
            run_check(&path, region, output)
        }
    }
}

fn run_show(env_file: Option<&Path>, region: Option<&str>, output: OutputFormat) -> Result<()> {
    let context = CredentialContext::resolve(env_file, region)?;
    let report = CredentialReport::new(&context);
    print_report(&report, context.sources.is_some(), output)
}

fn run_check(path: &Path, region: Option<&str>, output: OutputFormat) -> Result<()> {
    let context = CredentialContext::resolve(Some(path), region)?;
    let report = CredentialReport::new(&context);
    print_report(&report, true, output)?;

    context
        .credentials
        .ensure_present()
        .with_context(|| format!("{} does not provide complete credentials", path.display()))?;
    Ok(())
}

fn print_report(report: &CredentialReport, show_keys: bool, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => print!("{}", to_json(report)?),
        OutputFormat::Text => print!("{}", report.to_text(show_keys)),
    }
    Ok(())
}
