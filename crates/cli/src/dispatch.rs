//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Resolve the credential context shared by all commands.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Ctrl+C handling (see `main()`).

use std::time::Duration;

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::config_context::CredentialContext;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Recognize {
            image,
            side,
            base64,
            raw,
            language,
            timeout,
            connect_timeout,
        } => {
            let context = CredentialContext::resolve(cli.env_file.as_deref(), cli.region.as_deref())?;
            let args = commands::recognize::RecognizeArgs {
                image,
                side,
                base64,
                raw,
                endpoint: cli.endpoint,
                language,
                timeout: Duration::from_secs(timeout),
                connect_timeout: Duration::from_secs(connect_timeout),
            };
            commands::recognize::run(context, args, cli.output).await?;
        }
        Commands::Config { command } => {
            commands::config::run(
                command,
                cli.env_file.as_deref(),
                cli.region.as_deref(),
                cli.output,
            )?;
        }
    }

    Ok(())
}
