//! scanidcard - recognize Chinese ID cards with Tencent Cloud OCR.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Initialize logging.
//! - Run the selected command and translate failures into exit codes.
//!
//! Does NOT handle:
//! - Request signing or HTTP (see `crates/client`).
//! - `.env` parsing (see `crates/config`).
//!
//! Invariants:
//! - Logs go to stderr; stdout carries only command output.
//! - Ctrl+C exits with code 130.

mod args;
mod baked;
mod commands;
mod config_context;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let exit_code = tokio::select! {
        result = run_command(cli) => match result {
            Ok(()) => ExitCode::Success,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                if e.is_retryable() {
                    eprintln!("Hint: this failure is transient; retrying later may succeed.");
                }
                e.exit_code()
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Interrupted.");
            ExitCode::Interrupted
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Install the stderr subscriber. `-v` flags override `RUST_LOG`.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
