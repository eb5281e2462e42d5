//! CLI argument definitions and parsing.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not resolve credentials (see `config_context` module).

use clap::{ArgAction, Parser, Subcommand};
use scanidcard_client::CardSide;
use scanidcard_config::constants::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_LANGUAGE, DEFAULT_TIMEOUT_SECS,
};
use std::path::PathBuf;

use crate::commands;
use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "scanidcard")]
#[command(about = "Recognize Chinese ID cards with Tencent Cloud OCR", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  scanidcard recognize card-front.jpg --side front\n  scanidcard --env-file .env recognize card-back.jpg --side back -o json\n  scanidcard config show\n  scanidcard config check .env\n"
)]
pub struct Cli {
    /// Resolve credentials from this .env file instead of the values baked in at build time
    #[arg(long, global = true, value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Region override (e.g., ap-beijing); blank values are ignored
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// OCR endpoint base URL
    #[arg(long, global = true, hide = true)]
    pub endpoint: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recognize an ID card image
    Recognize {
        /// Path to the image (JPEG/PNG), or to Base64 text with --base64
        image: PathBuf,

        /// Card side: auto, front (portrait) or back (emblem)
        #[arg(short, long, default_value = "auto")]
        side: CardSide,

        /// Treat IMAGE as a file of Base64 text (a data: URL prefix is allowed)
        #[arg(long)]
        base64: bool,

        /// Print the raw response JSON instead of the parsed result
        #[arg(long)]
        raw: bool,

        /// Response language sent as X-TC-Language (zh-CN or en-US)
        #[arg(long, default_value = DEFAULT_LANGUAGE)]
        language: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: u64,

        /// Connect timeout in seconds
        #[arg(long, default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
        connect_timeout: u64,
    },

    /// Inspect credential configuration
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommand,
    },
}
