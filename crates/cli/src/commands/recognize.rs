//! ID card recognition command.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use scanidcard_client::image::{encode_image_file, read_base64_file};
use scanidcard_client::{CardSide, OcrClient};
use tracing::info;

use crate::config_context::CredentialContext;
use crate::formatters::{OutputFormat, format_identify_result, to_json};

pub struct RecognizeArgs {
    pub image: PathBuf,
    pub side: CardSide,
    pub base64: bool,
    pub raw: bool,
    pub endpoint: Option<String>,
    pub language: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

/// Recognize one image and print the result.
///
/// The result (or raw body) is printed before a service-side failure is
/// turned into an error, so the response stays visible on non-zero exits.
pub async fn run(context: CredentialContext, args: RecognizeArgs, output: OutputFormat) -> Result<()> {
    context
        .credentials
        .ensure_present()
        .with_context(|| format!("Credentials from {} are incomplete", context.source))?;

    let image_base64 = if args.base64 {
        read_base64_file(&args.image)?
    } else {
        encode_image_file(&args.image)?
    };

    let mut builder = OcrClient::builder()
        .credentials(context.credentials)
        .language(args.language)
        .timeout(args.timeout)
        .connect_timeout(args.connect_timeout);
    if let Some(endpoint) = args.endpoint {
        builder = builder.endpoint(endpoint);
    }
    let client = builder.build()?;

    info!(
        image = %args.image.display(),
        side = %args.side,
        region = %client.region(),
        "Recognizing ID card"
    );
    let result = client.id_card_ocr(&image_base64, args.side).await?;

    if args.raw {
        println!("{}", result.raw_json);
    } else {
        match output {
            OutputFormat::Json => print!("{}", to_json(&result)?),
            OutputFormat::Text if result.is_success() => {
                print!("{}", format_identify_result(&result))
            }
            OutputFormat::Text => {}
        }
    }

    result.into_result().context("Recognition failed")?;
    Ok(())
}
