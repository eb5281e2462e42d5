//! Output formatting for command results.
//!
//! Invariants:
//! - Secret keys are never printed; only their length.
//! - JSON output is pretty-printed and ends with a newline.

use anyhow::Result;
use clap::ValueEnum;
use scanidcard_client::IdentifyResult;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Serialize any value as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

/// Render a successful recognition as aligned `label: value` lines.
///
/// Empty fields are omitted, so a front-side result does not print back-side labels.
pub fn format_identify_result(result: &IdentifyResult) -> String {
    let fields = [
        ("Name", &result.name),
        ("Sex", &result.sex),
        ("Nation", &result.nation),
        ("Birth", &result.birth),
        ("Address", &result.address),
        ("ID number", &result.id_num),
        ("Authority", &result.authority),
        ("Valid date", &result.valid_date),
        ("Request ID", &result.request_id),
    ];
    format_fields(fields.iter().map(|(label, value)| (*label, value.as_str())))
}

/// Align `label: value` pairs, skipping empty values.
pub fn format_fields<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let fields: Vec<_> = fields.into_iter().filter(|(_, v)| !v.is_empty()).collect();
    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;

    let mut output = String::new();
    for (label, value) in fields {
        output.push_str(&format!("{:<width$} {}\n", format!("{}:", label), value, width = width));
    }
    output
}

/// Mask all but the first and last four characters of an identifier.
pub fn mask_secret_id(secret_id: &str) -> String {
    let chars: Vec<char> = secret_id.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}{}", head, "*".repeat(chars.len() - 8), tail)
}
