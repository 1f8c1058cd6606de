//! Export and import of generated lines.

pub mod csv;
pub mod json;
pub mod text;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use primex_core::GeneratorKind;
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;
use crate::session::GenerationResult;

pub use self::csv::to_csv;
pub use self::json::{ExportDocument, parse_json, to_json};
pub use self::text::{parse_plain_text, to_plain_text};

/// File format offered for export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Text => "text",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = primex_core::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(primex_core::Error::InvalidValue {
                field: "format",
                value: value.to_string(),
            }),
        }
    }
}

/// Render `result` in `format`; `exported_at` stamps JSON documents.
pub fn export(
    result: &GenerationResult,
    format: ExportFormat,
    exported_at: DateTime<Utc>,
) -> Result<String, GenerationError> {
    match format {
        ExportFormat::Text => Ok(to_plain_text(&result.lines)),
        ExportFormat::Csv => to_csv(&result.lines),
        ExportFormat::Json => Ok(to_json(result, exported_at)?),
    }
}

/// `primex_generated_{kind}_{unix_millis}.{ext}`
pub fn export_file_name(
    kind: GeneratorKind,
    format: ExportFormat,
    exported_at: DateTime<Utc>,
) -> String {
    format!(
        "primex_generated_{}_{}.{}",
        kind.id(),
        exported_at.timestamp_millis(),
        format.extension()
    )
}
