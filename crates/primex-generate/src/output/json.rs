use chrono::{DateTime, SecondsFormat, Utc};
use primex_core::GeneratorKind;
use serde::{Deserialize, Serialize};

use crate::session::GenerationResult;

/// JSON export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub generator: GeneratorKind,
    /// ISO-8601 UTC timestamp with millisecond precision.
    pub timestamp: String,
    pub count: usize,
    pub data: Vec<String>,
}

impl ExportDocument {
    pub fn new(result: &GenerationResult, exported_at: DateTime<Utc>) -> Self {
        Self {
            generator: result.kind,
            timestamp: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            count: result.lines.len(),
            data: result.lines.clone(),
        }
    }
}

/// Pretty-printed export document.
pub fn to_json(
    result: &GenerationResult,
    exported_at: DateTime<Utc>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ExportDocument::new(result, exported_at))
}

pub fn parse_json(content: &str) -> Result<ExportDocument, serde_json::Error> {
    serde_json::from_str(content)
}
