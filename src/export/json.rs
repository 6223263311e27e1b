use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::schema::TabularRecord;
use crate::error::ExportError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonStyle {
    /// Two-space indentation.
    #[default]
    Pretty,
    Compact,
}

/// Header written ahead of the records in an enveloped JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub url: String,
    pub data_type: String,
    pub count: usize,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub truncated: bool,
    /// Producer-specific fields, written after the standard ones.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExportMetadata {
    pub fn new(url: impl Into<String>, data_type: impl Into<String>, count: usize) -> Self {
        Self {
            url: url.into(),
            data_type: data_type.into(),
            count,
            timestamp: Utc::now(),
            truncated: false,
            extra: Map::new(),
        }
    }
}

#[derive(Serialize)]
struct Envelope<'a> {
    metadata: &'a ExportMetadata,
    data: &'a [TabularRecord],
}

/// `{"metadata": ..., "data": [...]}` when metadata is given, otherwise the
/// bare record array. Key order inside every record is preserved.
pub fn render_json(
    records: &[TabularRecord],
    metadata: Option<&ExportMetadata>,
    style: JsonStyle,
) -> Result<String, ExportError> {
    let rendered = match (metadata, style) {
        (Some(metadata), JsonStyle::Pretty) => serde_json::to_string_pretty(&Envelope {
            metadata,
            data: records,
        })?,
        (Some(metadata), JsonStyle::Compact) => serde_json::to_string(&Envelope {
            metadata,
            data: records,
        })?,
        (None, JsonStyle::Pretty) => serde_json::to_string_pretty(records)?,
        (None, JsonStyle::Compact) => serde_json::to_string(records)?,
    };
    Ok(rendered)
}
