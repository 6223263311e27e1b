use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::csv::render_csv;
use super::json::{ExportMetadata, JsonStyle, render_json};
use super::schema::TabularRecord;
use crate::error::ExportError;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// `<product>-<category>-<YYYY-MM-DD>.<ext>`, the name offered for download.
pub fn export_filename(
    product: &str,
    category: &str,
    format: ExportFormat,
    date: NaiveDate,
) -> String {
    format!(
        "{product}-{category}-{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Serializes record batches from any producer (an extraction, an API
/// response) into JSON or CSV.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableExporter {
    json_style: JsonStyle,
}

impl TableExporter {
    pub fn new(json_style: JsonStyle) -> Self {
        Self { json_style }
    }

    pub fn to_json(
        &self,
        records: &[TabularRecord],
        metadata: Option<&ExportMetadata>,
    ) -> Result<String, ExportError> {
        render_json(records, metadata, self.json_style)
    }

    pub fn to_csv(
        &self,
        records: &[TabularRecord],
        priority_key: Option<&str>,
    ) -> Result<String, ExportError> {
        render_csv(records, priority_key)
    }

    /// Dispatches on `format`. Metadata only applies to JSON; the priority
    /// key only to CSV.
    pub fn render(
        &self,
        format: ExportFormat,
        records: &[TabularRecord],
        metadata: Option<&ExportMetadata>,
        priority_key: Option<&str>,
    ) -> Result<String, ExportError> {
        let out = match format {
            ExportFormat::Json => self.to_json(records, metadata)?,
            ExportFormat::Csv => self.to_csv(records, priority_key)?,
        };
        tracing::debug!(%format, records = records.len(), bytes = out.len(), "rendered export");
        Ok(out)
    }
}
