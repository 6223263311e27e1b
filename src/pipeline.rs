//! Glue between extraction and export: one category of an
//! [`ExtractionResult`] becomes a batch of records, optionally passes through
//! an external enricher, and is rendered under its conventional file name.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::Result;
use crate::export::{ExportFormat, ExportMetadata, TableExporter, TabularRecord, export_filename};
use crate::extract::{ExtractionOptions, ExtractionResult};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Category {
    Text,
    Links,
    Images,
    Emails,
    #[strum(to_string = "phone_numbers", serialize = "phones")]
    PhoneNumbers,
}

impl Category {
    /// Column pinned first in CSV output for this category.
    pub fn priority_key(self) -> &'static str {
        match self {
            Category::Text => "text",
            Category::Links => "url",
            Category::Images => "src",
            Category::Emails => "email",
            Category::PhoneNumbers => "phone",
        }
    }

    /// Options that run this category alone.
    pub fn options(self) -> ExtractionOptions {
        let mut options = ExtractionOptions::none();
        match self {
            Category::Text => options.text = true,
            Category::Links => options.links = true,
            Category::Images => options.images = true,
            Category::Emails => options.emails = true,
            Category::PhoneNumbers => options.phones = true,
        }
        options
    }

    fn truncated(self, result: &ExtractionResult) -> bool {
        match self {
            Category::Text => result.truncated.text,
            Category::Links => result.truncated.links,
            Category::Images => result.truncated.images,
            Category::Emails | Category::PhoneNumbers => false,
        }
    }
}

fn record(value: Value) -> TabularRecord {
    match value {
        Value::Object(map) => map,
        _ => TabularRecord::new(),
    }
}

/// Rows for one category of `result`, in extraction order.
pub fn records_for(result: &ExtractionResult, category: Category) -> Vec<TabularRecord> {
    match category {
        Category::Text => result
            .text
            .iter()
            .map(|t| record(json!({ "text": t })))
            .collect(),
        Category::Links => result
            .links
            .iter()
            .map(|l| record(json!({ "url": l })))
            .collect(),
        Category::Images => result
            .images
            .iter()
            .map(|s| record(json!({ "src": s })))
            .collect(),
        Category::Emails => result
            .emails
            .iter()
            .map(|e| {
                let domain = e.split_once('@').map_or("", |(_, d)| d);
                record(json!({ "email": e, "domain": domain }))
            })
            .collect(),
        Category::PhoneNumbers => result
            .phones
            .iter()
            .map(|p| record(json!({ "phone": p.phone, "normalized": p.normalized })))
            .collect(),
    }
}

/// External post-processor (e.g. a semantic tagging service) that may add
/// fields such as `type` or `category` to each record. Those fields are
/// exported like any other column.
pub trait RecordEnricher {
    fn enrich(&self, records: Vec<TabularRecord>) -> anyhow::Result<Vec<TabularRecord>>;
}

/// A rendered export ready to be written or offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub format: ExportFormat,
    pub contents: String,
}

/// Turns extraction results into export artifacts.
#[derive(Debug, Clone)]
pub struct Pipeline {
    exporter: TableExporter,
    product: String,
}

impl Pipeline {
    pub fn new(exporter: TableExporter, product: impl Into<String>) -> Self {
        Self {
            exporter,
            product: product.into(),
        }
    }

    /// Exports one category. JSON output carries a metadata envelope; CSV
    /// output pins the category's primary column first.
    pub fn export(
        &self,
        result: &ExtractionResult,
        category: Category,
        format: ExportFormat,
        enricher: Option<&dyn RecordEnricher>,
    ) -> Result<ExportArtifact> {
        let mut records = records_for(result, category);
        if let Some(enricher) = enricher {
            records = enricher.enrich(records)?;
        }

        let mut metadata = ExportMetadata::new(&result.url, category.to_string(), records.len());
        metadata.truncated = category.truncated(result);
        if !result.title.is_empty() {
            metadata
                .extra
                .insert("title".into(), Value::String(result.title.clone()));
        }

        let contents = self.exporter.render(
            format,
            &records,
            Some(&metadata),
            Some(category.priority_key()),
        )?;
        let filename = export_filename(
            &self.product,
            &category.to_string(),
            format,
            Utc::now().date_naive(),
        );

        tracing::info!(
            url = %result.url,
            %category,
            %format,
            records = records.len(),
            %filename,
            "export ready"
        );

        Ok(ExportArtifact {
            filename,
            format,
            contents,
        })
    }
}
