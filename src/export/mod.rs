//! Tabular export of heterogeneous record batches to JSON and CSV.

pub mod csv;
pub mod exporter;
pub mod json;
pub mod schema;

pub use exporter::{ExportFormat, TableExporter, export_filename};
pub use json::{ExportMetadata, JsonStyle};
pub use schema::{ExportSchema, TabularRecord};
