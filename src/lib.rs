#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod pipeline;

pub use config::Config;
pub use error::{DatazenError, Result};
pub use export::{ExportFormat, TableExporter, TabularRecord};
pub use extract::{ExtractionOptions, ExtractionResult, Extractor, extract};
pub use pipeline::{Category, Pipeline};
