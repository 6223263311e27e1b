mod core;
mod export;
mod logging;

pub use crate::extract::ExtractionLimits;
pub use self::core::Config;
pub use export::ExportConfig;
pub use logging::LoggingConfig;
