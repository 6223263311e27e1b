use anyhow::{Context, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::{ExportConfig, ExtractionLimits, LoggingConfig};
use crate::error::ConfigError;

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path the config was read from - not serialized
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    #[serde(default)]
    pub extraction: ExtractionLimits,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// `~/.datazen/config.toml`, when a home directory exists.
    pub fn default_path() -> Option<PathBuf> {
        UserDirs::new().map(|u| u.home_dir().join(".datazen").join("config.toml"))
    }

    /// Reads `path`, or the default location when `None`. A missing file
    /// yields the defaults; nothing is written to disk.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_path(),
        };

        let mut config = match path {
            Some(ref p) if p.exists() => Self::load_from(p)?,
            _ => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(ConfigError::Io)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::Load(e.to_string()))
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup("DATAZEN_LOG_LEVEL")
            && !level.is_empty()
        {
            self.logging.level = level;
        }

        if let Some(product) = lookup("DATAZEN_PRODUCT")
            && !product.is_empty()
        {
            self.export.product = product;
        }
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let limits = &self.extraction;
        if limits.text_min_chars >= limits.text_max_chars {
            return Err(ConfigError::Validation(format!(
                "extraction.text_min_chars ({}) must be below extraction.text_max_chars ({})",
                limits.text_min_chars, limits.text_max_chars
            )));
        }
        if self.export.product.trim().is_empty() {
            return Err(ConfigError::Validation(
                "export.product must not be empty".into(),
            ));
        }
        if self.logging.max_level().is_none() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of trace, debug, info, warn, error",
                self.logging.level
            )));
        }
        Ok(())
    }
}
