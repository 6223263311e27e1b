use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::Level;

fn default_level() -> String {
    "info".into()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// "trace" | "debug" | "info" | "warn" | "error"
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level, `None` when the configured name is unknown.
    pub fn max_level(&self) -> Option<Level> {
        Level::from_str(self.level.trim()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels_case_insensitively() {
        let cfg = LoggingConfig {
            level: "DEBUG".into(),
        };
        assert_eq!(cfg.max_level(), Some(Level::DEBUG));
        assert_eq!(LoggingConfig::default().max_level(), Some(Level::INFO));
    }

    #[test]
    fn unknown_level_is_none() {
        let cfg = LoggingConfig {
            level: "loud".into(),
        };
        assert_eq!(cfg.max_level(), None);
    }
}
