use serde::{Deserialize, Serialize};

use crate::export::JsonStyle;

fn default_product() -> String {
    "datazen".into()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Leading segment of export file names.
    #[serde(default = "default_product")]
    pub product: String,
    #[serde(default = "default_true")]
    pub pretty_json: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            product: default_product(),
            pretty_json: true,
        }
    }
}

impl ExportConfig {
    pub fn json_style(&self) -> JsonStyle {
        if self.pretty_json {
            JsonStyle::Pretty
        } else {
            JsonStyle::Compact
        }
    }
}
