use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

fn default_text_min_chars() -> usize {
    10
}

fn default_text_max_chars() -> usize {
    500
}

fn default_max_text() -> usize {
    100
}

fn default_max_links() -> usize {
    100
}

fn default_max_images() -> usize {
    50
}

/// Admission bounds for the capped categories.
///
/// Both text bounds are exclusive and measured in characters. Emails and
/// phone numbers are never capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionLimits {
    #[serde(default = "default_text_min_chars")]
    pub text_min_chars: usize,
    #[serde(default = "default_text_max_chars")]
    pub text_max_chars: usize,
    #[serde(default = "default_max_text")]
    pub max_text: usize,
    #[serde(default = "default_max_links")]
    pub max_links: usize,
    #[serde(default = "default_max_images")]
    pub max_images: usize,
}

impl Default for ExtractionLimits {
    fn default() -> Self {
        Self {
            text_min_chars: default_text_min_chars(),
            text_max_chars: default_text_max_chars(),
            max_text: default_max_text(),
            max_links: default_max_links(),
            max_images: default_max_images(),
        }
    }
}

impl ExtractionLimits {
    /// Text snippet admission: strictly inside the length window. The upper
    /// bound keeps ancestor containers from swallowing their descendants.
    pub fn admits_text(&self, text: &str) -> bool {
        let len = text.chars().count();
        len > self.text_min_chars && len < self.text_max_chars
    }
}

/// Link / image source admission: absolute `http(s)` or root-relative.
/// Rejects `javascript:`, `mailto:`, `data:`, fragments and empty values.
pub fn admits_source(value: &str) -> bool {
    value.starts_with("http") || value.starts_with('/')
}

/// Insertion-ordered, deduplicating collector with an optional cap.
///
/// Admission continues one entry past the cap so callers learn whether the
/// cap actually cut anything off.
#[derive(Debug)]
pub(crate) struct Collector {
    seen: IndexSet<String>,
    cap: Option<usize>,
}

impl Collector {
    pub(crate) fn capped(cap: usize) -> Self {
        Self {
            seen: IndexSet::new(),
            cap: Some(cap),
        }
    }

    pub(crate) fn uncapped() -> Self {
        Self {
            seen: IndexSet::new(),
            cap: None,
        }
    }

    pub(crate) fn insert(&mut self, value: &str) {
        if self.is_full() || self.seen.contains(value) {
            return;
        }
        self.seen.insert(value.to_string());
    }

    /// True once more distinct values than the cap have been seen.
    pub(crate) fn is_full(&self) -> bool {
        self.cap.is_some_and(|cap| self.seen.len() > cap)
    }

    /// Entries within the cap, plus whether anything was dropped.
    pub(crate) fn finish(self) -> (Vec<String>, bool) {
        let truncated = self.is_full();
        let mut values: Vec<String> = self.seen.into_iter().collect();
        if let Some(cap) = self.cap {
            values.truncate(cap);
        }
        (values, truncated)
    }
}
