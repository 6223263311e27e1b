use serde::{Deserialize, Serialize};

/// Which categories a single extraction runs.
///
/// `text`, `links`, `images` and `emails` are required when deserialized;
/// `phones` defaults to off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionOptions {
    pub text: bool,
    pub links: bool,
    pub images: bool,
    pub emails: bool,
    #[serde(default)]
    pub phones: bool,
}

impl ExtractionOptions {
    pub fn all() -> Self {
        Self {
            text: true,
            links: true,
            images: true,
            emails: true,
            phones: true,
        }
    }

    pub fn none() -> Self {
        Self {
            text: false,
            links: false,
            images: false,
            emails: false,
            phones: false,
        }
    }
}

/// Phone number as written on the page plus its digits-only form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub phone: String,
    pub normalized: String,
}

/// Per-category flag set when the cap dropped admissible entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Truncation {
    pub text: bool,
    pub links: bool,
    pub images: bool,
}

impl Truncation {
    pub fn any(&self) -> bool {
        self.text || self.links || self.images
    }
}

/// Everything extracted from one page. Every sequence is duplicate-free and
/// in first-seen order; categories that were not requested stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub url: String,
    pub title: String,
    pub text: Vec<String>,
    pub links: Vec<String>,
    pub images: Vec<String>,
    pub emails: Vec<String>,
    #[serde(default)]
    pub phones: Vec<PhoneNumber>,
    #[serde(default)]
    pub truncated: Truncation,
}
