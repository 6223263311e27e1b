use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid email pattern")
});

/// Tried in order; an earlier pattern wins for a given normalized number.
static PHONE: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        // North American with optional country code
        r"\+?1?\s*\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})",
        // E.164
        r"\+?[1-9][0-9]{1,14}",
        // North American without country code
        r"\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})",
    ]
    .map(|pattern| Regex::new(pattern).expect("valid phone pattern"))
});

const MIN_PHONE_DIGITS: usize = 10;

/// Email addresses in `text`, in order of appearance (duplicates included).
pub fn find_emails(text: &str) -> impl Iterator<Item = &str> {
    EMAIL.find_iter(text).map(|m| m.as_str())
}

/// A phone number as it appeared on the page plus its digits-only form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneMatch {
    pub raw: String,
    pub normalized: String,
}

/// Phone numbers in `text`, deduplicated by normalized form.
pub fn find_phones(text: &str) -> Vec<PhoneMatch> {
    let mut seen = std::collections::HashSet::new();
    let mut found = Vec::new();

    for pattern in PHONE.iter() {
        for m in pattern.find_iter(text) {
            let raw = m.as_str().trim();
            let normalized = normalize_phone(raw);
            if normalized.len() >= MIN_PHONE_DIGITS && seen.insert(normalized.clone()) {
                found.push(PhoneMatch {
                    raw: raw.to_string(),
                    normalized,
                });
            }
        }
    }

    found
}

fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}
