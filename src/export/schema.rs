use indexmap::IndexSet;
use serde_json::{Map, Value};

/// One exported row: insertion-ordered keys to arbitrary JSON values.
pub type TabularRecord = Map<String, Value>;

/// Ordered column list for a batch of records.
///
/// The union of every record's keys in first-seen order: a key introduced by
/// the last record still becomes a trailing column. The priority key, when
/// any record carries it, is moved to the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSchema {
    columns: Vec<String>,
}

impl ExportSchema {
    pub fn infer(records: &[TabularRecord], priority_key: Option<&str>) -> Self {
        let mut keys: IndexSet<&str> = IndexSet::new();
        for record in records {
            keys.extend(record.keys().map(String::as_str));
        }

        let mut columns: Vec<String> = keys.into_iter().map(str::to_string).collect();
        if let Some(priority) = priority_key
            && let Some(pos) = columns.iter().position(|c| c == priority)
        {
            let pinned = columns.remove(pos);
            columns.insert(0, pinned);
        }

        Self { columns }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
