use serde_json::{Number, Value};

use super::schema::{ExportSchema, TabularRecord};
use crate::error::ExportError;

/// Renders `records` as CSV: every field quoted, `"` doubled, `\n` between
/// rows and no trailing newline.
pub fn render_csv(
    records: &[TabularRecord],
    priority_key: Option<&str>,
) -> Result<String, ExportError> {
    if records.is_empty() {
        return Err(ExportError::EmptyInput);
    }

    let schema = ExportSchema::infer(records, priority_key);
    let mut lines = Vec::with_capacity(records.len() + 1);

    lines.push(
        schema
            .columns()
            .iter()
            .map(|column| quote(column))
            .collect::<Vec<_>>()
            .join(","),
    );

    for record in records {
        let row = schema
            .columns()
            .iter()
            .map(|column| quote(&cell_text(record.get(column))))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }

    Ok(lines.join("\n"))
}

/// Textual form of one cell. Missing and `null` are empty; nested values are
/// written as compact JSON.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => number_text(n),
        Some(nested @ (Value::Array(_) | Value::Object(_))) => nested.to_string(),
    }
}

/// Whole floats print without a fraction (`1.0` as `1`), as a browser would
/// stringify them.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract().abs() < f64::EPSILON && f.abs() < 1e15 => {
            #[allow(clippy::cast_possible_truncation)]
            let whole = f as i64;
            whole.to_string()
        }
        _ => n.to_string(),
    }
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
