//! CSV output and JSON to CSV.

use serde_json::Value;
use tracing::debug;

use super::Delimiter;
use crate::error::CsvError;

/// Quote a cell when it holds a quote, a line break, or the delimiter.
pub fn escape_cell(value: &str, delimiter: Delimiter) -> String {
    let needs_quotes = value
        .chars()
        .any(|c| c == '"' || c == '\n' || c == '\r' || c == delimiter.as_char());
    let escaped = value.replace('"', "\"\"");
    if needs_quotes {
        format!("\"{escaped}\"")
    } else {
        escaped
    }
}

/// Join escaped cells with the delimiter.
///
/// A row holding one empty cell is written as `""`, since a bare empty line
/// reads back as no row at all.
pub fn write_row<S: AsRef<str>>(cells: &[S], delimiter: Delimiter) -> String {
    if let [only] = cells
        && only.as_ref().is_empty()
    {
        return "\"\"".to_string();
    }
    let sep = delimiter.as_char().to_string();
    cells
        .iter()
        .map(|c| escape_cell(c.as_ref(), delimiter))
        .collect::<Vec<_>>()
        .join(&sep)
}

/// Convert a JSON array of objects to CSV text.
///
/// The header is every key seen across the objects, in first-seen order.
/// Lines are joined with `\n` and there is no trailing newline.
pub fn from_json(json: &str, delimiter: Delimiter) -> Result<String, CsvError> {
    let value: Value = serde_json::from_str(json)?;
    let items = match value {
        Value::Array(items) => items,
        other => return Err(CsvError::NotAnArray(kind(&other))),
    };

    let mut headers: Vec<&str> = Vec::new();
    for item in &items {
        if let Value::Object(map) = item {
            for key in map.keys() {
                if !headers.contains(&key.as_str()) {
                    headers.push(key);
                }
            }
        }
    }
    debug!(items = items.len(), columns = headers.len(), "converting json to csv");

    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(write_row(&headers, delimiter));
    for item in &items {
        let cells: Vec<String> = headers
            .iter()
            .map(|h| item.get(*h).map(cell_text).unwrap_or_default())
            .collect();
        lines.push(write_row(&cells, delimiter));
    }

    Ok(lines.join("\n"))
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        nested => nested.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
