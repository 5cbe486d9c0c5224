//! Header-keyed records and CSV to JSON.

use serde_json::{Map, Value};
use tracing::debug;

use super::{Delimiter, tokenize};
use crate::error::CsvError;

/// One data row keyed by header, in header order.
pub type Record = Map<String, Value>;

/// Turn tokenized rows into records, using the first row as the header.
///
/// Header names are trimmed; a blank header at position `i` becomes
/// `col_<i+1>`. Short rows are padded with empty strings and extra cells are
/// dropped. A repeated header keeps its first position and takes the value
/// of its last column.
pub fn to_records(rows: &[Vec<String>]) -> Vec<Record> {
    let Some((header, data)) = rows.split_first() else {
        return Vec::new();
    };

    let keys: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(idx, h)| {
            let key = h.trim();
            if key.is_empty() {
                format!("col_{}", idx + 1)
            } else {
                key.to_string()
            }
        })
        .collect();

    data.iter()
        .map(|row| {
            let mut record = Record::new();
            for (idx, key) in keys.iter().enumerate() {
                let value = row.get(idx).cloned().unwrap_or_default();
                record.insert(key.clone(), Value::String(value));
            }
            record
        })
        .collect()
}

/// Tokenize then convert to records.
pub fn parse_records(text: &str, delimiter: Delimiter) -> Vec<Record> {
    let rows = tokenize(text, delimiter);
    debug!(rows = rows.len(), %delimiter, "tokenized csv");
    to_records(&rows)
}

/// Serialize records as a JSON array, pretty-printed with two-space indent
/// or compact.
pub fn to_json(records: &[Record], pretty: bool) -> Result<String, CsvError> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}
