//! Record flattening

use super::types::Schema;
use serde_json::Value;

/// A flat output row, one value per schema column
pub type Row = Vec<String>;

/// Map one record to a row aligned with `schema`
///
/// Never fails: missing fields, missing parent objects and non-object
/// records all produce empty strings.
pub fn flatten(record: &Value, schema: &Schema) -> Row {
    schema
        .columns()
        .iter()
        .map(|column| stringify(column.source.resolve(record)))
        .collect()
}

/// Render a JSON value as a CSV cell
///
/// Strings are written verbatim, `null` and absent values as empty,
/// everything else as compact JSON text.
pub fn stringify(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
