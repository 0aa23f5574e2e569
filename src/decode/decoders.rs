//! JSON record decoder

use crate::error::{Error, Result};
use serde_json::Value;

/// Default path of the record collection in list responses
pub const DEFAULT_RECORD_PATH: &str = "data";

/// JSON decoder with record path extraction
#[derive(Debug, Clone)]
pub struct JsonDecoder {
    /// Dot-separated path to the record array
    record_path: String,
}

impl Default for JsonDecoder {
    fn default() -> Self {
        Self::with_path(DEFAULT_RECORD_PATH)
    }
}

impl JsonDecoder {
    /// Create a decoder reading records from `data`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a JSON decoder with a record path
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            record_path: path.into(),
        }
    }

    /// The configured record path
    pub fn record_path(&self) -> &str {
        &self.record_path
    }

    /// Decode a response body into its records
    ///
    /// A missing or `null` collection, a non-array collection, or a body
    /// that is not JSON at all yields `Error::MalformedResponse`.
    pub fn decode(&self, body: &str) -> Result<Vec<Value>> {
        let mut value: Value = serde_json::from_str(body)
            .map_err(|e| Error::malformed(format!("response is not valid JSON: {e}")))?;

        match take_path(&mut value, &self.record_path) {
            Some(Value::Array(records)) => Ok(records),
            Some(Value::Null) | None => Err(Error::malformed(format!(
                "response has no '{}' collection",
                self.record_path
            ))),
            Some(other) => Err(Error::malformed(format!(
                "'{}' must be an array, found {}",
                self.record_path,
                json_type_name(&other)
            ))),
        }
    }
}

/// Move the value at a dot-separated path out of `value`
fn take_path(value: &mut Value, path: &str) -> Option<Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    let mut current = value;
    for part in path.split('.').filter(|p| !p.is_empty()) {
        current = current.as_object_mut()?.get_mut(part)?;
    }

    Some(current.take())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
