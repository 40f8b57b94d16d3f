use crate::error::Result;
use crate::flatten::types::{FlatRecord, FlattenConfig};
use chrono::{Local, TimeZone};
use serde_json::{Map, Number, Value};

/// The core flattener that turns one nested JSON object into one flat record
pub struct Flattener {
    config: FlattenConfig,
}

impl Flattener {
    pub fn new(config: FlattenConfig) -> Self {
        Flattener { config }
    }

    /// Flatten a JSON object into dotted-path keys with scalar values.
    ///
    /// Depth-first over the input's own key order; only leaves and arrays
    /// produce entries. A literal separator character inside a key can alias
    /// a nested path to the same joined string; this is not guarded against.
    pub fn flatten(&self, record: &Map<String, Value>) -> Result<FlatRecord> {
        let mut out = FlatRecord::new();
        self.flatten_into(record, "", &mut out)?;
        Ok(out)
    }

    fn flatten_into(
        &self,
        obj: &Map<String, Value>,
        prefix: &str,
        out: &mut FlatRecord,
    ) -> Result<()> {
        for (key, value) in obj {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}{}{}", prefix, self.config.separator, key)
            };

            match value {
                Value::Object(nested) => {
                    // No entry for the intermediate path itself
                    self.flatten_into(nested, &path, out)?;
                }
                Value::Array(items) => {
                    let rendered = if items.iter().all(is_scalar) {
                        items
                            .iter()
                            .map(scalar_text)
                            .collect::<Vec<_>>()
                            .join(&self.config.array_join)
                    } else {
                        // Compact re-encoding for arrays holding structures
                        serde_json::to_string(value)?
                    };
                    out.insert(path, Value::String(rendered));
                }
                Value::Number(n) if self.is_timestamp_field(key) => {
                    match self.format_timestamp(n) {
                        Some(formatted) => out.insert(path, Value::String(formatted)),
                        None => out.insert(path, value.clone()),
                    };
                }
                other => {
                    // Scalar or null passthrough
                    out.insert(path, other.clone());
                }
            }
        }
        Ok(())
    }

    fn is_timestamp_field(&self, key: &str) -> bool {
        self.config.timestamp_fields.iter().any(|f| f == key)
    }

    /// Render positive epoch milliseconds as a local-time date string.
    /// Non-positive or unmappable values fall back to passthrough.
    fn format_timestamp(&self, n: &Number) -> Option<String> {
        let millis = n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .filter(|ms| *ms > 0)?;
        Local
            .timestamp_millis_opt(millis)
            .single()
            .map(|dt| dt.format(&self.config.timestamp_format).to_string())
    }
}

impl Default for Flattener {
    fn default() -> Self {
        Flattener::new(FlattenConfig::default())
    }
}

fn is_scalar(value: &Value) -> bool {
    !value.is_object() && !value.is_array()
}

/// Default string form of a scalar, matching loose display coercion:
/// strings stay bare, null renders as "null", numbers and booleans as-is.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::from("null"),
        other => other.to_string(),
    }
}
