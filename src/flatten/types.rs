use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A flattened record: dotted-path keys mapped to scalar values only.
///
/// Key order is the depth-first visitation order of the source object
/// (serde_json is built with `preserve_order`).
pub type FlatRecord = Map<String, Value>;

/// Field names whose positive numeric values are rendered as local-time
/// date strings instead of raw epoch milliseconds.
pub const DEFAULT_TIMESTAMP_FIELDS: &[&str] = &[
    "createdOn",
    "modifiedOn",
    "dueDate",
    "reportedTime",
    "remainingTime",
];

/// Configuration for the flattening process
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlattenConfig {
    /// Separator joining nested path segments (default: ".")
    pub separator: String,

    /// Separator joining scalar array elements (default: ", ")
    pub array_join: String,

    /// Field names treated as epoch-millisecond timestamps
    pub timestamp_fields: Vec<String>,

    /// chrono format string for rendered timestamps
    pub timestamp_format: String,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        FlattenConfig {
            separator: String::from("."),
            array_join: String::from(", "),
            timestamp_fields: DEFAULT_TIMESTAMP_FIELDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            timestamp_format: String::from("%Y-%m-%d %H:%M:%S"),
        }
    }
}
