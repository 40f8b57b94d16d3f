//! # jsonmill - JSON-to-spreadsheet flattening toolkit
//!
//! A library for flattening arrays of nested JSON objects into tabular
//! rows, previewing them as a terminal table, and exporting them to an
//! xlsx workbook with a selectable column set.
//!
//! ## Modules
//!
//! - **flatten**: the pure transform - dotted-path flattening, field-set
//!   derivation, row projection
//! - **table**: the tabular surfaces - terminal preview and xlsx export
//! - **workspace**: the stateful session tying loads, selection and
//!   export together
//!
//! ## Quick Start
//!
//! ### Flattening one record
//!
//! ```rust
//! use jsonmill::flatten::{Flattener, FlattenConfig};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let flattener = Flattener::new(FlattenConfig::default());
//! let record = json!({
//!     "user": {"name": "Alice", "age": 30},
//!     "tags": ["admin", "ops"]
//! });
//!
//! let flat = flattener.flatten(record.as_object().unwrap())?;
//! assert_eq!(flat.get("user.name").unwrap(), "Alice");
//! assert_eq!(flat.get("tags").unwrap(), "admin, ops");
//! # Ok(())
//! # }
//! ```
//!
//! ### A full conversion session
//!
//! ```rust
//! use jsonmill::Workspace;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut workspace = Workspace::new();
//! workspace.load_str("items.json", r#"[{"id": 1, "name": "a"}]"#)?;
//!
//! let (headers, rows) = workspace.preview();
//! assert_eq!(headers, vec!["id", "name"]);
//! assert_eq!(rows.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod flatten;
pub mod table;
pub mod workspace;

// Re-export commonly used types for convenience
pub use error::{MillError, Result};
pub use flatten::{
    derive_fields, project, FieldSelection, FlatRecord, Flattener, FlattenConfig,
};
pub use table::{output_name, render_table, write_workbook, SHEET_NAME};
pub use workspace::Workspace;
