//! JSON flattening - turn nested objects into flat dotted-path records
//!
//! This module holds the pure core of the crate: the recursive
//! flatten-and-clean transform, plus the field-set derivation and row
//! projection that drive table rendering and spreadsheet export.
//! Nothing here touches the filesystem or a rendering surface.

pub mod fields;
pub mod transform;
pub mod types;

pub use fields::{derive_fields, project, FieldSelection, SelectableField};
pub use transform::Flattener;
pub use types::{FlatRecord, FlattenConfig, DEFAULT_TIMESTAMP_FIELDS};
