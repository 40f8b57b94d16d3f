//! The current working record set and everything derived from it
//!
//! One `Workspace` holds the state a conversion session needs: the
//! flattened rows from the last successful load, the field selection, and
//! the source path used to derive the export file name. Each load replaces
//! all of it wholesale; a failed load leaves the previous state intact.

use crate::error::{MillError, Result};
use crate::flatten::{derive_fields, project, FieldSelection, FlatRecord, Flattener, FlattenConfig};
use crate::table::{output_name, write_workbook};
use serde_json::Value;
use std::path::{Path, PathBuf};

pub struct Workspace {
    flattener: Flattener,
    source: Option<PathBuf>,
    rows: Vec<FlatRecord>,
    selection: FieldSelection,
}

impl Workspace {
    pub fn new() -> Self {
        Workspace::with_config(FlattenConfig::default())
    }

    pub fn with_config(config: FlattenConfig) -> Self {
        Workspace {
            flattener: Flattener::new(config),
            source: None,
            rows: Vec::new(),
            selection: FieldSelection::default(),
        }
    }

    /// Load and flatten a JSON file, replacing all previous state.
    /// Returns the number of records loaded.
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let bytes = std::fs::read(path)?;
        self.load_bytes(path.to_path_buf(), &bytes)
    }

    /// Load from already-read JSON text (stdin, tests)
    pub fn load_str(&mut self, name: impl Into<PathBuf>, text: &str) -> Result<usize> {
        self.load_bytes(name.into(), text.as_bytes())
    }

    fn load_bytes(&mut self, name: PathBuf, bytes: &[u8]) -> Result<usize> {
        let value = parse_json(bytes)?;
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(MillError::Shape {
                    found: value_kind(&other),
                })
            }
        };

        let rows = items
            .iter()
            .map(|item| match item {
                Value::Object(obj) => self.flattener.flatten(obj),
                // A non-object row flattens to an empty record
                _ => Ok(FlatRecord::new()),
            })
            .collect::<Result<Vec<_>>>()?;

        // Only now replace the working set; a failed parse or flatten
        // above leaves the previous load untouched.
        self.selection = FieldSelection::from_records(&rows);
        self.rows = rows;
        self.source = Some(name);
        Ok(self.rows.len())
    }

    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[FlatRecord] {
        &self.rows
    }

    pub fn selection(&self) -> &FieldSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut FieldSelection {
        &mut self.selection
    }

    /// Headers and rows for the preview table.
    ///
    /// Rows are projected to the selected fields and headers re-derived
    /// from the projected rows, so a deselected field disappears and a
    /// field no remaining row carries is dropped too.
    pub fn preview(&self) -> (Vec<String>, Vec<FlatRecord>) {
        let selected = self.selection.selected_fields();
        let rows = project(&self.rows, &selected);
        let headers = derive_fields(&rows);
        (headers, rows)
    }

    /// Write the selected columns to an xlsx workbook.
    ///
    /// With no explicit destination the output path is the source path
    /// with its extension replaced by `xlsx`. Returns the path written.
    pub fn export(&self, dest: Option<&Path>) -> Result<PathBuf> {
        let source = self.source.as_ref().ok_or(MillError::NoData)?;

        let fields = self.selection.selected_fields();
        if fields.is_empty() {
            return Err(MillError::EmptySelection);
        }

        let rows = project(&self.rows, &fields);
        let path = match dest {
            Some(p) => p.to_path_buf(),
            None => output_name(source),
        };
        write_workbook(&path, &fields, &rows)?;
        Ok(path)
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Workspace::new()
    }
}

/// Parse JSON bytes, trying SIMD first and falling back to serde_json so
/// its error message reaches the user on malformed input.
fn parse_json(bytes: &[u8]) -> Result<Value> {
    let mut simd_buf = bytes.to_vec();
    if let Ok(value) = simd_json::serde::from_slice::<Value>(&mut simd_buf) {
        return Ok(value);
    }

    serde_json::from_slice(bytes).map_err(|err| MillError::Parse(err.to_string()))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
