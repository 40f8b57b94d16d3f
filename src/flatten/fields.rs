//! Field-set derivation, selection state, and row projection

use crate::error::{MillError, Result};
use crate::flatten::types::FlatRecord;
use std::collections::HashSet;

/// Compute the ordered set of unique keys across a record collection.
///
/// Order is first occurrence, scanning records in sequence and each
/// record in its own key order. An empty input yields an empty set.
pub fn derive_fields(records: &[FlatRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut fields = Vec::new();

    for record in records {
        for key in record.keys() {
            if seen.insert(key.clone()) {
                fields.push(key.clone());
            }
        }
    }

    fields
}

/// Restrict every record to the given fields, preserving record order.
///
/// A field absent from a record is omitted from that record's result, not
/// set to null; renderers treat a missing key as an empty value.
pub fn project(records: &[FlatRecord], fields: &[String]) -> Vec<FlatRecord> {
    records
        .iter()
        .map(|record| {
            let mut out = FlatRecord::new();
            for field in fields {
                if let Some(value) = record.get(field) {
                    out.insert(field.clone(), value.clone());
                }
            }
            out
        })
        .collect()
}

/// One selectable column
#[derive(Debug, Clone)]
pub struct SelectableField {
    pub name: String,
    pub selected: bool,
}

/// The user's column choice over a field set.
///
/// Field order is the field set's first-seen order; every field defaults
/// to selected whenever the set is (re)populated.
#[derive(Debug, Clone, Default)]
pub struct FieldSelection {
    fields: Vec<SelectableField>,
}

impl FieldSelection {
    pub fn new(names: Vec<String>) -> Self {
        FieldSelection {
            fields: names
                .into_iter()
                .map(|name| SelectableField {
                    name,
                    selected: true,
                })
                .collect(),
        }
    }

    /// Build a selection from a record collection, all fields selected
    pub fn from_records(records: &[FlatRecord]) -> Self {
        FieldSelection::new(derive_fields(records))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectableField> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The currently selected field names, in field-set order
    pub fn selected_fields(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| f.selected)
            .map(|f| f.name.clone())
            .collect()
    }

    pub fn none_selected(&self) -> bool {
        self.fields.iter().all(|f| !f.selected)
    }

    /// Flip one field's selected flag. Errors on an unknown name.
    pub fn toggle(&mut self, name: &str) -> Result<()> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| MillError::UnknownField(name.to_string()))?;
        field.selected = !field.selected;
        Ok(())
    }

    /// Keep only the named fields selected. Errors on an unknown name.
    pub fn select_only(&mut self, keep: &[String]) -> Result<()> {
        for name in keep {
            if !self.fields.iter().any(|f| &f.name == name) {
                return Err(MillError::UnknownField(name.clone()));
            }
        }
        for field in &mut self.fields {
            field.selected = keep.contains(&field.name);
        }
        Ok(())
    }

    /// Deselect the named fields. Errors on an unknown name, in which
    /// case the selection is left untouched.
    pub fn deselect(&mut self, names: &[String]) -> Result<()> {
        for name in names {
            if !self.fields.iter().any(|f| &f.name == name) {
                return Err(MillError::UnknownField(name.clone()));
            }
        }
        for field in &mut self.fields {
            if names.contains(&field.name) {
                field.selected = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> FlatRecord {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_derive_fields_empty() {
        assert!(derive_fields(&[]).is_empty());
    }

    #[test]
    fn test_derive_fields_first_seen_order() {
        let records = vec![record(json!({"a": 1})), record(json!({"b": 2}))];
        assert_eq!(derive_fields(&records), vec!["a", "b"]);
    }

    #[test]
    fn test_derive_fields_deduplicates_across_records() {
        let records = vec![
            record(json!({"id": 1, "name": "x"})),
            record(json!({"name": "y", "extra": true})),
        ];
        assert_eq!(derive_fields(&records), vec!["id", "name", "extra"]);
    }

    #[test]
    fn test_project_empty_fields_yields_empty_records() {
        let records = vec![record(json!({"a": 1})), record(json!({"b": 2}))];
        let projected = project(&records, &[]);

        assert_eq!(projected.len(), 2);
        assert!(projected.iter().all(FlatRecord::is_empty));
    }

    #[test]
    fn test_project_omits_missing_keys() {
        let records = vec![record(json!({"a": 1})), record(json!({"b": 2}))];
        let fields = vec![String::from("a"), String::from("b")];
        let projected = project(&records, &fields);

        assert_eq!(projected[0].len(), 1);
        assert_eq!(projected[0].get("a").unwrap(), 1);
        assert!(projected[0].get("b").is_none());
        assert_eq!(projected[1].get("b").unwrap(), 2);
    }

    #[test]
    fn test_project_is_idempotent() {
        let records = vec![record(json!({"a": 1, "b": 2, "c": 3}))];
        let fields = vec![String::from("a"), String::from("c")];

        let once = project(&records, &fields);
        let twice = project(&once, &fields);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_selection_defaults_to_all_selected() {
        let records = vec![record(json!({"a": 1, "b": 2}))];
        let selection = FieldSelection::from_records(&records);

        assert_eq!(selection.selected_fields(), vec!["a", "b"]);
        assert!(!selection.none_selected());
    }

    #[test]
    fn test_toggle_and_reselect() {
        let mut selection = FieldSelection::new(vec![String::from("a"), String::from("b")]);

        selection.toggle("a").unwrap();
        assert_eq!(selection.selected_fields(), vec!["b"]);

        selection.toggle("a").unwrap();
        assert_eq!(selection.selected_fields(), vec!["a", "b"]);
    }

    #[test]
    fn test_select_only_preserves_field_order() {
        let mut selection = FieldSelection::new(vec![
            String::from("a"),
            String::from("b"),
            String::from("c"),
        ]);

        selection
            .select_only(&[String::from("c"), String::from("a")])
            .unwrap();
        // Order follows the field set, not the argument
        assert_eq!(selection.selected_fields(), vec!["a", "c"]);
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let mut selection = FieldSelection::new(vec![String::from("a")]);

        assert!(selection.toggle("nope").is_err());
        assert!(selection.select_only(&[String::from("nope")]).is_err());
        assert!(selection.deselect(&[String::from("nope")]).is_err());
        // Failed calls leave the selection untouched
        assert_eq!(selection.selected_fields(), vec!["a"]);
    }

    #[test]
    fn test_deselect_all_flags_none_selected() {
        let mut selection = FieldSelection::new(vec![String::from("a"), String::from("b")]);
        selection
            .deselect(&[String::from("a"), String::from("b")])
            .unwrap();

        assert!(selection.none_selected());
        assert!(selection.selected_fields().is_empty());
    }
}
