use crate::error::{MillError, Result};
use crate::flatten::FlatRecord;
use rust_xlsxwriter::{Format, Workbook};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Name of the single sheet in every exported workbook
pub const SHEET_NAME: &str = "Data";

/// Derive the export path from the loaded file: same base name, `xlsx`
/// extension.
pub fn output_name(input: &Path) -> PathBuf {
    input.with_extension("xlsx")
}

/// Write one workbook: a bold header row followed by the projected rows.
///
/// Column order follows `fields`; row order follows the source array.
/// Strings, numbers and booleans keep their type in the sheet; null or
/// missing values leave the cell blank.
pub fn write_workbook(path: &Path, fields: &[String], rows: &[FlatRecord]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col_idx, name) in fields.iter().enumerate() {
        worksheet.write_string_with_format(0, cast_col(col_idx)?, name, &header_format)?;
    }

    for (row_idx, row) in rows.iter().enumerate() {
        let row_num = cast_row(row_idx + 1)?;
        for (col_idx, name) in fields.iter().enumerate() {
            let col_num = cast_col(col_idx)?;
            match row.get(name) {
                None | Some(Value::Null) => {}
                Some(Value::String(s)) => {
                    worksheet.write_string(row_num, col_num, s)?;
                }
                Some(Value::Bool(b)) => {
                    worksheet.write_boolean(row_num, col_num, *b)?;
                }
                Some(Value::Number(n)) => match n.as_f64() {
                    Some(f) => {
                        worksheet.write_number(row_num, col_num, f)?;
                    }
                    None => {
                        worksheet.write_string(row_num, col_num, &n.to_string())?;
                    }
                },
                // Flattened rows hold scalars only; anything else is a bug
                // upstream, but render it as text rather than panic.
                Some(other) => {
                    worksheet.write_string(row_num, col_num, &other.to_string())?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn cast_row(value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| MillError::Export {
        message: format!("row index overflow: {}", value),
    })
}

fn cast_col(value: usize) -> Result<u16> {
    u16::try_from(value).map_err(|_| MillError::Export {
        message: format!("column index overflow: {}", value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> FlatRecord {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_output_name_replaces_extension() {
        assert_eq!(
            output_name(Path::new("data/export.json")),
            PathBuf::from("data/export.xlsx")
        );
        assert_eq!(
            output_name(Path::new("noext")),
            PathBuf::from("noext.xlsx")
        );
    }

    #[test]
    fn test_write_workbook_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");

        let fields = vec![String::from("id"), String::from("name")];
        let rows = vec![
            record(json!({"id": 1, "name": "Alice"})),
            record(json!({"id": 2})),
        ];

        write_workbook(&path, &fields, &rows).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_write_workbook_empty_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");

        write_workbook(&path, &[String::from("a")], &[]).unwrap();
        assert!(path.exists());
    }
}
