use crate::flatten::FlatRecord;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use serde_json::Value;

/// Build a terminal table from headers and flattened rows.
///
/// A key missing from a row renders as an empty cell. Styling is cosmetic;
/// the data contract is (headers, rows) only.
pub fn render_table(headers: &[String], rows: &[FlatRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
    );

    for row in rows {
        table.add_row(headers.iter().map(|h| Cell::new(display_value(row.get(h)))));
    }

    table
}

/// Display form of one cell: bare strings, empty for null or missing
fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
