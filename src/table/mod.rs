//! Tabular surfaces - terminal preview and xlsx export
//!
//! Both consume the flatten module's output: an ordered header set and a
//! sequence of flat records.

pub mod export;
pub mod preview;

pub use export::{output_name, write_workbook, SHEET_NAME};
pub use preview::render_table;
