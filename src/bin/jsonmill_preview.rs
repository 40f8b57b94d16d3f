//! jsonmill-preview: Render a flattened JSON array as a terminal table
//!
//! Usage:
//!   # Preview a file
//!   jsonmill-preview data.json
//!
//!   # Read from stdin
//!   echo '[{"id": 1, "user": {"name": "a"}}]' | jsonmill-preview
//!
//!   # List the derived field set
//!   jsonmill-preview data.json --list-fields
//!
//!   # Restrict the columns
//!   jsonmill-preview data.json --fields id,user.name
//!   jsonmill-preview data.json --exclude internalNotes

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use jsonmill::{render_table, Workspace};
use std::io::Read;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(name = "jsonmill-preview")]
#[command(about = "Preview a JSON array as a flattened table", long_about = None)]
struct Args {
    /// Input file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Comma-separated fields to keep; everything else is deselected
    #[arg(long)]
    fields: Option<String>,

    /// Comma-separated fields to deselect
    #[arg(long, conflicts_with = "fields")]
    exclude: Option<String>,

    /// Show at most N rows
    #[arg(long, short = 'n')]
    limit: Option<usize>,

    /// List the derived field set with selection markers instead of rows
    #[arg(long)]
    list_fields: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut workspace = Workspace::new();
    let count = if let Some(file_path) = &args.input {
        workspace.load_file(Path::new(file_path))?
    } else {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        workspace.load_str("stdin", &text)?
    };

    apply_selection(&mut workspace, args.fields, args.exclude)?;

    if args.list_fields {
        for field in workspace.selection().iter() {
            let marker = if field.selected { "x" } else { " " };
            println!("[{}] {}", marker, field.name);
        }
        return Ok(());
    }

    let (headers, mut rows) = workspace.preview();
    let total = rows.len();
    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }

    println!("{}", render_table(&headers, &rows));
    if rows.len() < total {
        println!("({} of {} rows, {} columns)", rows.len(), total, headers.len());
    } else {
        println!("({} rows, {} columns)", count, headers.len());
    }

    Ok(())
}

fn apply_selection(
    workspace: &mut Workspace,
    fields: Option<String>,
    exclude: Option<String>,
) -> Result<()> {
    if let Some(fields_str) = fields {
        let keep: Vec<String> = fields_str.split(',').map(|s| s.trim().to_string()).collect();
        workspace.selection_mut().select_only(&keep)?;
    }
    if let Some(exclude_str) = exclude {
        let drop: Vec<String> = exclude_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();
        workspace.selection_mut().deselect(&drop)?;
    }
    Ok(())
}
