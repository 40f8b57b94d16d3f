//! jsonmill-export: Convert a JSON array to an xlsx workbook
//!
//! Usage:
//!   # Convert, writing next to the input with an .xlsx extension
//!   jsonmill-export data.json
//!
//!   # Explicit output path
//!   jsonmill-export data.json -o report.xlsx
//!
//!   # Export a subset of columns
//!   jsonmill-export data.json --fields id,user.name
//!   jsonmill-export data.json --exclude internalNotes

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use jsonmill::Workspace;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "jsonmill-export")]
#[command(about = "Convert a JSON array to an xlsx workbook", long_about = None)]
struct Args {
    /// Input file containing a JSON array of objects
    #[arg(value_name = "FILE")]
    input: String,

    /// Output path (default: input with .xlsx extension)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Comma-separated fields to keep; everything else is deselected
    #[arg(long)]
    fields: Option<String>,

    /// Comma-separated fields to deselect
    #[arg(long, conflicts_with = "fields")]
    exclude: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut workspace = Workspace::new();
    let count = workspace.load_file(Path::new(&args.input))?;

    if let Some(fields_str) = &args.fields {
        let keep: Vec<String> = fields_str.split(',').map(|s| s.trim().to_string()).collect();
        workspace.selection_mut().select_only(&keep)?;
    }
    if let Some(exclude_str) = &args.exclude {
        let drop: Vec<String> = exclude_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();
        workspace.selection_mut().deselect(&drop)?;
    }

    let columns = workspace.selection().selected_fields().len();
    let written = workspace.export(args.output.as_deref())?;

    println!(
        "Wrote {} ({} rows, {} columns)",
        written.display(),
        count,
        columns
    );
    Ok(())
}
