//! Export CLI command
//!
//! Writes the full or filtered ledger to CSV or JSON, to a file or stdout.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::FinSmartResult;
use crate::export::{write_expenses_csv, write_expenses_json};
use crate::models::ExpenseRecord;
use crate::query::{filter_expenses, ExpenseFilter};

use super::{category_filter, load_session, parse_date};

/// Output format for ledger export
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Export the ledger
#[derive(Args)]
pub struct ExportArgs {
    /// Ledger CSV file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Output path; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Earliest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Restrict to these categories (repeatable)
    #[arg(short, long)]
    pub category: Vec<String>,
}

/// Handle the export command
pub fn handle_export_command(args: ExportArgs) -> FinSmartResult<()> {
    let session = load_session(&args.file, false)?;

    let mut filter = ExpenseFilter::all().with_categories(category_filter(&args.category));
    if let Some(text) = &args.from {
        filter = filter.with_from(parse_date(text)?);
    }
    if let Some(text) = &args.to {
        filter = filter.with_to(parse_date(text)?);
    }

    let matched: Vec<ExpenseRecord> = filter_expenses(session.records(), &filter)
        .into_iter()
        .cloned()
        .collect();

    match &args.output {
        Some(path) => {
            let mut file = File::create(path)?;
            write_records(&matched, &mut file, args.format)?;
            eprintln!("Exported {} expenses to {}", matched.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_records(&matched, &mut handle, args.format)?;
        }
    }

    Ok(())
}

fn write_records<W: Write>(
    records: &[ExpenseRecord],
    writer: &mut W,
    format: ExportFormat,
) -> FinSmartResult<()> {
    match format {
        ExportFormat::Csv => write_expenses_csv(records, writer),
        ExportFormat::Json => write_expenses_json(records, writer),
    }
}
