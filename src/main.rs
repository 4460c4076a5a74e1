use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use sheet_import::ImportSession;
use sheet_import::json_export::{self, OutputShape};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Excel file path (.xlsx, .xlsm or .xls)
    #[arg(required = true)]
    file_path: PathBuf,

    /// Sheet to import, by name or 1-based position (default: first sheet)
    #[arg(long, short = 's')]
    sheet: Option<String>,

    /// Zero-based row holding the column headers
    #[arg(long, short = 'r', default_value = "0")]
    header_row: usize,

    /// Export every sheet, keyed by sheet name
    #[arg(long, short = 'a')]
    all_sheets: bool,

    /// Output shape: 'records' (objects keyed by header) or 'table' (headers + rows)
    #[arg(long, short = 'f', default_value = "records")]
    format: String,

    /// Print the sheet names, one per line, and exit
    #[arg(long, short = 'l')]
    list_sheets: bool,

    /// Write JSON to this file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

fn init_logging() {
    // Logs go to stderr so stdout stays pipeable JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let shape = match OutputShape::from_str(&cli.format) {
        Ok(shape) => shape,
        Err(_) => anyhow::bail!("Invalid output format: {}", cli.format),
    };

    let mut session = ImportSession::open(&cli.file_path, cli.header_row)?;

    if cli.list_sheets {
        for name in session.sheet_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let output = cli.output.as_deref();

    if cli.all_sheets {
        let workbook = session.workbook();
        return match shape {
            OutputShape::Records => emit(
                &json_export::generate_all_sheets_json(workbook, cli.header_row),
                output,
            ),
            OutputShape::Table => emit(
                &json_export::generate_all_sheets_tables(workbook, cli.header_row),
                output,
            ),
        };
    }

    if let Some(sheet) = &cli.sheet {
        session.select_sheet_by_name_or_index(sheet)?;
    }

    if !session.has_data() {
        warn!(sheet = session.selected_sheet(), "file has no data");
    }

    match shape {
        OutputShape::Records => emit(&session.records(), output),
        OutputShape::Table => emit(session.table(), output),
    }
}

// Write JSON to a file, or to stdout for piping
fn emit<T: Serialize>(data: &T, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => json_export::export_json(data, path),
        None => {
            println!("{}", json_export::serialize_to_json(data)?);
            Ok(())
        }
    }
}
