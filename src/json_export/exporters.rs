use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::excel::{Sheet, Workbook};
use crate::json_export::types::{AllSheetsRecords, AllSheetsTables, OrderedSheetData};
use crate::normalize::{build_table, to_records};

pub fn serialize_to_json<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data).context("Failed to serialize data to JSON")
}

fn write_json_to_file<T: Serialize>(data: &T, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;

    let json_string = serialize_to_json(data)?;

    file.write_all(json_string.as_bytes())
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!(path = %path.display(), bytes = json_string.len(), "wrote JSON");
    Ok(())
}

pub fn process_sheet_for_json(sheet: &Sheet, header_row: usize) -> OrderedSheetData {
    to_records(&build_table(sheet, header_row))
}

// Export any serializable value (records, a table, all sheets) to a JSON file
pub fn export_json<T: Serialize>(data: &T, path: &Path) -> Result<()> {
    write_json_to_file(data, path)
}

pub fn generate_all_sheets_json(workbook: &Workbook, header_row: usize) -> AllSheetsRecords {
    workbook
        .sheets()
        .map(|sheet| (sheet.name.clone(), process_sheet_for_json(sheet, header_row)))
        .collect()
}

pub fn generate_all_sheets_tables(workbook: &Workbook, header_row: usize) -> AllSheetsTables {
    workbook
        .sheets()
        .map(|sheet| (sheet.name.clone(), build_table(sheet, header_row)))
        .collect()
}

// Export all sheets to a single JSON file
pub fn export_all_sheets_json(workbook: &Workbook, header_row: usize, path: &Path) -> Result<()> {
    let all_sheets = generate_all_sheets_json(workbook, header_row);

    write_json_to_file(&all_sheets, path)
}
