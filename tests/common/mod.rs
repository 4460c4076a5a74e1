#![allow(dead_code)]

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::{Path, PathBuf};

/// Two-sheet workbook: "Teams" with a vertical merge in the first column and
/// a ragged last row, and "Offset" whose data starts at C3.
pub fn teams_workbook() -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let merge_format = Format::new();

    let teams = workbook.add_worksheet();
    teams.set_name("Teams")?;
    teams.write_string(0, 0, "team")?;
    teams.write_string(0, 1, "member")?;
    teams.write_string(0, 2, "score")?;
    teams.merge_range(1, 0, 2, 0, "Red", &merge_format)?;
    teams.write_string(1, 1, "Ann")?;
    teams.write_number(1, 2, 10)?;
    teams.write_string(2, 1, "Bob")?;
    teams.write_number(2, 2, 12.5)?;
    teams.write_string(3, 0, "Blue")?;
    teams.write_string(3, 1, "Cy")?;

    let offset = workbook.add_worksheet();
    offset.set_name("Offset")?;
    offset.write_string(2, 2, "key")?;
    offset.write_string(2, 3, "value")?;
    offset.merge_range(3, 2, 3, 3, "same", &merge_format)?;

    Ok(workbook)
}

/// Merges with blank cells past the last value: "Bottom" has a 2x2 block
/// under a one-row header and nothing below it, "Right" has a block in the
/// last columns whose lower row holds no value at all.
pub fn edge_merges_workbook() -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let merge_format = Format::new();

    let bottom = workbook.add_worksheet();
    bottom.set_name("Bottom")?;
    bottom.write_string(0, 0, "A")?;
    bottom.write_string(0, 1, "B")?;
    bottom.merge_range(1, 0, 2, 1, "X", &merge_format)?;

    let right = workbook.add_worksheet();
    right.set_name("Right")?;
    right.write_string(0, 0, "A")?;
    right.write_string(0, 1, "B")?;
    right.write_string(0, 2, "C")?;
    right.write_string(1, 0, "1")?;
    right.merge_range(1, 1, 2, 2, "X", &merge_format)?;

    Ok(workbook)
}

pub fn dates_workbook() -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    let sheet = workbook.add_worksheet();
    sheet.set_name("Dates")?;
    sheet.write_string(0, 0, "when")?;
    sheet.write_string(0, 1, "ok")?;
    sheet.write_number_with_format(1, 0, 44927, &date_format)?;
    sheet.write_boolean(1, 1, true)?;

    Ok(workbook)
}

pub fn save(mut workbook: Workbook, dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    workbook.save(&path).unwrap();
    path
}

pub fn to_bytes(mut workbook: Workbook) -> Vec<u8> {
    workbook.save_to_buffer().unwrap()
}
