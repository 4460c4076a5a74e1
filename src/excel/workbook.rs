use anyhow::{Context, Result};
use calamine::{Data, Dimensions, Range, Reader, Sheets, open_workbook_auto_from_rs};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::excel::cell::data_to_string;
use crate::excel::{MergeRegion, Sheet, SourceFormat};

/// Decoded workbook: sheets keyed by name, in workbook order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    sheets: IndexMap<String, Sheet>,
}

impl Workbook {
    pub fn from_sheets(sheets: impl IntoIterator<Item = Sheet>) -> Self {
        Self {
            sheets: sheets
                .into_iter()
                .map(|sheet| (sheet.name.clone(), sheet))
                .collect(),
        }
    }

    pub fn get_sheet_names(&self) -> Vec<String> {
        self.sheets.keys().cloned().collect()
    }

    pub fn get_sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.get(name)
    }

    pub fn get_sheet_by_index(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get_index(index).map(|(_, sheet)| sheet)
    }

    /// The sheet selected by default, i.e. the first one
    pub fn first_sheet(&self) -> Option<&Sheet> {
        self.get_sheet_by_index(0)
    }

    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.values()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

/// Open an Excel file after checking its extension.
pub fn open_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    let path = path.as_ref();

    let Some(format) = SourceFormat::from_path(path) else {
        anyhow::bail!(
            "Unknown file format. Only Excel files are supported: {}",
            path.display()
        );
    };
    debug!(path = %path.display(), ?format, "opening workbook");

    let bytes =
        fs::read(path).with_context(|| format!("Unable to read file: {}", path.display()))?;

    read_workbook(bytes).with_context(|| format!("Unable to parse Excel file: {}", path.display()))
}

/// Decode a workbook from an in-memory payload.
pub fn read_workbook(bytes: Vec<u8>) -> Result<Workbook> {
    let sheets = open_workbook_auto_from_rs(Cursor::new(bytes))
        .context("Unable to detect spreadsheet format")?;

    decode_sheets(sheets)
}

fn decode_sheets<RS: Read + Seek>(mut workbook: Sheets<RS>) -> Result<Workbook> {
    let sheet_names = workbook.sheet_names();

    if sheet_names.is_empty() {
        anyhow::bail!("No worksheets found in file");
    }

    if let Sheets::Xlsx(xlsx) = &mut workbook {
        xlsx.load_merged_regions()
            .context("Unable to read merged cells")?;
    }

    let mut sheets = Vec::with_capacity(sheet_names.len());

    for name in &sheet_names {
        let range = workbook
            .worksheet_range(name)
            .with_context(|| format!("Unable to read worksheet: {}", name))?;

        let merges = merged_cells(&workbook, name);
        sheets.push(create_sheet_from_range(name, &range, &merges));
    }

    let workbook = Workbook::from_sheets(sheets);
    info!(sheets = workbook.len(), "decoded workbook");
    Ok(workbook)
}

fn merged_cells<RS: Read + Seek>(workbook: &Sheets<RS>, name: &str) -> Vec<Dimensions> {
    match workbook {
        Sheets::Xlsx(xlsx) => xlsx
            .merged_regions_by_sheet(name)
            .into_iter()
            .map(|(_, _, dimensions)| dimensions.clone())
            .collect(),
        Sheets::Xls(xls) => xls.worksheet_merge_cells(name).unwrap_or_default(),
        _ => {
            debug!(sheet = name, "merged cells not available for this format");
            Vec::new()
        }
    }
}

// Last row index of an xlsx sheet
const MAX_SHEET_ROW: u32 = 1_048_575;

fn create_sheet_from_range(name: &str, range: &Range<Data>, merges: &[Dimensions]) -> Sheet {
    // calamine trims the range to the first used cell
    let Some((origin_row, origin_col)) = range.start() else {
        return Sheet::new(name, Vec::new(), Vec::new());
    };

    let mut grid: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(data_to_string).collect())
        .collect();

    let mut regions = Vec::with_capacity(merges.len());
    let mut dropped = 0;
    let mut merged_height = 0;

    for dimensions in merges {
        let (start_row, start_col) = dimensions.start;
        let (end_row, end_col) = dimensions.end;

        // An anchor outside the used range holds no value
        if start_row < origin_row || start_col < origin_col {
            dropped += 1;
            continue;
        }

        let region = MergeRegion::new(
            (start_row - origin_row) as usize,
            (start_col - origin_col) as usize,
            end_row.saturating_sub(origin_row) as usize,
            end_col.saturating_sub(origin_col) as usize,
        );
        if end_row < MAX_SHEET_ROW {
            merged_height = merged_height.max(region.end_row + 1);
        }
        regions.push(region);
    }

    if dropped > 0 {
        warn!(sheet = name, dropped, "ignored merged cells anchored outside the used range");
    }

    // Blank cells inside a merge are not part of the range, so a merge at the
    // bottom of the sheet would lose its last rows. Whole-column merges are
    // left to the normalizer's clamping.
    if grid.len() < merged_height {
        grid.resize(merged_height, Vec::new());
    }
    debug!(
        sheet = name,
        rows = grid.len(),
        merges = regions.len(),
        "loaded worksheet"
    );

    Sheet::new(name, grid, regions)
}
