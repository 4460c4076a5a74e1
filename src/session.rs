use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

use crate::excel::{self, Workbook};
use crate::normalize::{Record, Table, build_table, to_records};

/// State of one imported file: the decoded workbook, the selected sheet and
/// the table built for it.
///
/// Switching sheets rebuilds the table from the decoded workbook; the file is
/// never decoded again.
#[derive(Debug, Clone, Serialize)]
pub struct ImportSession {
    #[serde(skip)]
    workbook: Workbook,
    sheet_names: Vec<String>,
    selected_sheet: String,
    header_row: usize,
    table: Table,
}

impl ImportSession {
    pub fn new(workbook: Workbook, header_row: usize) -> Result<Self> {
        let Some(first) = workbook.first_sheet() else {
            anyhow::bail!("No worksheets found in file");
        };

        let selected_sheet = first.name.clone();
        let table = build_table(first, header_row);
        let sheet_names = workbook.get_sheet_names();

        Ok(Self {
            workbook,
            sheet_names,
            selected_sheet,
            header_row,
            table,
        })
    }

    pub fn open<P: AsRef<Path>>(path: P, header_row: usize) -> Result<Self> {
        let workbook = excel::open_workbook(path)?;
        Self::new(workbook, header_row)
    }

    pub fn from_bytes(bytes: Vec<u8>, header_row: usize) -> Result<Self> {
        let workbook = excel::read_workbook(bytes).context("Unable to parse Excel data")?;
        Self::new(workbook, header_row)
    }

    /// Select a sheet by name and rebuild the table for it.
    ///
    /// An unknown name is an error and keeps the current selection.
    pub fn select_sheet(&mut self, name: &str) -> Result<&Table> {
        let Some(sheet) = self.workbook.get_sheet(name) else {
            anyhow::bail!("Sheet '{}' not found", name);
        };

        if self.selected_sheet != name {
            self.table = build_table(sheet, self.header_row);
            self.selected_sheet = name.to_string();
            info!(sheet = name, rows = self.table.rows.len(), "switched sheet");
        } else {
            debug!(sheet = name, "sheet already selected");
        }

        Ok(&self.table)
    }

    /// Select a sheet by 1-based position, falling back to a name match.
    pub fn select_sheet_by_name_or_index(&mut self, name_or_index: &str) -> Result<&Table> {
        // A sheet literally named "2" wins over the second sheet
        if self.workbook.get_sheet(name_or_index).is_none() {
            if let Ok(index) = name_or_index.parse::<usize>() {
                if let Some(name) = index
                    .checked_sub(1)
                    .and_then(|i| self.sheet_names.get(i))
                    .cloned()
                {
                    return self.select_sheet(&name);
                }
            }
        }

        self.select_sheet(name_or_index)
    }

    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    pub fn selected_sheet(&self) -> &str {
        &self.selected_sheet
    }

    pub fn header_row(&self) -> usize {
        self.header_row
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn records(&self) -> Vec<Record> {
        to_records(&self.table)
    }

    /// Whether the selected sheet produced any header or row
    pub fn has_data(&self) -> bool {
        !self.table.is_empty()
    }
}
