use indexmap::IndexMap;
use std::str::FromStr;

use crate::normalize::{Record, Table};

/// Shape of the JSON written for a sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputShape {
    /// One object per row, keyed by header label
    Records,
    /// `{ "headers": [...], "rows": [[...], ...] }`
    Table,
}

impl FromStr for OutputShape {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "r" | "records" => Ok(OutputShape::Records),
            "t" | "table" => Ok(OutputShape::Table),
            _ => Err(()),
        }
    }
}

pub type OrderedSheetData = Vec<Record>;

pub type AllSheetsRecords = IndexMap<String, OrderedSheetData>;

pub type AllSheetsTables = IndexMap<String, Table>;
