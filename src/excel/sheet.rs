use serde::{Deserialize, Serialize};

/// A rectangular block of merged cells, zero-based and inclusive on both
/// ends. The merged value lives only in the top-left (anchor) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRegion {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
}

impl MergeRegion {
    pub fn new(start_row: usize, start_col: usize, end_row: usize, end_col: usize) -> Self {
        Self {
            start_row,
            start_col,
            end_row,
            end_col,
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.start_row > self.end_row || self.start_col > self.end_col
    }

    /// Clip the region to a `height` x `width` sheet.
    ///
    /// Returns `None` for inverted regions and for regions whose anchor is
    /// outside the sheet.
    #[must_use]
    pub fn clamp_to(&self, height: usize, width: usize) -> Option<Self> {
        if self.is_inverted() || self.start_row >= height || self.start_col >= width {
            return None;
        }

        Some(Self {
            end_row: self.end_row.min(height - 1),
            end_col: self.end_col.min(width - 1),
            ..*self
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    /// Cell text by row, rows may differ in length.
    pub grid: Vec<Vec<String>>,
    pub merges: Vec<MergeRegion>,
}

impl Sheet {
    pub fn new(name: &str, grid: Vec<Vec<String>>, merges: Vec<MergeRegion>) -> Self {
        Self {
            name: name.to_string(),
            grid,
            merges,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }
}
