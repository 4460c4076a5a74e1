use tracing::trace;

use crate::excel::MergeRegion;
use crate::normalize::grid::{cell_at, grid_width};

/// Copy each merge region's anchor value into the rest of its rectangle.
///
/// `rows` holds the data rows, i.e. the grid rows after `header_row`, and
/// region coordinates are grid coordinates. Only cells below the header row
/// are written. Regions are clamped to the grid bounds; inverted regions and
/// regions starting outside the grid are skipped. Overlapping regions are
/// applied in order, so the later one wins.
pub fn resolve_merges(
    grid: &[Vec<String>],
    merges: &[MergeRegion],
    header_row: usize,
    rows: &mut [Vec<String>],
) {
    let height = grid.len();
    let width = grid_width(grid);

    for region in merges {
        let Some(region) = region.clamp_to(height, width) else {
            trace!(?region, height, width, "skipping merge region outside sheet");
            continue;
        };

        let value = cell_at(grid, region.start_row, region.start_col);
        let first_row = region.start_row.max(header_row + 1);

        for row_idx in first_row..=region.end_row {
            let Some(row) = rows.get_mut(row_idx - header_row - 1) else {
                continue;
            };

            for col_idx in region.start_col..=region.end_col {
                if row_idx == region.start_row && col_idx == region.start_col {
                    continue;
                }

                if row.len() <= col_idx {
                    row.resize(col_idx + 1, String::new());
                }
                row[col_idx] = value.to_string();
            }
        }
    }
}
