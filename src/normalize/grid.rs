/// Read a cell from a possibly ragged grid.
///
/// Missing rows and cells past the end of a short row read as `""`.
#[must_use]
pub fn cell_at(grid: &[Vec<String>], row: usize, col: usize) -> &str {
    grid.get(row)
        .and_then(|cells| cells.get(col))
        .map_or("", String::as_str)
}

// Width of the widest row
#[must_use]
pub fn grid_width(grid: &[Vec<String>]) -> usize {
    grid.iter().map(Vec::len).max().unwrap_or(0)
}
