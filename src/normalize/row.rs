/// Pad with empty cells or truncate so the row is exactly `width` long.
#[must_use]
pub fn normalize_row(mut row: Vec<String>, width: usize) -> Vec<String> {
    // Cells past the header are dropped silently
    row.resize(width, String::new());
    row
}
