mod grid;
mod merge;
mod row;
mod table;
mod types;

pub use grid::{cell_at, grid_width};
pub use merge::resolve_merges;
pub use row::normalize_row;
pub use table::{build_table, to_records};
pub use types::{Record, Table};
