pub mod excel;
pub mod json_export;
pub mod normalize;
pub mod session;

pub use excel::{MergeRegion, Sheet, Workbook, open_workbook, read_workbook};
pub use normalize::{Record, Table, build_table, to_records};
pub use session::ImportSession;
