mod cell;
mod format;
mod sheet;
mod workbook;

pub use cell::{data_to_string, excel_date_to_iso_string, serial_in_1900_system};
pub use format::{SourceFormat, XLS_MIME, XLSX_MIME};
pub use sheet::{MergeRegion, Sheet};
pub use workbook::{Workbook, open_workbook, read_workbook};
