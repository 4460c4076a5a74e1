mod exporters;
mod types;

pub use exporters::{
    export_all_sheets_json, export_json, generate_all_sheets_json, generate_all_sheets_tables,
    process_sheet_for_json, serialize_to_json,
};
pub use types::{AllSheetsRecords, AllSheetsTables, OrderedSheetData, OutputShape};
