use std::path::Path;

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const XLS_MIME: &str = "application/vnd.ms-excel";

/// Spreadsheet formats accepted for import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Xlsx,
    Xls,
}

impl SourceFormat {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim() {
            XLSX_MIME => Some(SourceFormat::Xlsx),
            XLS_MIME => Some(SourceFormat::Xls),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match extension.as_deref() {
            Some("xlsx") | Some("xlsm") => Some(SourceFormat::Xlsx),
            Some("xls") => Some(SourceFormat::Xls),
            _ => None,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            SourceFormat::Xlsx => XLSX_MIME,
            SourceFormat::Xls => XLS_MIME,
        }
    }
}
