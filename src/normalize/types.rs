use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A rectangular table: every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

/// One data row keyed by header label, in column order.
pub type Record = IndexMap<String, String>;
