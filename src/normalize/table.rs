use tracing::debug;

use crate::excel::Sheet;
use crate::normalize::merge::resolve_merges;
use crate::normalize::row::normalize_row;
use crate::normalize::types::{Record, Table};

/// Build a rectangular table from `sheet`, taking grid row `header_row` as
/// the header labels and every later row as data.
///
/// Rows above the header are ignored. A sheet with no row at `header_row`
/// gives the empty table.
#[must_use]
pub fn build_table(sheet: &Sheet, header_row: usize) -> Table {
    let Some(headers) = sheet.grid.get(header_row) else {
        debug!(sheet = %sheet.name, header_row, "sheet has no header row");
        return Table::default();
    };
    let headers = headers.clone();

    let mut rows: Vec<Vec<String>> = sheet.grid.iter().skip(header_row + 1).cloned().collect();
    resolve_merges(&sheet.grid, &sheet.merges, header_row, &mut rows);

    let width = headers.len();
    let rows = rows
        .into_iter()
        .map(|row| normalize_row(row, width))
        .collect();

    Table { headers, rows }
}

/// Key each row by its header labels.
///
/// With duplicate labels the later column's value replaces the earlier one,
/// keeping the position of the first occurrence.
#[must_use]
pub fn to_records(table: &Table) -> Vec<Record> {
    table
        .rows
        .iter()
        .map(|row| {
            let mut record = Record::with_capacity(table.headers.len());
            for (header, value) in table.headers.iter().zip(row) {
                record.insert(header.clone(), value.clone());
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excel::MergeRegion;
    use pretty_assertions::assert_eq;

    fn sheet(rows: &[&[&str]], merges: Vec<MergeRegion>) -> Sheet {
        let grid = rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        Sheet::new("Sheet1", grid, merges)
    }

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| cell.to_string()).collect()
    }

    #[test]
    fn empty_sheet_gives_empty_table() {
        let table = build_table(&sheet(&[], Vec::new()), 0);
        assert_eq!(table, Table::default());
        assert!(table.is_empty());
    }

    #[test]
    fn header_only_sheet() {
        let table = build_table(&sheet(&[&["A", "B"]], Vec::new()), 0);
        assert_eq!(table.headers, strings(&["A", "B"]));
        assert!(table.rows.is_empty());
    }

    #[test]
    fn pads_and_truncates_rows() {
        let table = build_table(
            &sheet(&[&["A", "B", "C"], &["1", "2"], &["1", "2", "3", "4"]], Vec::new()),
            0,
        );
        assert_eq!(
            table.rows,
            vec![strings(&["1", "2", ""]), strings(&["1", "2", "3"])]
        );
    }

    #[test]
    fn expands_merged_block() {
        let table = build_table(
            &sheet(
                &[&["A", "B"], &["X"], &[]],
                vec![MergeRegion::new(1, 0, 2, 1)],
            ),
            0,
        );
        assert_eq!(table.rows, vec![strings(&["X", "X"]), strings(&["X", "X"])]);
    }

    #[test]
    fn merge_wider_than_header_is_truncated() {
        let table = build_table(
            &sheet(
                &[&["A"], &["X", "", ""], &[]],
                vec![MergeRegion::new(1, 0, 1, 2)],
            ),
            0,
        );
        assert_eq!(table.rows, vec![strings(&["X"]), strings(&[""])]);
    }

    #[test]
    fn zero_width_header() {
        let table = build_table(&sheet(&[&[], &["1", "2"]], Vec::new()), 0);
        assert!(table.headers.is_empty());
        assert_eq!(table.rows, vec![Vec::<String>::new()]);
    }

    #[test]
    fn later_header_row_skips_title_rows() {
        let table = build_table(
            &sheet(&[&["Report"], &["name", "age"], &["Jane", "25"]], Vec::new()),
            1,
        );
        assert_eq!(table.headers, strings(&["name", "age"]));
        assert_eq!(table.rows, vec![strings(&["Jane", "25"])]);
    }

    #[test]
    fn header_row_past_end_gives_empty_table() {
        let table = build_table(&sheet(&[&["A"]], Vec::new()), 3);
        assert!(table.is_empty());
    }

    #[test]
    fn records_follow_header_order() {
        let table = Table {
            headers: strings(&["name", "age"]),
            rows: vec![strings(&["Jane", "25"])],
        };
        let records = to_records(&table);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["name"], "Jane");
        assert_eq!(records[0]["age"], "25");
        assert_eq!(
            records[0].keys().collect::<Vec<_>>(),
            vec!["name", "age"]
        );
    }

    #[test]
    fn duplicate_header_keeps_last_value() {
        let table = Table {
            headers: strings(&["X", "X"]),
            rows: vec![strings(&["a", "b"])],
        };
        let records = to_records(&table);

        assert_eq!(records[0].len(), 1);
        assert_eq!(records[0]["X"], "b");
    }
}
