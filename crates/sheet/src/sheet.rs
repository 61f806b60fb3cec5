use std::collections::BTreeMap;

/// Default Excel column width in character units.
const DEFAULT_COLUMN_WIDTH: f64 = 8.43;

/// A sheet holding cell text at explicit row/column positions.
///
/// Rows are created on demand and kept in row-index order. A row that was
/// created but never written to stays empty; rows that were never created
/// do not exist at all. This mirrors how spreadsheet files represent gap
/// rows, and lets a writer place output rows at their original source
/// indices.
#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    rows: BTreeMap<usize, BTreeMap<usize, String>>,
    column_widths: BTreeMap<usize, f64>,
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Sheet {
    /// Create a new empty sheet
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Sheet1")
    }

    /// Create a new empty sheet with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Sheet {
            name: name.to_string(),
            rows: BTreeMap::new(),
            column_widths: BTreeMap::new(),
        }
    }

    /// Get the sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Number of created rows (not the highest row index)
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the sheet has no created rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Create a row at the given index if it does not exist yet
    pub fn create_row(&mut self, row: usize) {
        self.rows.entry(row).or_default();
    }

    /// Check if a row was created at the given index
    #[must_use]
    pub fn has_row(&self, row: usize) -> bool {
        self.rows.contains_key(&row)
    }

    /// Index of the first created row, if any
    #[must_use]
    pub fn first_row_index(&self) -> Option<usize> {
        self.rows.keys().next().copied()
    }

    /// Number of written cells in the first created row
    #[must_use]
    pub fn first_row_cell_count(&self) -> usize {
        self.rows.values().next().map_or(0, BTreeMap::len)
    }

    /// Write cell text at the given position, creating the row if needed
    pub fn write(&mut self, row: usize, col: usize, text: &str) {
        self.rows
            .entry(row)
            .or_default()
            .insert(col, text.to_string());
    }

    /// Get the cell text at the given position
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(&row)
            .and_then(|cells| cells.get(&col))
            .map(String::as_str)
    }

    /// Cell texts of a created row, in column order
    #[must_use]
    pub fn row_texts(&self, row: usize) -> Option<Vec<&str>> {
        self.rows
            .get(&row)
            .map(|cells| cells.values().map(String::as_str).collect())
    }

    /// Iterate over all written cells as `(row, col, text)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &str)> {
        self.rows.iter().flat_map(|(&row, cells)| {
            cells
                .iter()
                .map(move |(&col, text)| (row, col, text.as_str()))
        })
    }

    /// Number of written cells across all rows
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    /// Resize columns to fit their content.
    ///
    /// The iteration bound is the written cell count of the first created
    /// row, matching the writer contract: columns beyond the first row's
    /// width are left at their default size.
    pub fn autosize_columns(&mut self) {
        let bound = self.first_row_cell_count();
        for col in 0..bound {
            let chars = self
                .rows
                .values()
                .filter_map(|cells| cells.get(&col))
                .map(|text| text.chars().count())
                .max()
                .unwrap_or(0);
            let width = ((chars + 2) as f64).max(DEFAULT_COLUMN_WIDTH);
            self.column_widths.insert(col, width);
        }
    }

    /// Explicit width of a column, if one was set
    #[must_use]
    pub fn column_width(&self, col: usize) -> Option<f64> {
        self.column_widths.get(&col).copied()
    }

    /// Iterate over columns with an explicit width
    pub fn column_widths(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.column_widths.iter().map(|(&col, &width)| (col, width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sheet() {
        let sheet = Sheet::new();
        assert_eq!(sheet.name(), "Sheet1");
        assert!(sheet.is_empty());
        assert_eq!(sheet.row_count(), 0);
        assert_eq!(sheet.first_row_cell_count(), 0);
    }

    #[test]
    fn test_write_and_get() {
        let mut sheet = Sheet::with_name("Data");
        sheet.write(0, 0, "a");
        sheet.write(0, 1, "b");
        sheet.write(2, 0, "c");

        assert_eq!(sheet.get(0, 0), Some("a"));
        assert_eq!(sheet.get(0, 1), Some("b"));
        assert_eq!(sheet.get(2, 0), Some("c"));
        assert_eq!(sheet.get(1, 0), None);
        assert_eq!(sheet.row_count(), 2); // row 1 was never created
    }

    #[test]
    fn test_create_row_without_cells() {
        let mut sheet = Sheet::new();
        sheet.create_row(3);

        assert!(sheet.has_row(3));
        assert!(!sheet.has_row(0));
        assert_eq!(sheet.row_count(), 1);
        assert_eq!(sheet.row_texts(3), Some(vec![]));
    }

    #[test]
    fn test_first_row_is_lowest_created_index() {
        let mut sheet = Sheet::new();
        sheet.write(5, 0, "later");
        sheet.write(1, 0, "first");
        sheet.write(1, 3, "sparse");

        assert_eq!(sheet.first_row_index(), Some(1));
        assert_eq!(sheet.first_row_cell_count(), 2);
    }

    #[test]
    fn test_cells_iteration_order() {
        let mut sheet = Sheet::new();
        sheet.write(1, 1, "d");
        sheet.write(0, 1, "b");
        sheet.write(0, 0, "a");
        sheet.write(1, 0, "c");

        let cells: Vec<(usize, usize, &str)> = sheet.cells().collect();
        assert_eq!(
            cells,
            vec![(0, 0, "a"), (0, 1, "b"), (1, 0, "c"), (1, 1, "d")]
        );
        assert_eq!(sheet.cell_count(), 4);
    }

    #[test]
    fn test_autosize_bound_is_first_row_cell_count() {
        let mut sheet = Sheet::new();
        sheet.write(0, 0, "short");
        sheet.write(0, 1, "x");
        sheet.write(1, 0, "a much longer cell value");
        sheet.write(1, 2, "beyond first row width");

        sheet.autosize_columns();

        assert!(sheet.column_width(0).unwrap() >= 24.0);
        assert!(sheet.column_width(1).is_some());
        // Column 2 exists only in a later row and is outside the bound
        assert!(sheet.column_width(2).is_none());
    }

    #[test]
    fn test_autosize_floor_at_default_width() {
        let mut sheet = Sheet::new();
        sheet.write(0, 0, "ab");
        sheet.autosize_columns();

        assert_eq!(sheet.column_width(0), Some(8.43));
    }

    #[test]
    fn test_autosize_empty_sheet_is_noop() {
        let mut sheet = Sheet::new();
        sheet.autosize_columns();
        assert_eq!(sheet.column_widths().count(), 0);
    }
}
