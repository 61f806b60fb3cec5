use crate::error::Result;

/// One detected grid of cell text on a page, prior to trimming.
///
/// Rows may have differing lengths; nothing here enforces rectangularity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from detected rows
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Table { rows }
    }

    /// Number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the first row.
    ///
    /// This is the authoritative column count throughout the pipeline, even
    /// for jagged tables where later rows are wider or narrower.
    #[must_use]
    pub fn first_row_len(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Check if the table has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Boundary to the page iteration / table detection layer.
///
/// A source is forward-only and exhausts exactly once: each call advances
/// to the next page in document order and returns the tables detected on
/// it (possibly none), or `Ok(None)` once the document has no more pages.
pub trait PageSource {
    /// Tables detected on the next page, in detector-provided order
    fn next_tables(&mut self) -> Result<Option<Vec<Table>>>;
}

/// In-memory [`PageSource`] over pre-detected pages.
///
/// Useful for tests, demos, and callers that run detection elsewhere.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pages: Vec<Vec<Table>>,
    cursor: usize,
}

impl StaticSource {
    /// Create a source over the given pages
    #[must_use]
    pub fn new(pages: Vec<Vec<Table>>) -> Self {
        StaticSource { pages, cursor: 0 }
    }
}

impl PageSource for StaticSource {
    fn next_tables(&mut self) -> Result<Option<Vec<Table>>> {
        if self.cursor >= self.pages.len() {
            return Ok(None);
        }
        let tables = std::mem::take(&mut self.pages[self.cursor]);
        self.cursor += 1;
        Ok(Some(tables))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> Table {
        Table::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_first_row_len_on_jagged_table() {
        let jagged = table(&[&["a"], &["b", "c", "d"]]);
        assert_eq!(jagged.first_row_len(), 1);
        assert_eq!(jagged.row_count(), 2);
    }

    #[test]
    fn test_empty_table() {
        let empty = Table::default();
        assert!(empty.is_empty());
        assert_eq!(empty.first_row_len(), 0);
    }

    #[test]
    fn test_static_source_exhausts_once() {
        let mut source = StaticSource::new(vec![
            vec![table(&[&["a"]])],
            vec![],
            vec![table(&[&["b"]]), table(&[&["c"]])],
        ]);

        assert_eq!(source.next_tables().unwrap().unwrap().len(), 1);
        assert_eq!(source.next_tables().unwrap().unwrap().len(), 0);
        assert_eq!(source.next_tables().unwrap().unwrap().len(), 2);
        assert!(source.next_tables().unwrap().is_none());
        assert!(source.next_tables().unwrap().is_none());
    }
}
