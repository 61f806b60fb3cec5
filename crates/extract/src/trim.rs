use crate::config::SkipBlanks;
use crate::source::Table;

/// Check if a cell is empty or whitespace-only
#[must_use]
pub fn is_blank(cell: &str) -> bool {
    cell.trim().is_empty()
}

fn all_blank(row: &[String]) -> bool {
    row.iter().all(|cell| is_blank(cell))
}

/// Consecutive blank cells of one row, counted from the given edge
fn blank_run(row: &[String], from_start: bool) -> usize {
    if from_start {
        row.iter().take_while(|cell| is_blank(cell)).count()
    } else {
        row.iter().rev().take_while(|cell| is_blank(cell)).count()
    }
}

/// Number of removable columns at one edge of the table.
///
/// A column is removable only when it is blank in every row, so the result
/// is the minimum blank run across all rows. A table with no rows yields 0.
#[must_use]
pub fn removable_columns(table: &Table, from_start: bool) -> usize {
    table
        .rows
        .iter()
        .map(|row| blank_run(row, from_start))
        .min()
        .unwrap_or(0)
}

/// Number of removable rows at one edge of the table: consecutive rows
/// whose every cell is blank, counted from the given edge.
#[must_use]
pub fn removable_rows(table: &Table, from_start: bool) -> usize {
    if from_start {
        table.rows.iter().take_while(|row| all_blank(row)).count()
    } else {
        table
            .rows
            .iter()
            .rev()
            .take_while(|row| all_blank(row))
            .count()
    }
}

/// Per-table removable edge counts, gated by the skip policy and clamped so
/// effective sizes never go negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrimCounts {
    pub leading_rows: usize,
    pub trailing_rows: usize,
    pub leading_columns: usize,
    pub trailing_columns: usize,
}

impl TrimCounts {
    /// Compute the four edge counts for a table.
    ///
    /// Leading and trailing amounts are computed independently per the
    /// policy bits. When both edges of an axis cover the same blank content
    /// (an all-blank table), leading wins and trailing is capped at
    /// whatever remains. The column cap is against the first row's length,
    /// the pipeline's authoritative column count.
    #[must_use]
    pub fn compute(table: &Table, row_skip: SkipBlanks, column_skip: SkipBlanks) -> Self {
        let leading_rows = if row_skip.leading() {
            removable_rows(table, true)
        } else {
            0
        };
        let trailing_rows = if row_skip.trailing() {
            removable_rows(table, false).min(table.row_count() - leading_rows)
        } else {
            0
        };

        let leading_columns = if column_skip.leading() {
            removable_columns(table, true)
        } else {
            0
        };
        let trailing_columns = if column_skip.trailing() {
            removable_columns(table, false).min(table.first_row_len() - leading_columns)
        } else {
            0
        };

        TrimCounts {
            leading_rows,
            trailing_rows,
            leading_columns,
            trailing_columns,
        }
    }

    /// Row count remaining after trimming
    #[must_use]
    pub fn effective_rows(&self, table: &Table) -> usize {
        table.row_count() - self.leading_rows - self.trailing_rows
    }

    /// Column count remaining after trimming, measured against the first
    /// row's length
    #[must_use]
    pub fn effective_columns(&self, table: &Table) -> usize {
        table.first_row_len() - self.leading_columns - self.trailing_columns
    }
}
