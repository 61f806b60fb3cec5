use crate::error::Result;
use crate::source::Table;
use crate::trim::TrimCounts;
use pdftables_sheet::{Book, Sheet};

/// Materialize the surviving sub-grid of a table as a new sheet of the book.
///
/// Output rows keep their original table indices, so leading row trim
/// leaves a gap before the first created row, and retained rows that are
/// entirely blank inside the kept range still become (empty) created rows.
/// Column trim is applied uniformly: cells are written at their original
/// column indices from `leading_columns` up to each row's own length minus
/// `trailing_columns`, saturating for jagged short rows.
///
/// Fails with the sheet-name collision error when `name` is already taken.
pub fn write_sheet(
    book: &mut Book,
    name: &str,
    table: &Table,
    trim: &TrimCounts,
    autosize_columns: bool,
) -> Result<()> {
    let mut sheet = Sheet::with_name(name);

    let row_end = table.row_count() - trim.trailing_rows;
    for row_index in trim.leading_rows..row_end {
        let row = &table.rows[row_index];
        sheet.create_row(row_index);

        let col_end = row.len().saturating_sub(trim.trailing_columns);
        for column_index in trim.leading_columns..col_end {
            sheet.write(row_index, column_index, &row[column_index]);
        }
    }

    if autosize_columns {
        sheet.autosize_columns();
    }

    book.add_sheet(name, sheet)?;
    Ok(())
}
