use crate::book::Book;
use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

fn index_overflow(what: &str) -> SheetError {
    SheetError::Io(std::io::Error::new(
        std::io::ErrorKind::Other,
        format!("{what} index overflow"),
    ))
}

impl Sheet {
    /// Write sheet cells and column widths to a worksheet
    pub(crate) fn write_to_worksheet(&self, worksheet: &mut Worksheet) -> Result<()> {
        worksheet.set_name(self.name())?;

        for (row, col, text) in self.cells() {
            let row_num = u32::try_from(row).map_err(|_| index_overflow("Row"))?;
            let col_num = u16::try_from(col).map_err(|_| index_overflow("Column"))?;
            worksheet.write_string(row_num, col_num, text)?;
        }

        for (col, width) in self.column_widths() {
            let col_num = u16::try_from(col).map_err(|_| index_overflow("Column"))?;
            worksheet.set_column_width(col_num, width)?;
        }

        Ok(())
    }
}

impl Book {
    /// Save the book to an Excel file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created or written.
    pub fn save_as_xlsx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut workbook = self.to_workbook()?;
        workbook.save(path.as_ref())?;
        Ok(())
    }

    /// Serialize the book to an in-memory XLSX buffer
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_xlsx_buffer(&self) -> Result<Vec<u8>> {
        let mut workbook = self.to_workbook()?;
        Ok(workbook.save_to_buffer()?)
    }

    fn to_workbook(&self) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        for (_, sheet) in self.sheets() {
            let worksheet = workbook.add_worksheet();
            sheet.write_to_worksheet(worksheet)?;
        }
        Ok(workbook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use tempfile::tempdir;

    #[test]
    fn test_xlsx_write_and_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.xlsx");

        let mut sheet = Sheet::new();
        sheet.write(0, 0, "Name");
        sheet.write(0, 1, "Age");
        sheet.write(1, 0, "Alice");
        sheet.write(1, 1, "30");

        let mut book = Book::new();
        book.add_sheet("People", sheet).unwrap();
        book.save_as_xlsx(&path).unwrap();

        let mut loaded: Xlsx<_> = open_workbook(&path).unwrap();
        let range = loaded.worksheet_range("People").unwrap();

        assert_eq!(
            range.get_value((0, 0)),
            Some(&Data::String("Name".to_string()))
        );
        assert_eq!(
            range.get_value((1, 1)),
            Some(&Data::String("30".to_string()))
        );
    }

    #[test]
    fn test_xlsx_sparse_rows_keep_indices() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sparse.xlsx");

        // Row 0 intentionally absent, as a writer with leading trim produces
        let mut sheet = Sheet::new();
        sheet.write(1, 0, "a");
        sheet.write(1, 1, "b");

        let mut book = Book::new();
        book.add_sheet("1.", sheet).unwrap();
        book.save_as_xlsx(&path).unwrap();

        let mut loaded: Xlsx<_> = open_workbook(&path).unwrap();
        let range = loaded.worksheet_range("1.").unwrap();

        assert_eq!(range.get_value((0, 0)), None);
        assert_eq!(
            range.get_value((1, 0)),
            Some(&Data::String("a".to_string()))
        );
        assert_eq!(
            range.get_value((1, 1)),
            Some(&Data::String("b".to_string()))
        );
    }

    #[test]
    fn test_xlsx_multiple_sheets_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("multi.xlsx");

        let mut book = Book::new();
        for name in ["1.", "2.", "3."] {
            let mut sheet = Sheet::new();
            sheet.write(0, 0, name);
            book.add_sheet(name, sheet).unwrap();
        }
        book.save_as_xlsx(&path).unwrap();

        let loaded: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(loaded.sheet_names(), vec!["1.", "2.", "3."]);
    }

    #[test]
    fn test_xlsx_autosized_columns_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("widths.xlsx");

        let mut sheet = Sheet::new();
        sheet.write(0, 0, "a fairly long header cell");
        sheet.write(1, 0, "x");
        sheet.autosize_columns();

        let mut book = Book::new();
        book.add_sheet("Data", sheet).unwrap();
        book.save_as_xlsx(&path).unwrap();

        let mut loaded: Xlsx<_> = open_workbook(&path).unwrap();
        let range = loaded.worksheet_range("Data").unwrap();
        assert_eq!(
            range.get_value((1, 0)),
            Some(&Data::String("x".to_string()))
        );
    }
}
