use crate::config::ExtractOptions;
use crate::error::Result;
use crate::filter::should_include;
use crate::name::sheet_name;
use crate::source::{PageSource, Table};
use crate::trim::TrimCounts;
use crate::writer::write_sheet;
use pdftables_sheet::Book;

/// Run the extraction pipeline over one document.
///
/// Pages are consumed in document order, tables in detector order, and each
/// table runs trim, filter, name, write in sequence. The ordering is
/// load-bearing: sequential naming reads the book's running sheet count,
/// and positional naming captures the page index during traversal.
///
/// Returns the accumulated book, which has zero sheets when nothing
/// qualified. Any detection or write failure aborts the document.
pub fn extract<S: PageSource>(source: &mut S, options: &ExtractOptions) -> Result<Book> {
    let mut book = Book::new();
    let mut page_index = 0;

    while let Some(tables) = source.next_tables()? {
        tracing::debug!("Page {}: {} table(s) detected", page_index + 1, tables.len());
        for table in &tables {
            process_table(&mut book, table, page_index, options)?;
        }
        page_index += 1;
    }

    Ok(book)
}

fn process_table(
    book: &mut Book,
    table: &Table,
    page_index: usize,
    options: &ExtractOptions,
) -> Result<()> {
    let trim = TrimCounts::compute(table, options.row_skip, options.column_skip);
    let effective_rows = trim.effective_rows(table);
    let effective_columns = trim.effective_columns(table);

    if !should_include(
        effective_rows,
        effective_columns,
        &options.row_filter,
        &options.column_filter,
    ) {
        tracing::debug!(
            "Skipping table on page {}: {}x{} after trim",
            page_index + 1,
            effective_rows,
            effective_columns
        );
        return Ok(());
    }

    let name = sheet_name(options.naming, book.sheet_count(), page_index);
    write_sheet(book, &name, table, &trim, options.autosize_columns)
}
