//! Demo: run the extraction pipeline over pre-detected tables and save the
//! result as an XLSX file.
//!
//! Run with: cargo run --example extract_demo

use pdftables_extract::{
    extract, Comparison, ExtractOptions, NamingMethod, SkipBlanks, StaticSource, Table,
};

fn table(rows: &[&[&str]]) -> Table {
    Table::from_rows(
        rows.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect(),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Two pages as a detector would hand them over: the first table has a
    // blank padding row and column around the content
    let pages = vec![
        vec![table(&[
            &["", "", ""],
            &["Product", "Price", ""],
            &["Widget", "10", ""],
            &["Gadget", "20", ""],
        ])],
        vec![table(&[&["Region", "Total"], &["North", "42"]])],
    ];

    let options = ExtractOptions {
        autosize_columns: true,
        row_skip: SkipBlanks::Both,
        column_skip: SkipBlanks::Both,
        row_filter: Comparison::at_least(2),
        column_filter: Comparison::at_least(2),
        naming: NamingMethod::Sequential,
    };

    let mut source = StaticSource::new(pages);
    let book = extract(&mut source, &options)?;

    println!("Extracted {} sheet(s):", book.sheet_count());
    for (name, sheet) in book.sheets() {
        println!("  {name} ({} rows, {} cells)", sheet.row_count(), sheet.cell_count());
    }

    book.save_as_xlsx("extract_demo.xlsx")?;
    println!("Saved extract_demo.xlsx");

    Ok(())
}
