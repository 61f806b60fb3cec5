//! Workbook/sheet model for pdftables
//!
//! Provides the output-side data model for table extraction: a [`Book`] of
//! named, insertion-ordered [`Sheet`]s, where each sheet holds cell text at
//! explicit row/column positions, plus XLSX serialization.
//!
//! # Examples
//!
//! ```
//! use pdftables_sheet::{Book, Sheet};
//!
//! let mut sheet = Sheet::new();
//! sheet.write(0, 0, "Name");
//! sheet.write(0, 1, "Age");
//!
//! let mut book = Book::new();
//! book.add_sheet("1.", sheet).unwrap();
//!
//! assert_eq!(book.sheet_count(), 1);
//! assert_eq!(book.get_sheet("1.").unwrap().get(0, 1), Some("Age"));
//! ```
//!
//! Sheet names are unique within a book; adding a sheet under an existing
//! name fails rather than renaming. Saving is a separate step:
//!
//! ```no_run
//! use pdftables_sheet::Book;
//!
//! let book = Book::new();
//! book.save_as_xlsx("out.xlsx").unwrap();
//! ```

mod book;
mod error;
mod sheet;
mod xlsx;

/// Re-export book type.
pub use book::Book;
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export sheet type.
pub use sheet::Sheet;
