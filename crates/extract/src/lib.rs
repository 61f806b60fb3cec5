//! Table extraction pipeline for pdftables
//!
//! Turns tables already detected on PDF pages into spreadsheet workbooks.
//! Detection itself is a boundary: callers supply a [`PageSource`] that
//! yields, per page, the tables an external layout library found. For every
//! table the pipeline then
//!
//! 1. trims blank leading/trailing rows and columns per the configured
//!    [`SkipBlanks`] policies,
//! 2. gates inclusion on the post-trim size with two [`Comparison`]
//!    predicates,
//! 3. names the output sheet per the [`NamingMethod`], and
//! 4. writes the surviving cells verbatim into a [`Book`] sheet.
//!
//! # Examples
//!
//! ```
//! use pdftables_extract::{
//!     extract, Comparison, ExtractOptions, SkipBlanks, StaticSource, Table,
//! };
//!
//! let table = Table::from_rows(vec![
//!     vec!["Name".to_string(), "Age".to_string(), String::new()],
//!     vec!["Alice".to_string(), "30".to_string(), String::new()],
//! ]);
//! let mut source = StaticSource::new(vec![vec![table]]);
//!
//! let options = ExtractOptions {
//!     column_skip: SkipBlanks::Trailing,
//!     row_filter: Comparison::at_least(2),
//!     column_filter: Comparison::at_least(2),
//!     ..ExtractOptions::default()
//! };
//!
//! let book = extract(&mut source, &options).unwrap();
//! assert_eq!(book.sheet_names(), vec!["1."]);
//! assert_eq!(book.get_sheet("1.").unwrap().get(1, 1), Some("30"));
//! ```
//!
//! Processing within one document is strictly sequential; independent
//! documents can run in parallel via [`extract_batch`].

mod batch;
mod config;
mod error;
mod extract;
mod filter;
mod name;
mod source;
mod trim;
mod writer;

/// Re-export batch extraction.
pub use batch::{extract_batch, DEFAULT_WORKERS};
/// Re-export configuration types.
pub use config::{CompareOp, Comparison, ExtractOptions, NamingMethod, SkipBlanks};
/// Re-export extraction error types.
pub use error::{ExtractError, Result};
/// Re-export the orchestrator entry point.
pub use extract::extract;
/// Re-export naming.
pub use name::sheet_name;
/// Re-export the detection boundary and table types.
pub use source::{PageSource, StaticSource, Table};
/// Re-export trim calculation.
pub use trim::{is_blank, removable_columns, removable_rows, TrimCounts};
/// Re-export the sheet writer.
pub use writer::write_sheet;

/// Re-export the output model for convenience.
pub use pdftables_sheet::{Book, Sheet, SheetError};
