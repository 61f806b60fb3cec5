use crate::config::NamingMethod;

/// Name for the next output sheet.
///
/// The sequential strategy depends only on `sheets_written`, the number of
/// sheets already in the output book, which the orchestrator passes in at
/// call time. The positional strategy uses the 0-based page index and a
/// fixed suffix; it carries no table-within-page ordinal, so two qualifying
/// tables on one page get the same name and the second write fails
/// downstream.
#[must_use]
pub fn sheet_name(method: NamingMethod, sheets_written: usize, page_index: usize) -> String {
    match method {
        NamingMethod::Sequential => format!("{}.", sheets_written + 1),
        NamingMethod::Positional => format!("{}. Table", page_index + 1),
    }
}
