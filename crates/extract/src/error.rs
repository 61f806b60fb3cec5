use pdftables_sheet::SheetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The external detector failed while producing tables for a page.
    #[error("Table detection failed: {0}")]
    Detection(String),

    /// A sheet-level failure, including the name collision produced by the
    /// positional naming strategy on multi-table pages.
    #[error(transparent)]
    Sheet(#[from] SheetError),

    #[error("Worker pool unavailable: {0}")]
    WorkerPool(String),
}

impl ExtractError {
    /// Check if this is the sheet-name collision failure mode
    #[must_use]
    pub fn is_name_collision(&self) -> bool {
        matches!(
            self,
            ExtractError::Sheet(SheetError::SheetAlreadyExists { .. })
        )
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
