use crate::config::ExtractOptions;
use crate::error::{ExtractError, Result};
use crate::extract::extract;
use crate::source::PageSource;
use pdftables_sheet::Book;
use rayon::prelude::*;

/// Worker count used when the caller passes 0
pub const DEFAULT_WORKERS: usize = 4;

/// Extract several independent documents on a bounded worker pool.
///
/// Each document runs the full sequential pipeline in isolation and yields
/// its own book; a failing document is captured in its slot of the returned
/// vector and does not abort the batch. Result order matches input order.
///
/// # Errors
///
/// Returns an error only when the worker pool itself cannot be built;
/// per-document failures live in the inner results.
pub fn extract_batch<S>(
    documents: Vec<S>,
    options: &ExtractOptions,
    workers: usize,
) -> Result<Vec<Result<Book>>>
where
    S: PageSource + Send,
{
    let workers = if workers == 0 { DEFAULT_WORKERS } else { workers };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| ExtractError::WorkerPool(e.to_string()))?;

    Ok(pool.install(|| {
        documents
            .into_par_iter()
            .map(|mut document| extract(&mut document, options))
            .collect()
    }))
}
