use crate::config::Comparison;

/// Inclusion gate on a table's post-trim size.
///
/// A table qualifies for output only when both predicates hold.
#[must_use]
pub fn should_include(
    effective_rows: usize,
    effective_columns: usize,
    row_filter: &Comparison,
    column_filter: &Comparison,
) -> bool {
    row_filter.holds(effective_rows) && column_filter.holds(effective_columns)
}
