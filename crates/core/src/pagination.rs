//! Page slicing over a fully materialized record list.
//!
//! The movies endpoints aggregate first and slice second: the repository
//! returns the complete aggregated list and [`paginate`] cuts one page out
//! of it. Pushing LIMIT/OFFSET into the aggregation query would move the
//! page boundary onto raw join rows, so the slice stays in memory.

use serde::Serialize;

use crate::error::CoreError;

/// One page of results plus the pagination envelope fields.
///
/// Serializes as `{count, total_pages, prev, next, results}`. `prev` and
/// `next` are `null` on the first and last page respectively.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    /// Total number of records across all pages.
    pub count: usize,
    /// Total number of pages (at least 1, even for an empty list).
    pub total_pages: u32,
    /// Previous page number, `None` on page 1.
    pub prev: Option<u32>,
    /// Next page number, `None` on the last page.
    pub next: Option<u32>,
    /// The records on the requested page.
    pub results: Vec<T>,
}

/// Slice `items` into the requested 1-based page of `per_page` records.
///
/// `total_pages` is `ceil(count / per_page)` with a floor of 1, so an empty
/// list still has a valid (empty) first page. Pages outside
/// `1..=total_pages` are rejected with [`CoreError::InvalidPage`], never
/// clamped.
///
/// `per_page` is configuration, not request input; callers validate it
/// positive at startup.
pub fn paginate<T>(items: Vec<T>, page: u32, per_page: u32) -> Result<Page<T>, CoreError> {
    debug_assert!(per_page > 0, "per_page must be positive");

    let count = items.len();
    let total_pages = (count.div_ceil(per_page as usize).max(1)) as u32;

    if page == 0 || page > total_pages {
        return Err(CoreError::InvalidPage { page, total_pages });
    }

    let start = (page as usize - 1) * per_page as usize;
    let end = (start + per_page as usize).min(count);
    let results = items
        .into_iter()
        .skip(start)
        .take(end - start)
        .collect::<Vec<_>>();

    let prev = (page > 1).then(|| page - 1);
    let next = (page < total_pages).then(|| page + 1);

    Ok(Page {
        count,
        total_pages,
        prev,
        next,
        results,
    })
}
