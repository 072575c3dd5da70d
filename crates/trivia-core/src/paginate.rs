//! Fixed-size pagination over an ordered snapshot.

use crate::error::TriviaError;

/// Default page size for question listings.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Return page `page` (1-based) of `items`, `page_size` items per page.
///
/// The last page may be shorter than `page_size`. A page that starts
/// exactly at `items.len()` is an empty page, not an error; only a start
/// strictly past the end fails with [`TriviaError::OutOfRange`].
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Result<&[T], TriviaError> {
    if page == 0 {
        return Err(TriviaError::validation("page numbers start at 1"));
    }
    if page_size == 0 {
        return Err(TriviaError::validation("page size must be at least 1"));
    }

    let start = (page - 1).saturating_mul(page_size);
    if start > items.len() {
        return Err(TriviaError::OutOfRange {
            start,
            total: items.len(),
        });
    }

    let end = start.saturating_add(page_size).min(items.len());
    Ok(&items[start..end])
}

/// Number of pages needed to show `total` items. Zero items need zero pages.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}
