//! Pure views over a slice of records: category filtering and page slicing.
//!
//! Nothing here mutates its input. Pages are 1-based to match the page
//! buttons the presentation layer renders.

use crate::category::CategoryFilter;
use crate::showcase_model::ModelRecord;

/// Records matching `selector`, in their original order.
pub fn filter_by_category<'a>(
    records: &'a [ModelRecord],
    selector: CategoryFilter,
) -> Vec<&'a ModelRecord> {
    records
        .iter()
        .filter(|record| selector.matches(record.category))
        .collect()
}

/// The `page`-th window of `page_size` items.
///
/// Page `0` is treated as page 1. Pages past the end, and a zero page size,
/// give an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return &[];
    }
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of page buttons to show for `len` items.
///
/// Never less than one, so an empty catalog still shows a single page.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}
