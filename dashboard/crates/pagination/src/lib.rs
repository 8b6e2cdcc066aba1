//! Client-side offset pagination.
//!
//! The dashboard keeps its whole collection in memory and shows a
//! fixed-size window of it at a time. This crate derives that window as
//! a pure function of the collection, the 1-indexed page number, and
//! the page size; changing pages never touches the network.

use std::num::NonZeroUsize;

use serde::Serialize;

/// One visible window over a paginated collection.
///
/// Borrowed from the source collection, so a page is only valid while
/// the collection is unchanged. Derive a fresh page after mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a, T> {
    /// Records visible on this page, in collection order.
    pub items: &'a [T],
    /// 1-indexed page number this window was derived from.
    pub number: usize,
    /// Number of pages needed to show every record.
    pub total_pages: usize,
    /// Number of records across all pages.
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    /// Number of records visible on this page.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page shows no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// Whether an earlier page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.number > 1
    }
}

/// Number of pages needed to show `total_items` records at `per_page`
/// records each. Zero records need zero pages.
#[must_use]
pub const fn total_pages(total_items: usize, per_page: NonZeroUsize) -> usize {
    total_items.div_ceil(per_page.get())
}

/// Construct a page size from a literal, for use in constants.
///
/// # Panics
///
/// Panics when `size` is zero; in const position this fails the build.
#[must_use]
pub const fn page_size(size: usize) -> NonZeroUsize {
    match NonZeroUsize::new(size) {
        Some(per_page) => per_page,
        None => panic!("page size must be non-zero"),
    }
}

/// Derive the window `[(page - 1) * per_page, page * per_page)` over
/// `items`, clipped to the collection bounds.
///
/// Pages are 1-indexed. Page 0 and pages past the end of the collection
/// yield an empty window; the page metadata still reports the requested
/// number so callers can render an out-of-range selection.
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, per_page: NonZeroUsize) -> Page<'_, T> {
    let total_items = items.len();
    let window = page
        .checked_sub(1)
        .map(|zero_based| zero_based.saturating_mul(per_page.get()))
        .and_then(|start| {
            let end = start.saturating_add(per_page.get()).min(total_items);
            items.get(start..end)
        })
        .unwrap_or(&[]);

    Page {
        items: window,
        number: page,
        total_pages: total_pages(total_items, per_page),
        total_items,
    }
}
