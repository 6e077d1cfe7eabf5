//! Pagination over an in-memory collection
//!
//! The engine clamps out-of-range page numbers instead of returning an
//! empty slice: callers cannot reach a page with no data by incrementing
//! past the end.

use crate::core::error::QueryError;
use crate::core::record::Record;
use serde::{Deserialize, Serialize};

/// A 1-based page request with a fixed page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (starts at 1; 0 is clamped to 1)
    pub page: usize,

    /// Number of items per page
    pub per_page: usize,
}

impl PageRequest {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self { page, per_page }
    }

    /// First page with the given size
    pub fn first(per_page: usize) -> Self {
        Self { page: 1, per_page }
    }

    /// Get the page number, ensuring a minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }
}

/// The visible slice of records plus pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct PageResult<R> {
    /// Records on the requested (clamped) page
    pub items: Vec<R>,

    /// Current page, clamped to `[1, max(total_pages, 1)]`
    pub page: usize,

    /// Page size the slice was computed with
    pub per_page: usize,

    /// Total number of items after filtering
    pub total_items: usize,

    /// Total number of pages (0 when the collection is empty)
    pub total_pages: usize,
}

impl<R> PageResult<R> {
    /// Number of pages to render: an empty collection still shows one
    /// (empty) page of controls
    pub fn display_pages(&self) -> usize {
        self.total_pages.max(1)
    }

    /// Whether a next page exists
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether a previous page exists
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// 1-based index of the first item on this page (None when empty)
    pub fn first_index(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some((self.page - 1) * self.per_page + 1)
        }
    }

    /// 1-based index of the last item on this page (None when empty)
    pub fn last_index(&self) -> Option<usize> {
        self.first_index().map(|first| first + self.items.len() - 1)
    }
}

/// Slice the requested page out of a collection
///
/// `per_page == 0` is invalid input. A page beyond the end clamps to the
/// last page; page 0 clamps to 1.
pub fn paginate<R: Record>(
    records: &[R],
    request: PageRequest,
) -> Result<PageResult<R>, QueryError> {
    if request.per_page == 0 {
        return Err(QueryError::InvalidPageSize {
            size: request.per_page,
        });
    }

    let total_items = records.len();
    let total_pages = total_items.div_ceil(request.per_page);
    let page = request.page().min(total_pages.max(1));

    let start = (page - 1) * request.per_page;
    let end = (start + request.per_page).min(total_items);
    let items = if start < total_items {
        records[start..end].to_vec()
    } else {
        Vec::new()
    };

    Ok(PageResult {
        items,
        page,
        per_page: request.per_page,
        total_items,
        total_pages,
    })
}

/// The bounded set of page-number buttons shown around the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// First page number in the window
    pub start: usize,

    /// Last page number in the window (inclusive)
    pub end: usize,

    /// Render "..." between page 1 and the window
    pub leading_ellipsis: bool,

    /// Render "..." between the window and the last page
    pub trailing_ellipsis: bool,
}

impl PageWindow {
    /// Whether the "page 1" shortcut button should be rendered
    pub fn show_first(&self) -> bool {
        self.start > 1
    }

    /// Whether the "last page" shortcut button should be rendered
    pub fn show_last(&self, total_pages: usize) -> bool {
        self.end < total_pages.max(1)
    }

    /// The page numbers inside the window, in order
    pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Compute a centered window of page numbers to display
///
/// The window is clamped to `[1, total_pages]` and keeps its full width
/// near the edges whenever enough pages exist. Zero `total_pages` or
/// `window_size` are display-clamped to 1; the window carries no state
/// beyond its inputs and is recomputed on every page change.
pub fn page_window(current_page: usize, total_pages: usize, window_size: usize) -> PageWindow {
    let total = total_pages.max(1);
    let size = window_size.max(1);
    let current = current_page.clamp(1, total);

    let mut start = current.saturating_sub(size / 2).max(1);
    let end = (start + size - 1).min(total);
    // Re-anchor so the window stays `size` wide at the tail
    start = end.saturating_sub(size - 1).max(1);

    PageWindow {
        start,
        end,
        leading_ellipsis: start > 2,
        trailing_ellipsis: end + 1 < total,
    }
}
