//! Page navigation window and list pagination.

use serde::Serialize;

use crate::types::{PageMarker, PaginatedResponse, PaginationParams, DEFAULT_MAX_VISIBLE};

/// Smallest window that can still pin the first and last pages around the current one.
const MIN_VISIBLE: u32 = 3;

/// Computes the page-number window for a navigation bar.
///
/// Pages `1` and `total_pages` are always shown; the current page is shown with its
/// neighbours, and elided ranges become [`PageMarker::Ellipsis`]. Near either end the
/// window stretches to four consecutive pages next to the pinned page instead of leaving a
/// gap of one.
///
/// `current_page` outside `1..=total_pages` is clamped into range, and `max_visible`
/// below 3 is treated as 3. `total_pages == 0` yields an empty window.
#[must_use]
pub fn page_window(current_page: u32, total_pages: u32, max_visible: u32) -> Vec<PageMarker> {
    if total_pages == 0 {
        return Vec::new();
    }
    let max_visible = max_visible.max(MIN_VISIBLE);
    let current = current_page.clamp(1, total_pages);

    if total_pages <= max_visible {
        return (1..=total_pages).map(PageMarker::Page).collect();
    }

    // total_pages > max_visible >= 3, so total_pages - 3 >= 1 below.
    let last_inner = total_pages - 1;
    let mut start = current.saturating_sub(1).max(2);
    let mut end = current.saturating_add(1).min(last_inner);

    if current <= 3 {
        end = 4_u32.min(last_inner);
    } else if current >= total_pages - 2 {
        start = (total_pages - 3).max(2);
    }

    let mut markers = Vec::with_capacity(max_visible as usize + 2);
    markers.push(PageMarker::Page(1));
    if start > 2 {
        markers.push(PageMarker::Ellipsis);
    }
    markers.extend((start..=end).map(PageMarker::Page));
    if end < last_inner {
        markers.push(PageMarker::Ellipsis);
    }
    markers.push(PageMarker::Page(total_pages));
    markers
}

/// [`page_window`] with the default budget of five buttons.
#[must_use]
pub fn default_page_window(current_page: u32, total_pages: u32) -> Vec<PageMarker> {
    page_window(current_page, total_pages, DEFAULT_MAX_VISIBLE)
}

/// Position of the current page within a list, as shown under a table.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Current page, clamped into `1..=total_pages`.
    pub current_page: u32,
    /// Total pages, at least 1 even for an empty list.
    pub total_pages: u32,
    /// Total items across all pages.
    pub total_items: u32,
    /// Items per page.
    pub page_size: u32,
    pub has_prev_page: bool,
    pub has_next_page: bool,
}

impl PageInfo {
    /// Computes page metadata; a zero `page_size` is treated as 1.
    #[must_use]
    pub fn new(current_page: u32, total_items: u32, page_size: u32) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_items.div_ceil(page_size).max(1);
        let current_page = current_page.clamp(1, total_pages);
        Self {
            current_page,
            total_pages,
            total_items,
            page_size,
            has_prev_page: current_page > 1,
            has_next_page: current_page < total_pages,
        }
    }

    /// 1-based index of the first item on this page, 0 when the list is empty.
    #[must_use]
    pub fn first_item(&self) -> u32 {
        if self.total_items == 0 {
            0
        } else {
            (self.current_page - 1) * self.page_size + 1
        }
    }

    /// 1-based index of the last item on this page, 0 when the list is empty.
    #[must_use]
    pub fn last_item(&self) -> u32 {
        self.current_page
            .saturating_mul(self.page_size)
            .min(self.total_items)
    }

    /// Navigation window for this page.
    #[must_use]
    pub fn window(&self, max_visible: u32) -> Vec<PageMarker> {
        page_window(self.current_page, self.total_pages, max_visible)
    }
}

/// Slices `items` to the requested page. Out-of-range pages clamp to the last page.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], params: PaginationParams) -> PaginatedResponse<T> {
    let total_count = u32::try_from(items.len()).unwrap_or(u32::MAX);
    let info = PageInfo::new(params.page, total_count, params.page_size);

    let skip = ((info.current_page - 1) * info.page_size) as usize;
    let page_items = items
        .iter()
        .skip(skip)
        .take(info.page_size as usize)
        .cloned()
        .collect();

    PaginatedResponse {
        items: page_items,
        page: info.current_page,
        page_size: info.page_size,
        total_count,
        total_pages: info.total_pages,
        has_more: info.has_next_page,
    }
}
