//! Pagination types.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Page sizes offered by the list view.
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [10, 20, 50];

/// Default number of page buttons in the navigation window.
pub const DEFAULT_MAX_VISIBLE: u32 = 5;

/// One element of the page navigation window.
///
/// Serializes as the page number, or as the string `"ellipsis"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    /// A clickable page number (1-indexed).
    Page(u32),
    /// Placeholder for an elided range of pages.
    Ellipsis,
}

impl PageMarker {
    /// The page number, if this marker is one.
    #[must_use]
    pub fn page(self) -> Option<u32> {
        match self {
            Self::Page(n) => Some(n),
            Self::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Ellipsis => write!(f, "..."),
        }
    }
}

impl Serialize for PageMarker {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Page(n) => serializer.serialize_u32(*n),
            Self::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}

/// Pagination parameters for list operations.
///
/// Pages are 1-indexed. The default is `page = 1, page_size = 10`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE_OPTIONS[0],
        }
    }
}

impl PaginationParams {
    /// Clamp pagination values to valid ranges.
    ///
    /// - `page` is clamped to `>= 1`
    /// - `page_size` is clamped to `1..=max_page_size`
    #[must_use]
    pub fn validated(&self, max_page_size: u32) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, max_page_size.max(1)),
        }
    }
}

/// A paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items in the current page.
    pub items: Vec<T>,
    /// Current page number.
    pub page: u32,
    /// Page size used for this request.
    pub page_size: u32,
    /// Total number of items across all pages.
    pub total_count: u32,
    /// Total number of pages (at least 1).
    pub total_pages: u32,
    /// Whether there are more pages after this one.
    pub has_more: bool,
}
