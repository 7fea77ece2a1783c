//! Page arithmetic for directory listings.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// A validated page window: a 1-based page number and a non-zero page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: NonZeroU32,
}

impl PageRequest {
    /// ## Summary
    /// Builds a page window, clamping any page below 1 up to 1.
    #[must_use]
    pub fn new(requested_page: i64, limit: NonZeroU32) -> Self {
        let page = u64::try_from(requested_page).map_or(1, |page| page.max(1));
        Self { page, limit }
    }

    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    #[must_use]
    pub const fn limit(&self) -> NonZeroU32 {
        self.limit
    }

    /// ## Summary
    /// Number of rows to skip before this page starts.
    ///
    /// Not bounded by the result size; a page past the end simply has an
    /// offset past the last row.
    #[must_use]
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(u64::from(self.limit.get()))
    }
}

/// Pagination descriptor returned with every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_count: u64,
    pub limit: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl Pagination {
    /// ## Summary
    /// Computes the descriptor for `request` over `total_count` matching rows.
    ///
    /// `current_page` echoes the (clamped) requested page even when it lies
    /// beyond `total_pages`.
    #[must_use]
    pub fn new(total_count: u64, request: PageRequest) -> Self {
        let limit = request.limit.get();
        let total_pages = total_count.div_ceil(u64::from(limit));
        let current_page = request.page;

        Self {
            current_page,
            total_pages,
            total_count,
            limit,
            has_next_page: current_page < total_pages,
            has_previous_page: current_page > 1,
        }
    }
}

/// ## Summary
/// Convenience wrapper computing a descriptor straight from raw inputs.
#[must_use]
pub fn paginate(total_count: u64, requested_page: i64, limit: NonZeroU32) -> Pagination {
    Pagination::new(total_count, PageRequest::new(requested_page, limit))
}
