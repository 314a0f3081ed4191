//! Page/limit helpers shared by every paginated listing.
//!
//! Listings take a 1-based `page` and a `limit`, which are turned into the
//! `LIMIT`/`OFFSET` pair the repositories bind.

use serde::Serialize;

/// Default page size for news and forum listings.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Default page size for posts inside a forum topic.
pub const DEFAULT_POST_PAGE_LIMIT: i64 = 20;

/// Maximum page size accepted from a client.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Clamp a user-provided limit to `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a 1-based page number; anything below 1 becomes 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Pagination block returned alongside list payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

/// A resolved page request: what the client asked for after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    pub fn new(page: Option<i64>, limit: Option<i64>, default_limit: i64) -> Self {
        Self {
            page: clamp_page(page),
            limit: clamp_limit(limit, default_limit, MAX_PAGE_LIMIT),
        }
    }

    /// Row offset for this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Build the response block once the total row count is known.
    pub fn paginate(&self, total: i64) -> Pagination {
        Pagination {
            page: self.page,
            limit: self.limit,
            total,
            pages: total_pages(total, self.limit),
        }
    }
}

/// Number of pages needed to hold `total` rows, `ceil(total / limit)`.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total <= 0 || limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
