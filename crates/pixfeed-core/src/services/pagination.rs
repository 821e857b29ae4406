//! Offset pagination over the newest-first feed.
//!
//! Pages are 1-based. A page past the end is not an error: it yields no
//! items while `total_pages` still reports the real total, so infinite-scroll
//! clients simply stop. Offsets drift by the number of items published
//! between two requests; nothing here pins a snapshot.

use super::messages;
use crate::error::DomainError;

/// Hard ceiling on items per page.
pub const MAX_PAGE_SIZE: u64 = 50;

/// A validated `(page, limit)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Both values must be at least 1. `limit` may exceed the ceiling; it is
    /// clamped, not rejected.
    pub fn new(page: i64, limit: i64) -> Result<Self, DomainError> {
        let page = positive(page).ok_or_else(|| DomainError::validation(messages::PAGE_INVALID))?;
        let limit =
            positive(limit).ok_or_else(|| DomainError::validation(messages::LIMIT_INVALID))?;

        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    /// The requested limit clamped to [`MAX_PAGE_SIZE`].
    pub fn effective_limit(&self) -> u64 {
        self.limit.min(MAX_PAGE_SIZE)
    }

    /// Number of feed items preceding this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.effective_limit())
    }
}

fn positive(value: i64) -> Option<u64> {
    u64::try_from(value).ok().filter(|v| *v >= 1)
}

/// Where a page sits in the feed and how many pages the feed has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub effective_limit: u64,
    pub total_pages: u64,
}

/// Resolve a page request against the current item count.
pub fn paginate(request: PageRequest, total_count: u64) -> PageWindow {
    let effective_limit = request.effective_limit();

    PageWindow {
        offset: request.offset(),
        effective_limit,
        total_pages: total_count.div_ceil(effective_limit),
    }
}
