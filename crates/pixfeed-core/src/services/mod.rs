//! Feed services - pagination, engagement updates, and publishing.

mod engagement;
mod feed;
mod pagination;

pub use engagement::{EngagementUpdater, HeartsUpdate};
pub use feed::{FeedPage, FeedService};
pub use pagination::{MAX_PAGE_SIZE, PageRequest, PageWindow, paginate};

/// Validation messages shared with the HTTP boundary.
pub mod messages {
    pub const PAGE_INVALID: &str = "page must be a positive integer";
    pub const LIMIT_INVALID: &str = "limit must be a positive integer";
    pub const ID_INVALID: &str = "id must be a positive number";
    pub const HEARTS_INVALID: &str = "hearts must be a non-negative number";
    pub const DELTA_INVALID: &str = "delta must be a positive number";
    pub const IMAGE_URL_EMPTY: &str = "imageUrl must be a non-empty string";
}
