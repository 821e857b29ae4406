//! # Pixfeed Core
//!
//! The domain layer of the image feed.
//! Holds the published image entity, the ports infrastructure must implement,
//! and the feed services (pagination, engagement updates, publishing).
//! No infrastructure dependencies live here.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::FeedService;
