//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod generator;
mod repository;

pub use generator::ImageGenerator;
pub use repository::{BaseRepository, PublishedImageRepository};
