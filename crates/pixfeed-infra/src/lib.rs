//! # Pixfeed Infrastructure
//!
//! Concrete implementations of the ports defined in `pixfeed-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL image store via SeaORM
//! - `openai` - OpenAI-compatible image generation client

pub mod database;
pub mod generation;

// Re-exports - In-Memory
pub use database::InMemoryImageRepository;
pub use database::{DatabaseConfig, DatabaseConnections};

#[cfg(feature = "openai")]
pub use generation::{OpenAiConfig, OpenAiImageGenerator};
