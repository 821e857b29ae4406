use async_trait::async_trait;

use crate::domain::{NewPublishedImage, PublishedImage};
use crate::error::RepoError;

/// Generic repository trait for lookups every entity supports.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Total number of stored entities.
    async fn count(&self) -> Result<u64, RepoError>;
}

/// Store of published images, ordered newest first.
///
/// `count` and `list_newest_first` are independent reads; implementations are
/// not required to serve both from one snapshot.
#[async_trait]
pub trait PublishedImageRepository: BaseRepository<PublishedImage, i32> {
    /// Persist a new image. The store assigns `id` and `created_at` and
    /// starts `hearts` at zero.
    async fn create(&self, new: NewPublishedImage) -> Result<PublishedImage, RepoError>;

    /// Images ordered by `created_at` descending (ties broken by `id`
    /// descending), skipping `offset` and returning at most `limit`.
    async fn list_newest_first(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<PublishedImage>, RepoError>;

    /// Replace the hearts counter. Returns `None` if no row has this id.
    async fn update_hearts(&self, id: i32, hearts: i32)
    -> Result<Option<PublishedImage>, RepoError>;

    /// Add `delta` to the hearts counter inside the store.
    /// Returns `None` if no row has this id.
    async fn increment_hearts(
        &self,
        id: i32,
        delta: i32,
    ) -> Result<Option<PublishedImage>, RepoError>;
}
