//! In-memory image store - used when no database is configured, and in tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use pixfeed_core::domain::{NewPublishedImage, PublishedImage};
use pixfeed_core::error::RepoError;
use pixfeed_core::ports::{BaseRepository, PublishedImageRepository};

#[derive(Default)]
struct Store {
    next_id: i32,
    last_created_at: Option<DateTime<Utc>>,
    images: Vec<PublishedImage>,
}

impl Store {
    /// Creation timestamps never go backwards, even if the wall clock does.
    fn stamp(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        let created_at = self.last_created_at.map_or(now, |last| last.max(now));
        self.last_created_at = Some(created_at);
        created_at
    }

    fn get_mut(&mut self, id: i32) -> Option<&mut PublishedImage> {
        self.images.iter_mut().find(|image| image.id == id)
    }
}

/// Image store backed by a `Vec` behind an async `RwLock`.
///
/// Ids start at 1 and are never reused. Data is lost on process restart.
pub struct InMemoryImageRepository {
    store: RwLock<Store>,
}

impl InMemoryImageRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::default()),
        }
    }
}

impl Default for InMemoryImageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<PublishedImage, i32> for InMemoryImageRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<PublishedImage>, RepoError> {
        let store = self.store.read().await;
        Ok(store.images.iter().find(|image| image.id == id).cloned())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        let store = self.store.read().await;
        Ok(store.images.len() as u64)
    }
}

#[async_trait]
impl PublishedImageRepository for InMemoryImageRepository {
    async fn create(&self, new: NewPublishedImage) -> Result<PublishedImage, RepoError> {
        let mut store = self.store.write().await;

        store.next_id = store
            .next_id
            .checked_add(1)
            .ok_or_else(|| RepoError::Constraint("image id space exhausted".to_string()))?;

        let created_at = store.stamp(Utc::now());
        let image = PublishedImage {
            id: store.next_id,
            image_url: new.image_url,
            prompt: new.prompt,
            hearts: 0,
            created_at,
        };
        store.images.push(image.clone());

        tracing::debug!(image_id = image.id, "Published image stored in memory");
        Ok(image)
    }

    async fn list_newest_first(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<PublishedImage>, RepoError> {
        let store = self.store.read().await;

        let mut ordered: Vec<&PublishedImage> = store.images.iter().collect();
        ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(ordered.into_iter().skip(skip).take(take).cloned().collect())
    }

    async fn update_hearts(
        &self,
        id: i32,
        hearts: i32,
    ) -> Result<Option<PublishedImage>, RepoError> {
        let mut store = self.store.write().await;
        Ok(store.get_mut(id).map(|image| {
            image.hearts = hearts;
            image.clone()
        }))
    }

    async fn increment_hearts(
        &self,
        id: i32,
        delta: i32,
    ) -> Result<Option<PublishedImage>, RepoError> {
        let mut store = self.store.write().await;
        let Some(image) = store.get_mut(id) else {
            return Ok(None);
        };

        image.hearts = image
            .hearts
            .checked_add(delta)
            .ok_or_else(|| RepoError::Constraint("hearts counter overflow".to_string()))?;

        Ok(Some(image.clone()))
    }
}
