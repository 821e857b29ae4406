use std::sync::Arc;

use super::engagement::{EngagementUpdater, HeartsUpdate, not_found};
use super::messages;
use super::pagination::{PageRequest, paginate};
use crate::domain::{NewPublishedImage, PublishedImage};
use crate::error::DomainError;
use crate::ports::PublishedImageRepository;

/// One page of the feed plus the totals a client needs to keep scrolling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPage {
    pub images: Vec<PublishedImage>,
    pub total: u64,
    pub page: u64,
    pub total_pages: u64,
}

/// Entry point for reading the feed and changing engagement counts.
///
/// Every call resolves entirely through the repository; the service holds no
/// mutable state and makes a single attempt per store call.
#[derive(Clone)]
pub struct FeedService {
    repo: Arc<dyn PublishedImageRepository>,
    engagement: EngagementUpdater,
}

impl FeedService {
    pub fn new(repo: Arc<dyn PublishedImageRepository>) -> Self {
        let engagement = EngagementUpdater::new(repo.clone());
        Self { repo, engagement }
    }

    /// Fetch page `page` (1-based) with at most `min(limit, 50)` images.
    ///
    /// The count and the slice are read concurrently as two independent
    /// queries, so a publish landing between them can shift the boundary.
    pub async fn get_page(&self, page: i64, limit: i64) -> Result<FeedPage, DomainError> {
        let request = PageRequest::new(page, limit)?;

        let (images, total) = futures::try_join!(
            self.repo
                .list_newest_first(request.offset(), request.effective_limit()),
            self.repo.count()
        )?;

        let window = paginate(request, total);

        Ok(FeedPage {
            images,
            total,
            page: request.page(),
            total_pages: window.total_pages,
        })
    }

    /// Replace the hearts counter of image `id` with `hearts`.
    pub async fn set_hearts(&self, id: i32, hearts: i32) -> Result<PublishedImage, DomainError> {
        let update = HeartsUpdate::new(id, hearts)?;

        if self.repo.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        self.engagement.apply_hearts(update).await
    }

    /// Atomically add `delta` hearts to image `id`.
    pub async fn increment_hearts(
        &self,
        id: i32,
        delta: i32,
    ) -> Result<PublishedImage, DomainError> {
        self.engagement.add_hearts(id, delta).await
    }

    /// Publish a generated image. Both fields are trimmed first.
    pub async fn publish(&self, image_url: &str, prompt: &str) -> Result<PublishedImage, DomainError> {
        let new = NewPublishedImage::new(image_url, prompt);
        if new.image_url.is_empty() {
            return Err(DomainError::validation(messages::IMAGE_URL_EMPTY));
        }

        Ok(self.repo.create(new).await?)
    }
}
