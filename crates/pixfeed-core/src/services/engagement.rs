//! Engagement ("hearts") updates.

use std::sync::Arc;

use super::messages;
use crate::domain::PublishedImage;
use crate::error::DomainError;
use crate::ports::PublishedImageRepository;

pub(crate) const ENTITY: &str = "Image";

/// A validated absolute hearts value for one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartsUpdate {
    pub id: i32,
    pub hearts: i32,
}

impl HeartsUpdate {
    pub fn new(id: i32, hearts: i32) -> Result<Self, DomainError> {
        validate_id(id)?;
        if hearts < 0 {
            return Err(DomainError::validation(messages::HEARTS_INVALID));
        }
        Ok(Self { id, hearts })
    }
}

pub(crate) fn validate_id(id: i32) -> Result<(), DomainError> {
    if id < 1 {
        return Err(DomainError::validation(messages::ID_INVALID));
    }
    Ok(())
}

pub(crate) fn not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity_type: ENTITY,
        id,
    }
}

/// Applies hearts changes to a single image.
///
/// [`apply_hearts`](Self::apply_hearts) replaces the counter with a value the
/// caller computed, so concurrent "current + 1" clients can lose updates
/// (last write wins). Re-applying the same value is a no-op in effect.
/// [`add_hearts`](Self::add_hearts) does the addition inside the store.
#[derive(Clone)]
pub struct EngagementUpdater {
    repo: Arc<dyn PublishedImageRepository>,
}

impl EngagementUpdater {
    pub fn new(repo: Arc<dyn PublishedImageRepository>) -> Self {
        Self { repo }
    }

    pub async fn apply_hearts(&self, update: HeartsUpdate) -> Result<PublishedImage, DomainError> {
        self.repo
            .update_hearts(update.id, update.hearts)
            .await?
            .ok_or_else(|| not_found(update.id))
    }

    pub async fn add_hearts(&self, id: i32, delta: i32) -> Result<PublishedImage, DomainError> {
        validate_id(id)?;
        if delta < 1 {
            return Err(DomainError::validation(messages::DELTA_INVALID));
        }

        self.repo
            .increment_hearts(id, delta)
            .await?
            .ok_or_else(|| not_found(id))
    }
}
