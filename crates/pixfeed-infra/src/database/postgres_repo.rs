//! PostgreSQL image store.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, QuerySelect, Set,
};

use pixfeed_core::domain::{NewPublishedImage, PublishedImage};
use pixfeed_core::error::RepoError;
use pixfeed_core::ports::PublishedImageRepository;

use super::entity::published_image::{self, Entity as PublishedImageEntity};
use super::postgres_base::{PostgresBaseRepository, repo_err};

/// PostgreSQL published image repository.
pub type PostgresImageRepository = PostgresBaseRepository<PublishedImageEntity>;

#[async_trait]
impl PublishedImageRepository for PostgresImageRepository {
    async fn create(&self, new: NewPublishedImage) -> Result<PublishedImage, RepoError> {
        let model = published_image::ActiveModel {
            id: NotSet,
            image_url: Set(new.image_url),
            prompt: Set(new.prompt),
            hearts: Set(0),
            created_at: Set(Utc::now().into()),
        }
        .insert(self.conn())
        .await
        .map_err(repo_err)?;

        tracing::debug!(image_id = model.id, "Published image stored");
        Ok(model.into())
    }

    async fn list_newest_first(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<PublishedImage>, RepoError> {
        tracing::debug!(offset, limit, "Listing feed page");

        // Postgres binds OFFSET as BIGINT; anything beyond it is past every row.
        if offset > i64::MAX as u64 {
            return Ok(Vec::new());
        }

        let result = PublishedImageEntity::find()
            .order_by_desc(published_image::Column::CreatedAt)
            .order_by_desc(published_image::Column::Id)
            .offset(offset)
            .limit(limit.min(i64::MAX as u64))
            .all(self.conn())
            .await
            .map_err(repo_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update_hearts(
        &self,
        id: i32,
        hearts: i32,
    ) -> Result<Option<PublishedImage>, RepoError> {
        tracing::debug!(image_id = id, hearts, "Replacing hearts");

        let updated = PublishedImageEntity::update_many()
            .col_expr(published_image::Column::Hearts, Expr::value(hearts))
            .filter(published_image::Column::Id.eq(id))
            .exec_with_returning(self.conn())
            .await
            .map_err(repo_err)?;

        Ok(updated.into_iter().next().map(Into::into))
    }

    async fn increment_hearts(
        &self,
        id: i32,
        delta: i32,
    ) -> Result<Option<PublishedImage>, RepoError> {
        tracing::debug!(image_id = id, delta, "Incrementing hearts");

        let updated = PublishedImageEntity::update_many()
            .col_expr(
                published_image::Column::Hearts,
                Expr::col(published_image::Column::Hearts).add(delta),
            )
            .filter(published_image::Column::Id.eq(id))
            .exec_with_returning(self.conn())
            .await
            .map_err(repo_err)?;

        Ok(updated.into_iter().next().map(Into::into))
    }
}
