//! Published image entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "published_images")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub image_url: String,
    #[sea_orm(column_type = "Text")]
    pub prompt: String,
    pub hearts: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain PublishedImage.
impl From<Model> for pixfeed_core::domain::PublishedImage {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            image_url: model.image_url,
            prompt: model.prompt,
            hearts: model.hearts,
            created_at: model.created_at.into(),
        }
    }
}
