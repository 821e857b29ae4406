use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const CREATED_AT_INDEX: &str = "idx_published_images_created_at";

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(PublishedImages::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(PublishedImages::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(PublishedImages::ImageUrl).text().not_null())
        .col(ColumnDef::new(PublishedImages::Prompt).text().not_null())
        .col(
            ColumnDef::new(PublishedImages::Hearts)
                .integer()
                .not_null()
                .default(0)
                .check(Expr::col(PublishedImages::Hearts).gte(0)),
        )
        .col(
            ColumnDef::new(PublishedImages::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_table()).await?;

        manager
            .create_index(
                Index::create()
                    .name(CREATED_AT_INDEX)
                    .table(PublishedImages::Table)
                    .col(PublishedImages::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PublishedImages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PublishedImages {
    Table,
    Id,
    ImageUrl,
    Prompt,
    Hearts,
    CreatedAt,
}
