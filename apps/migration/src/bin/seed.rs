//! Reset the feed to a small set of sample images.
//!
//! Deletes every published image, then inserts the samples oldest first so
//! the feed shows them in reverse order. Intended for local development.

use migration::PublishedImages;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, Database};

const SAMPLES: [(&str, &str, i32); 5] = [
    (
        "https://images.unsplash.com/photo-1579546929662-711aa81148cf?w=512&h=512&fit=crop",
        "A vibrant rainbow gradient background",
        12,
    ),
    (
        "https://images.unsplash.com/photo-1502691876148-a84978e59af8?w=512&h=512&fit=crop",
        "Futuristic cityscape at night with neon lights",
        8,
    ),
    (
        "https://images.unsplash.com/photo-1519681393784-d120267933ba?w=512&h=512&fit=crop",
        "Northern lights over snowy mountains",
        15,
    ),
    (
        "https://images.unsplash.com/photo-1518834103326-6d6b46a82e1f?w=512&h=512&fit=crop",
        "Abstract watercolor painting of a forest",
        5,
    ),
    (
        "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=512&h=512&fit=crop",
        "Galaxy spiral in deep space",
        21,
    ),
];

#[tokio::main]
async fn main() -> Result<(), DbErr> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt().with_env_filter("info").init();

    let url = std::env::var("DATABASE_URL")
        .map_err(|_| DbErr::Custom("DATABASE_URL must be set".to_string()))?;
    let db = Database::connect(&url).await?;
    let backend = db.get_database_backend();

    let cleared = db
        .execute(backend.build(&Query::delete().from_table(PublishedImages::Table).to_owned()))
        .await?;
    tracing::info!(rows = cleared.rows_affected(), "Cleared published images");

    for (image_url, prompt, hearts) in SAMPLES {
        let insert = Query::insert()
            .into_table(PublishedImages::Table)
            .columns([
                PublishedImages::ImageUrl,
                PublishedImages::Prompt,
                PublishedImages::Hearts,
            ])
            .values([image_url.into(), prompt.into(), hearts.into()])
            .map_err(|e| DbErr::Custom(e.to_string()))?
            .to_owned();

        db.execute(backend.build(&insert)).await?;
    }

    tracing::info!(count = SAMPLES.len(), "Seeded sample images");

    db.close().await
}
