//! Application state - shared across all handlers.

use std::sync::Arc;

use pixfeed_core::FeedService;
use pixfeed_core::ports::{ImageGenerator, PublishedImageRepository};
use pixfeed_infra::database::{DatabaseConnections, InMemoryImageRepository};

#[cfg(feature = "postgres")]
use pixfeed_infra::database::PostgresImageRepository;
#[cfg(feature = "openai")]
use pixfeed_infra::generation::OpenAiImageGenerator;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub feed: FeedService,
    pub generator: Option<Arc<dyn ImageGenerator>>,
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// A configured database that cannot be reached is a startup failure;
    /// only an absent `DATABASE_URL` selects the in-memory store.
    pub async fn new(config: &AppConfig) -> std::io::Result<Self> {
        #[cfg(feature = "postgres")]
        let (db, repo): (Option<Arc<DatabaseConnections>>, Arc<dyn PublishedImageRepository>) = {
            if let Some(db_config) = &config.database {
                let connections = DatabaseConnections::init(db_config).await.map_err(|e| {
                    tracing::error!(error = %e, "Failed to connect to database");
                    std::io::Error::other(e.to_string())
                })?;
                let connections = Arc::new(connections);
                let repo = Arc::new(PostgresImageRepository::shared(connections.main.clone()));
                (Some(connections), repo)
            } else {
                tracing::warn!("DATABASE_URL not set. Running on the in-memory image store.");
                (None, Arc::new(InMemoryImageRepository::new()))
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (db, repo): (Option<Arc<DatabaseConnections>>, Arc<dyn PublishedImageRepository>) = {
            if config.database.is_some() {
                tracing::warn!("Built without postgres feature - DATABASE_URL is ignored");
            }
            (None, Arc::new(InMemoryImageRepository::new()))
        };

        #[cfg(feature = "openai")]
        let generator: Option<Arc<dyn ImageGenerator>> = match &config.openai {
            Some(openai) => {
                let generator = OpenAiImageGenerator::new(openai.clone())
                    .map_err(|e| std::io::Error::other(e.to_string()))?;
                tracing::info!(model = %openai.model, "Image generation enabled");
                Some(Arc::new(generator))
            }
            None => {
                tracing::warn!("OPENAI_API_KEY not set. Image generation is disabled.");
                None
            }
        };

        #[cfg(not(feature = "openai"))]
        let generator: Option<Arc<dyn ImageGenerator>> = None;

        tracing::info!("Application state initialized");

        Ok(Self {
            feed: FeedService::new(repo),
            generator,
            db,
        })
    }

    /// State backed by a fresh in-memory store, without generation.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryImageRepository::new()))
    }

    #[cfg(test)]
    pub fn with_repository(repo: Arc<dyn PublishedImageRepository>) -> Self {
        Self {
            feed: FeedService::new(repo),
            generator: None,
            db: None,
        }
    }

    #[cfg(test)]
    pub fn with_generator(mut self, generator: Arc<dyn ImageGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Release store resources. Called once the HTTP server has stopped.
    pub async fn shutdown(&self) {
        #[cfg(feature = "postgres")]
        if let Some(db) = &self.db {
            db.close().await;
        }
    }
}
