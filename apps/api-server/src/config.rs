//! Application configuration loaded from environment variables.

use std::env;

use pixfeed_infra::database::DatabaseConfig;
#[cfg(feature = "openai")]
use pixfeed_infra::generation::OpenAiConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the feed on the in-memory store.
    pub database: Option<DatabaseConfig>,
    /// `None` disables `POST /api/generate`.
    #[cfg(feature = "openai")]
    pub openai: Option<OpenAiConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(20),
            min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(2),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database,
            #[cfg(feature = "openai")]
            openai: Self::openai_from_env(),
        }
    }

    /// OPENAI_API_KEY enables generation; the other OPENAI_* variables
    /// override the provider defaults.
    #[cfg(feature = "openai")]
    fn openai_from_env() -> Option<OpenAiConfig> {
        let api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.trim().is_empty())?;
        let mut config = OpenAiConfig::new(api_key);

        if let Ok(base_url) = env::var("OPENAI_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(model) = env::var("OPENAI_IMAGE_MODEL") {
            config.model = model;
        }
        if let Ok(size) = env::var("OPENAI_IMAGE_SIZE") {
            config.size = size;
        }

        Some(config)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
