//! OpenAI-compatible `images/generations` client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use pixfeed_core::domain::GeneratedImage;
use pixfeed_core::error::GenerationError;
use pixfeed_core::ports::ImageGenerator;

/// Connection settings for the provider.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub size: String,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "dall-e-3".to_string(),
            size: "1024x1024".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    data: Vec<GeneratedData>,
}

#[derive(Debug, Deserialize)]
struct GeneratedData {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

/// Generates one image per prompt and returns the provider-hosted URL.
pub struct OpenAiImageGenerator {
    config: OpenAiConfig,
    client: reqwest::Client,
}

impl OpenAiImageGenerator {
    pub fn new(config: OpenAiConfig) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/images/generations",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

/// Pull the first image URL out of a successful response body.
fn first_image_url(body: &str) -> Result<String, GenerationError> {
    let parsed: GenerationResponse = serde_json::from_str(body)
        .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

    parsed
        .data
        .into_iter()
        .find_map(|d| d.url)
        .ok_or_else(|| GenerationError::InvalidResponse("no image url in response".to_string()))
}

/// Best-effort extraction of the provider's error message.
fn provider_message(body: &str) -> String {
    serde_json::from_str::<ProviderErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.chars().take(200).collect())
}

#[async_trait]
impl ImageGenerator for OpenAiImageGenerator {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, GenerationError> {
        tracing::debug!(model = %self.config.model, "Requesting image generation");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&GenerationRequest {
                model: &self.config.model,
                prompt,
                n: 1,
                size: &self.config.size,
            })
            .send()
            .await
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(GenerationError::Provider {
                status: status.as_u16(),
                message: provider_message(&body),
            });
        }

        Ok(GeneratedImage {
            image_url: first_image_url(&body)?,
            prompt: prompt.to_string(),
        })
    }
}
