use async_trait::async_trait;

use crate::domain::GeneratedImage;
use crate::error::GenerationError;

/// External text-to-image provider.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate one image for `prompt` and return where it can be fetched.
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, GenerationError>;
}
