//! Image generation provider clients.

#[cfg(feature = "openai")]
mod openai;

#[cfg(feature = "openai")]
pub use openai::{OpenAiConfig, OpenAiImageGenerator};
