use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A generated image that has been published to the shared feed.
///
/// `id` and `created_at` are assigned by the store. Only `hearts` changes
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedImage {
    pub id: i32,
    pub image_url: String,
    pub prompt: String,
    pub hearts: i32,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the caller when publishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPublishedImage {
    pub image_url: String,
    pub prompt: String,
}

impl NewPublishedImage {
    /// Build a publish request, trimming surrounding whitespace from both fields.
    pub fn new(image_url: &str, prompt: &str) -> Self {
        Self {
            image_url: image_url.trim().to_string(),
            prompt: prompt.trim().to_string(),
        }
    }
}

/// Output of the generation provider, ready to be published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub image_url: String,
    pub prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_published_image_trims_fields() {
        let new = NewPublishedImage::new("  https://img/1.png \n", "  a cat ");
        assert_eq!(new.image_url, "https://img/1.png");
        assert_eq!(new.prompt, "a cat");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let image = PublishedImage {
            id: 7,
            image_url: "https://img/7.png".to_string(),
            prompt: "sunset".to_string(),
            hearts: 2,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["imageUrl"], "https://img/7.png");
        assert_eq!(json["hearts"], 2);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("image_url").is_none());
    }
}
