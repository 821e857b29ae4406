//! Data Transfer Objects - request/response types for the API.
//!
//! Request bodies keep their fields as raw JSON values so the server can tell
//! "missing" apart from "wrong type" and answer with the matching message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query string of `GET /api/feed`. Parsed by hand so that any unparsable
/// value maps onto the field's validation message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Body of `PUT /api/feed`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateHeartsRequest {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub hearts: Option<Value>,
}

/// Body of `POST /api/publish`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    #[serde(default)]
    pub image_url: Option<Value>,
    #[serde(default)]
    pub prompt: Option<Value>,
}

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<Value>,
}

/// A published image as clients see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub id: i32,
    pub image_url: String,
    pub prompt: String,
    pub hearts: i32,
    pub created_at: DateTime<Utc>,
}

/// Envelope of `GET /api/feed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub images: Vec<ImageResponse>,
    pub total: u64,
    pub page: u64,
    pub total_pages: u64,
}

/// Result of `POST /api/generate`, ready to be sent to `/api/publish`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImageResponse {
    pub image_url: String,
    pub prompt: String,
}
