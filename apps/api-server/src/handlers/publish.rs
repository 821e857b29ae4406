//! Publishing a generated image to the feed.

use actix_web::{HttpResponse, web};
use serde_json::Value;

use pixfeed_core::services::messages;
use pixfeed_shared::dto::PublishRequest;

use super::feed::image_response;
use super::params::is_blank;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const PUBLISH_FAILED: &str = "Failed to publish image";

/// POST /api/publish
pub async fn publish(
    state: web::Data<AppState>,
    body: web::Json<PublishRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if is_blank(req.image_url.as_ref()) {
        return Err(AppError::bad_request("imageUrl is required"));
    }
    if is_blank(req.prompt.as_ref()) {
        return Err(AppError::bad_request("prompt is required"));
    }

    let Some(Value::String(image_url)) = req.image_url else {
        return Err(AppError::bad_request(messages::IMAGE_URL_EMPTY));
    };
    let Some(Value::String(prompt)) = req.prompt else {
        return Err(AppError::bad_request("prompt must be a string"));
    };

    let image = state
        .feed
        .publish(&image_url, &prompt)
        .await
        .map_err(|e| AppError::from_domain(e, PUBLISH_FAILED))?;

    tracing::info!(image_id = image.id, "Image published");

    Ok(HttpResponse::Created().json(image_response(image)))
}
