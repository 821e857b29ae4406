//! Image generation via the configured provider.

use actix_web::{HttpResponse, web};
use serde_json::Value;

use pixfeed_shared::dto::{GenerateRequest, GeneratedImageResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const GENERATION_FAILED: &str = "Failed to generate image";
const GENERATION_DISABLED: &str = "Image generation is not configured";

/// POST /api/generate
///
/// Returns the provider's image URL and the trimmed prompt; nothing is stored
/// until the client publishes it.
pub async fn generate(
    state: web::Data<AppState>,
    body: web::Json<GenerateRequest>,
) -> AppResult<HttpResponse> {
    let prompt = match body.into_inner().prompt {
        Some(Value::String(p)) if !p.trim().is_empty() => p.trim().to_string(),
        _ => return Err(AppError::bad_request("prompt is required")),
    };

    let generator = state
        .generator
        .as_ref()
        .ok_or(AppError::ServiceUnavailable(GENERATION_DISABLED))?;

    let image = generator
        .generate(&prompt)
        .await
        .map_err(|e| AppError::from_generation(e, GENERATION_FAILED))?;

    Ok(HttpResponse::Ok().json(GeneratedImageResponse {
        image_url: image.image_url,
        prompt: image.prompt,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test};
    use async_trait::async_trait;
    use serde_json::json;

    use pixfeed_core::domain::GeneratedImage;
    use pixfeed_core::error::GenerationError;
    use pixfeed_core::ports::ImageGenerator;
    use pixfeed_shared::ErrorResponse;
    use pixfeed_shared::dto::GeneratedImageResponse;

    use crate::state::AppState;

    struct FixedGenerator;

    #[async_trait]
    impl ImageGenerator for FixedGenerator {
        async fn generate(&self, prompt: &str) -> Result<GeneratedImage, GenerationError> {
            Ok(GeneratedImage {
                image_url: "https://cdn/generated.png".to_string(),
                prompt: prompt.to_string(),
            })
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl ImageGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<GeneratedImage, GenerationError> {
            Err(GenerationError::Provider {
                status: 429,
                message: "rate limited".to_string(),
            })
        }
    }

    #[actix_rt::test]
    async fn test_generate_returns_image() {
        let app = test_app!(AppState::in_memory().with_generator(Arc::new(FixedGenerator)));

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(json!({ "prompt": "  a lighthouse at dawn " }))
            .to_request();
        let body: GeneratedImageResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.image_url, "https://cdn/generated.png");
        assert_eq!(body.prompt, "a lighthouse at dawn");
    }

    #[actix_rt::test]
    async fn test_generate_requires_prompt() {
        let app = test_app!(AppState::in_memory().with_generator(Arc::new(FixedGenerator)));

        for payload in [json!({}), json!({ "prompt": "   " }), json!({ "prompt": 3 })] {
            let req = test::TestRequest::post()
                .uri("/api/generate")
                .set_json(&payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{payload}");
        }
    }

    #[actix_rt::test]
    async fn test_generate_provider_failure_is_bad_gateway() {
        let app = test_app!(AppState::in_memory().with_generator(Arc::new(FailingGenerator)));

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(json!({ "prompt": "anything" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Failed to generate image");
    }

    #[actix_rt::test]
    async fn test_generate_without_provider() {
        let app = test_app!(AppState::in_memory());

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(json!({ "prompt": "anything" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
