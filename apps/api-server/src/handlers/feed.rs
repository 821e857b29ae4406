//! Feed handlers - paging and hearts.

use actix_web::{HttpResponse, web};

use pixfeed_core::domain::PublishedImage;
use pixfeed_core::services::{FeedPage, messages};
use pixfeed_shared::dto::{FeedQuery, FeedResponse, ImageResponse, UpdateHeartsRequest};

use super::params::{json_i32, query_int};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const FETCH_FAILED: &str = "Failed to fetch feed";
const HEARTS_FAILED: &str = "Failed to update hearts";

pub(crate) fn image_response(image: PublishedImage) -> ImageResponse {
    ImageResponse {
        id: image.id,
        image_url: image.image_url,
        prompt: image.prompt,
        hearts: image.hearts,
        created_at: image.created_at,
    }
}

fn feed_response(page: FeedPage) -> FeedResponse {
    FeedResponse {
        images: page.images.into_iter().map(image_response).collect(),
        total: page.total,
        page: page.page,
        total_pages: page.total_pages,
    }
}

/// GET /api/feed?page={int}&limit={int}
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<FeedQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    let page = query_int(query.page.as_deref())
        .ok_or_else(|| AppError::bad_request(messages::PAGE_INVALID))?;
    let limit = query_int(query.limit.as_deref())
        .ok_or_else(|| AppError::bad_request(messages::LIMIT_INVALID))?;

    let page = state
        .feed
        .get_page(page, limit)
        .await
        .map_err(|e| AppError::from_domain(e, FETCH_FAILED))?;

    Ok(HttpResponse::Ok().json(feed_response(page)))
}

/// PUT /api/feed - replace the hearts counter with an absolute value.
pub async fn update_hearts(
    state: web::Data<AppState>,
    body: web::Json<UpdateHeartsRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let id = req
        .id
        .ok_or_else(|| AppError::bad_request("id is required"))?;
    let hearts = req
        .hearts
        .ok_or_else(|| AppError::bad_request("hearts is required"))?;

    let id = json_i32(&id)
        .map_err(|e| AppError::bad_request(e.message("id", messages::ID_INVALID)))?;
    let hearts = json_i32(&hearts)
        .map_err(|e| AppError::bad_request(e.message("hearts", messages::HEARTS_INVALID)))?;

    let image = state
        .feed
        .set_hearts(id, hearts)
        .await
        .map_err(|e| AppError::from_domain(e, HEARTS_FAILED))?;

    Ok(HttpResponse::Ok().json(image_response(image)))
}

/// POST /api/feed/{id}/hearts - add one heart inside the store.
pub async fn add_heart(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::bad_request(messages::ID_INVALID))?;

    let image = state
        .feed
        .increment_hearts(id, 1)
        .await
        .map_err(|e| AppError::from_domain(e, HEARTS_FAILED))?;

    Ok(HttpResponse::Ok().json(image_response(image)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test};
    use async_trait::async_trait;
    use serde_json::{Value, json};

    use pixfeed_core::domain::NewPublishedImage;
    use pixfeed_core::error::RepoError;
    use pixfeed_core::ports::{BaseRepository, PublishedImageRepository};
    use pixfeed_shared::ErrorResponse;

    use super::*;

    async fn seeded_state(count: usize) -> AppState {
        let state = AppState::in_memory();
        for n in 1..=count {
            state
                .feed
                .publish(&format!("https://img/{n}.png"), &format!("prompt {n}"))
                .await
                .unwrap();
        }
        state
    }

    struct BrokenStore;

    #[async_trait]
    impl BaseRepository<PublishedImage, i32> for BrokenStore {
        async fn find_by_id(&self, _id: i32) -> Result<Option<PublishedImage>, RepoError> {
            Err(RepoError::Connection("connection refused".into()))
        }

        async fn count(&self) -> Result<u64, RepoError> {
            Err(RepoError::Connection("connection refused".into()))
        }
    }

    #[async_trait]
    impl PublishedImageRepository for BrokenStore {
        async fn create(&self, _new: NewPublishedImage) -> Result<PublishedImage, RepoError> {
            Err(RepoError::Connection("connection refused".into()))
        }

        async fn list_newest_first(
            &self,
            _offset: u64,
            _limit: u64,
        ) -> Result<Vec<PublishedImage>, RepoError> {
            Err(RepoError::Connection("connection refused".into()))
        }

        async fn update_hearts(
            &self,
            _id: i32,
            _hearts: i32,
        ) -> Result<Option<PublishedImage>, RepoError> {
            Err(RepoError::Connection("connection refused".into()))
        }

        async fn increment_hearts(
            &self,
            _id: i32,
            _delta: i32,
        ) -> Result<Option<PublishedImage>, RepoError> {
            Err(RepoError::Connection("connection refused".into()))
        }
    }

    #[actix_rt::test]
    async fn test_feed_first_page() {
        let app = test_app!(seeded_state(25).await);

        let req = test::TestRequest::get()
            .uri("/api/feed?page=1&limit=10")
            .to_request();
        let body: FeedResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.images.len(), 10);
        assert_eq!(body.total, 25);
        assert_eq!(body.page, 1);
        assert_eq!(body.total_pages, 3);
        assert_eq!(body.images[0].id, 25);
    }

    #[actix_rt::test]
    async fn test_feed_clamps_limit() {
        let app = test_app!(seeded_state(55).await);

        let req = test::TestRequest::get()
            .uri("/api/feed?page=1&limit=1000")
            .to_request();
        let body: FeedResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.images.len(), 50);
        assert_eq!(body.total_pages, 2);
    }

    #[actix_rt::test]
    async fn test_feed_rejects_bad_page_and_limit() {
        let app = test_app!(AppState::in_memory());

        let cases = [
            ("/api/feed?limit=10", "page must be a positive integer"),
            ("/api/feed?page=0&limit=10", "page must be a positive integer"),
            ("/api/feed?page=abc&limit=10", "page must be a positive integer"),
            ("/api/feed?page=1", "limit must be a positive integer"),
            ("/api/feed?page=1&limit=-3", "limit must be a positive integer"),
        ];

        for (uri, message) in cases {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
            let body: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(body.error, message, "{uri}");
        }
    }

    #[actix_rt::test]
    async fn test_feed_malformed_query_is_json_error() {
        let app = test_app!(AppState::in_memory());

        for uri in [
            "/api/feed?page=1&page=2&limit=10",
            "/api/feed?page=1&limit=10&limit=20",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
            let body: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(body.error, "Invalid query string", "{uri}");
        }
    }

    #[actix_rt::test]
    async fn test_feed_huge_page_is_empty() {
        let app = test_app!(seeded_state(3).await);

        let req = test::TestRequest::get()
            .uri("/api/feed?page=9223372036854775807&limit=50")
            .to_request();
        let body: FeedResponse = test::call_and_read_body_json(&app, req).await;

        assert!(body.images.is_empty());
        assert_eq!(body.total, 3);
        assert_eq!(body.total_pages, 1);
    }

    #[actix_rt::test]
    async fn test_feed_storage_failure() {
        let app = test_app!(AppState::with_repository(Arc::new(BrokenStore)));

        let req = test::TestRequest::get()
            .uri("/api/feed?page=1&limit=10")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Failed to fetch feed");
    }

    #[actix_rt::test]
    async fn test_put_hearts_returns_unwrapped_entity() {
        let app = test_app!(seeded_state(2).await);

        let req = test::TestRequest::put()
            .uri("/api/feed")
            .set_json(json!({ "id": 1, "hearts": 5 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["hearts"], 5);
        assert_eq!(body["imageUrl"], "https://img/1.png");
        assert!(body.get("createdAt").is_some());
    }

    #[actix_rt::test]
    async fn test_put_hearts_validation_messages() {
        let app = test_app!(seeded_state(1).await);

        let cases = [
            (json!({ "hearts": 1 }), "id is required"),
            (json!({ "id": null, "hearts": 1 }), "id is required"),
            (json!({ "id": 1 }), "hearts is required"),
            (json!({ "id": "1", "hearts": 1 }), "id must be a positive number"),
            (json!({ "id": 0, "hearts": 1 }), "id must be a positive number"),
            (json!({ "id": 1, "hearts": -1 }), "hearts must be a non-negative number"),
            (json!({ "id": 1, "hearts": "2" }), "hearts must be a non-negative number"),
            (json!({ "id": 1, "hearts": 3_000_000_000u64 }), "hearts must be at most 2147483647"),
            (json!({ "id": 3_000_000_000u64, "hearts": 1 }), "id must be at most 2147483647"),
        ];

        for (payload, message) in cases {
            let req = test::TestRequest::put()
                .uri("/api/feed")
                .set_json(&payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{payload}");
            let body: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(body.error, message, "{payload}");
        }
    }

    #[actix_rt::test]
    async fn test_put_hearts_unknown_image() {
        let app = test_app!(seeded_state(1).await);

        let req = test::TestRequest::put()
            .uri("/api/feed")
            .set_json(json!({ "id": 999, "hearts": 3 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Image not found");
    }

    #[actix_rt::test]
    async fn test_put_hearts_storage_failure() {
        let app = test_app!(AppState::with_repository(Arc::new(BrokenStore)));

        let req = test::TestRequest::put()
            .uri("/api/feed")
            .set_json(json!({ "id": 1, "hearts": 3 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Failed to update hearts");
    }

    #[actix_rt::test]
    async fn test_invalid_json_body() {
        let app = test_app!(AppState::in_memory());

        let req = test::TestRequest::put()
            .uri("/api/feed")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Invalid JSON body");
    }

    #[actix_rt::test]
    async fn test_add_heart_increments() {
        let app = test_app!(seeded_state(1).await);

        for expected in 1..=2 {
            let req = test::TestRequest::post()
                .uri("/api/feed/1/hearts")
                .to_request();
            let body: ImageResponse = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body.hearts, expected);
        }

        let req = test::TestRequest::post()
            .uri("/api/feed/abc/hearts")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/feed/42/hearts")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
