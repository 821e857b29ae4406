//! Error handling - every failure becomes `{"error": "..."}` with a status code.

use actix_web::{
    HttpRequest, HttpResponse, ResponseError,
    error::{JsonPayloadError, QueryPayloadError},
    http::StatusCode,
};
use pixfeed_core::error::{DomainError, GenerationError};
use pixfeed_shared::ErrorResponse;
use std::fmt;

/// Application-level error type.
///
/// Messages are already client-safe; internal details are logged where the
/// error is created and never reach the response body.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(&'static str),
    BadGateway(&'static str),
    ServiceUnavailable(&'static str),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    fn message(&self) -> &str {
        match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) => msg.as_str(),
            AppError::Internal(msg)
            | AppError::BadGateway(msg)
            | AppError::ServiceUnavailable(msg) => msg,
        }
    }

    /// Map a domain error, using `failure` as the body of a storage failure.
    pub fn from_domain(err: DomainError, failure: &'static str) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::NotFound { entity_type, id } => {
                tracing::debug!(entity_type, id, "Entity not found");
                AppError::NotFound(format!("{entity_type} not found"))
            }
            DomainError::Storage(e) => {
                tracing::error!(error = %e, "{failure}");
                AppError::Internal(failure)
            }
        }
    }

    /// Map a provider failure. The provider's message is logged, not returned.
    pub fn from_generation(err: GenerationError, failure: &'static str) -> Self {
        tracing::error!(error = %err, "{failure}");
        AppError::BadGateway(failure)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.message()))
    }
}

/// Rejects unreadable JSON bodies with a 400 in the standard error shape.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected request body");
    AppError::bad_request("Invalid JSON body").into()
}

/// Rejects query strings that cannot be deserialized (e.g. a repeated key).
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected query string");
    AppError::bad_request("Invalid query string").into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
