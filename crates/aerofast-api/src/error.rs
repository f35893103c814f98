//! API error types and JSON error response formatting.
//!
//! ApiError provides a consistent JSON error response format across all
//! endpoints, mapping domain errors to HTTP status codes.

use aerofast_catalog::CatalogError;
use aerofast_concierge::ConciergeError;
use aerofast_contact::ContactError;
use aerofast_core::error::AerofastError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code (e.g., "bad_request", "not_found").
    pub error: String,
    /// Human-readable error message.
    pub message: String,
}

/// API error type that maps to HTTP status codes and JSON responses.
///
/// `Display` is the human-readable message sent in the body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 400 Bad Request - missing or invalid parameters.
    #[error("{0}")]
    BadRequest(String),
    /// 404 Not Found - resource does not exist.
    #[error("{0}")]
    NotFound(String),
    /// 409 Conflict - the resource is not in a state that accepts this.
    #[error("{0}")]
    Conflict(String),
    /// 422 Unprocessable Entity - well-formed but fails validation.
    #[error("{0}")]
    UnprocessableEntity(String),
    /// 429 Too Many Requests.
    #[error("{0}")]
    TooManyRequests(String),
    /// 500 Internal Server Error.
    #[error("{0}")]
    Internal(String),
    /// 503 Service Unavailable - visit capacity exhausted.
    #[error("{0}")]
    ServiceUnavailable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::NotFound(_) => "not_found",
            ApiError::Conflict(_) => "conflict",
            ApiError::UnprocessableEntity(_) => "unprocessable_entity",
            ApiError::TooManyRequests(_) => "too_many_requests",
            ApiError::Internal(_) => "internal_error",
            ApiError::ServiceUnavailable(_) => "service_unavailable",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.code().to_string();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), %message, "Request failed");
        }

        (status, Json(ErrorBody { error, message })).into_response()
    }
}

impl From<AerofastError> for ApiError {
    fn from(err: AerofastError) -> Self {
        match err {
            AerofastError::Validation(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(_) => ApiError::NotFound(err.to_string()),
            CatalogError::DuplicateId(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<ConciergeError> for ApiError {
    fn from(err: ConciergeError) -> Self {
        match err {
            ConciergeError::EmptyMessage | ConciergeError::MessageTooLong(_) => {
                ApiError::BadRequest(err.to_string())
            }
            ConciergeError::QuickActionNotFound(_) | ConciergeError::SessionClosed => {
                ApiError::NotFound(err.to_string())
            }
            ConciergeError::InvalidPattern(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::Validation(_) => ApiError::UnprocessableEntity(err.to_string()),
            ContactError::Busy(_) | ContactError::InvalidTransition { .. } => {
                ApiError::Conflict(err.to_string())
            }
            ContactError::Closed => ApiError::NotFound(err.to_string()),
        }
    }
}
