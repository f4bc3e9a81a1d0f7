//! The `{success: false, error, message}` envelope and the framework-level fallbacks
//! that produce it.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::any::Any;
use utoipa::ToSchema;

#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    /// Same value as the HTTP status code.
    pub error: u16,
    pub message: String,
}

/// The only failures a client ever sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    NotFound,
    Unprocessable,
    MethodNotAllowed,
    Internal,
}

impl ApiError {
    pub fn status(self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing text. "Unproccessable" is spelled the way existing clients
    /// expect it.
    pub fn message(self) -> &'static str {
        match self {
            ApiError::NotFound => "Resource not found",
            ApiError::Unprocessable => "Unproccessable entity",
            ApiError::MethodNotAllowed => "Wrong method for the url",
            ApiError::Internal => "Server side error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            success: false,
            error: status.as_u16(),
            message: self.message().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Router fallback for unknown paths.
pub async fn not_found_fallback() -> ApiError {
    ApiError::NotFound
}

/// Rewrites the router's bare 405 into the envelope, keeping the `Allow` header.
pub async fn method_not_allowed_envelope(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }
    let allow = response.headers().get(header::ALLOW).cloned();
    let mut rewritten = ApiError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        rewritten.headers_mut().insert(header::ALLOW, allow);
    }
    rewritten
}

/// Response for a handler that panicked.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    };
    tracing::error!("Handler panicked: {}", detail);
    ApiError::Internal.into_response()
}
