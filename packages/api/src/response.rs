// ABOUTME: Shared API response types and error handling
// ABOUTME: Provides a consistent envelope for error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use serde::Serialize;
use thiserror::Error;

use comica_db::StoreError;

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// Error returned by API handlers.
///
/// Store failures carry no domain-specific status mapping; they surface as
/// generic server errors with the underlying cause kept in the logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            ApiError::Store(StoreError::Connectivity(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database unavailable".to_string(),
            ),
            ApiError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            ),
        };

        tracing::error!(error = %self, "Request failed");

        (status, ResponseJson(ApiResponse::<()>::error(message))).into_response()
    }
}
