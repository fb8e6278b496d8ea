// ABOUTME: HTTP request handlers for tag operations
// ABOUTME: Exposes list and add backed by the routed tag service

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use comica_models::TagDraft;
use tracing::{debug, info};

use crate::response::ApiError;
use crate::AppState;

/// List all tags
pub async fn list_tags(State(state): State<AppState>) -> impl IntoResponse {
    info!("Listing tags");

    match state.tags.list_tags().await {
        Ok(tags) => (StatusCode::OK, ResponseJson(tags)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Add a tag.
///
/// The body may carry an id to re-save an existing record; fresh tags get
/// their id from the store. Success responds with an empty body.
pub async fn add_tag(
    State(state): State<AppState>,
    Json(draft): Json<TagDraft>,
) -> impl IntoResponse {
    info!("Adding tag: {}", draft.name);

    match state.tags.add_tag(draft).await {
        Ok(tag) => {
            debug!("Tag stored with id {}", tag.id);
            StatusCode::CREATED.into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}
