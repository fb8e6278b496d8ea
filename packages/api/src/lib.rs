// ABOUTME: HTTP API layer for Comica providing REST endpoints and routing
// ABOUTME: Integration layer over the tag domain package

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use comica_db::ReplicatedDb;
use comica_tags::{TagService, TagStore};

pub mod response;
pub mod tags_handlers;

/// Shared state for API handlers
#[derive(Clone)]
pub struct AppState {
    pub db: ReplicatedDb,
    pub tags: Arc<TagService>,
}

impl AppState {
    pub fn new(db: ReplicatedDb) -> Self {
        let tags = Arc::new(TagService::new(TagStore::new(db.clone())));
        Self { db, tags }
    }
}

/// Creates the tags API router
pub fn tags_router() -> Router<AppState> {
    Router::new()
        .route("/all", get(tags_handlers::list_tags))
        .route("/add", post(tags_handlers::add_tag))
}
