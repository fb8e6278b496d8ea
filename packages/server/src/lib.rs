use axum::http::Method;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use comica_api::AppState;
use comica_db::{DbConfig, ReplicatedDb};

pub mod config;

use config::Config;

pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    let mut db_config = DbConfig::new(
        config.primary_database_url.clone(),
        config.replica_database_url.clone(),
    );
    db_config.max_connections = config.db_max_connections;

    let db = ReplicatedDb::connect(&db_config)?;
    db.run_migrations().await?;

    let state = AppState::new(db);

    // One-shot connectivity report; failures are logged, never fatal.
    let report = comica_db::health::check(&state.db).await;
    if !report.all_connected() {
        warn!("One or more database pools are unreachable");
    }

    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<axum::http::HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = Router::new()
        .nest("/tags", comica_api::tags_router())
        .with_state(state)
        .layer(cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
