pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod service;
pub mod store;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}

async fn health() -> &'static str {
    "ok"
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello, world!" }))
}

/// Build the full Axum application router.
///
/// Caller is responsible for running database migrations on `pool` beforehand.
pub fn build_app(pool: SqlitePool) -> Router {
    let state = AppState { db: pool };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(routes::entries::router())
        .merge(routes::tags::router())
        .merge(routes::links::router())
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
