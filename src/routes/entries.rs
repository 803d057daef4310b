use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::Page;
use crate::service;
use crate::AppState;

#[derive(Deserialize)]
pub struct EntryBody {
    content: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/entries", get(list_entries))
        .route("/entry/", post(create_entry))
        .route(
            "/entry/{id}",
            get(get_entry).put(update_entry).delete(delete_entry),
        )
}

async fn list_entries(
    State(state): State<AppState>,
    page: Result<Query<Page>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(page) = page?;
    let entries = service::list_entries(&state.db, page).await?;
    Ok(Json(entries))
}

async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let entry = service::get_entry(&state.db, &id).await?;
    Ok(Json(entry))
}

async fn create_entry(
    State(state): State<AppState>,
    body: Result<Json<EntryBody>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let entry = service::create_entry(&state.db, body.content).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<EntryBody>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let entry = service::update_entry(&state.db, &id, &body.content).await?;
    Ok(Json(entry))
}

async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    service::delete_entry(&state.db, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
