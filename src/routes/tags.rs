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
pub struct NewTag {
    name: String,
}

#[derive(Deserialize)]
pub struct RenameTag {
    new_name: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tags", get(list_tags))
        .route("/tag/", post(create_tag))
        .route("/tag/{name}", get(get_tag).put(rename_tag).delete(delete_tag))
}

async fn list_tags(
    State(state): State<AppState>,
    page: Result<Query<Page>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(page) = page?;
    let tags = service::list_tags(&state.db, page).await?;
    Ok(Json(tags))
}

async fn get_tag(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let tag = service::get_tag(&state.db, &name).await?;
    Ok(Json(tag))
}

async fn create_tag(
    State(state): State<AppState>,
    body: Result<Json<NewTag>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let tag = service::create_tag(&state.db, body.name).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}

async fn rename_tag(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Result<Json<RenameTag>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let tag = service::rename_tag(&state.db, &name, &body.new_name).await?;
    Ok(Json(tag))
}

async fn delete_tag(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    service::delete_tag(&state.db, &name).await?;
    Ok(StatusCode::NO_CONTENT)
}
