//! Entry/tag association routes. Both ends are passed as query parameters.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::service;
use crate::AppState;

#[derive(Deserialize)]
pub struct LinkParams {
    entry_id: String,
    tag_name: String,
}

#[derive(Deserialize)]
pub struct EntryParams {
    entry_id: String,
}

#[derive(Deserialize)]
pub struct TagParams {
    tag_name: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/entry_tag/",
            post(link_tag).get(tags_of_entry).delete(unlink_tag),
        )
        .route("/tag_entry/", get(entries_of_tag))
}

async fn link_tag(
    State(state): State<AppState>,
    params: Result<Query<LinkParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let link = service::link_tag(&state.db, &params.entry_id, &params.tag_name).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

async fn unlink_tag(
    State(state): State<AppState>,
    params: Result<Query<LinkParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    service::unlink_tag(&state.db, &params.entry_id, &params.tag_name).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn tags_of_entry(
    State(state): State<AppState>,
    params: Result<Query<EntryParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let names = service::tags_of_entry(&state.db, &params.entry_id).await?;
    Ok(Json(names))
}

async fn entries_of_tag(
    State(state): State<AppState>,
    params: Result<Query<TagParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let ids = service::entries_of_tag(&state.db, &params.tag_name).await?;
    Ok(Json(ids))
}
