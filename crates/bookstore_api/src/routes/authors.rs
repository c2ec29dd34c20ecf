//! `/authors` handlers.

use super::{parse_id, run_blocking};
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use bookstore_core::{AuthorDto, AuthorInput, EntityKind};
use std::sync::Arc;

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/authors", get(list_authors).post(create_author))
        .route("/authors/", get(list_authors).post(create_author))
        .route("/authors/:id", get(get_author).delete(delete_author))
}

async fn list_authors(State(state): State<AppState>) -> Result<Json<Vec<AuthorDto>>, ApiError> {
    let service = Arc::clone(&state.authors);
    let authors = run_blocking(move || service.get_all_authors()).await?;
    Ok(Json(authors))
}

async fn get_author(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<AuthorDto>, ApiError> {
    let id = parse_id(&raw_id)?;
    let service = Arc::clone(&state.authors);
    run_blocking(move || service.get_author_by_id(id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(EntityKind::Author))
}

async fn create_author(
    State(state): State<AppState>,
    body: Result<Json<AuthorInput>, JsonRejection>,
) -> Result<Json<AuthorDto>, ApiError> {
    let Json(input) = body?;
    let author = input.validate()?;
    let service = Arc::clone(&state.authors);
    let created = run_blocking(move || service.create_author(&author)).await?;
    Ok(Json(created))
}

async fn delete_author(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    let service = Arc::clone(&state.authors);
    run_blocking(move || service.delete_author(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
