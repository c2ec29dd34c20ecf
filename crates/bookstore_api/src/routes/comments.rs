//! `/comments` handlers.
//!
//! Comment creation validates `text`, then `userId`, then `bookId`; the
//! first failing field decides the message.

use super::{parse_id, run_blocking};
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use bookstore_core::{CommentDto, CommentInput, CommentShortDto, EntityKind};
use std::sync::Arc;

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/comments", get(list_comments).post(create_comment))
        .route("/comments/", get(list_comments).post(create_comment))
        .route("/comments/:id", get(get_comment).delete(delete_comment))
}

async fn list_comments(
    State(state): State<AppState>,
) -> Result<Json<Vec<CommentDto>>, ApiError> {
    let service = Arc::clone(&state.comments);
    let comments = run_blocking(move || service.get_all_comments()).await?;
    Ok(Json(comments))
}

async fn get_comment(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<CommentDto>, ApiError> {
    let id = parse_id(&raw_id)?;
    let service = Arc::clone(&state.comments);
    run_blocking(move || service.get_comment_by_id(id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(EntityKind::Comment))
}

async fn create_comment(
    State(state): State<AppState>,
    body: Result<Json<CommentInput>, JsonRejection>,
) -> Result<Json<CommentShortDto>, ApiError> {
    let Json(input) = body?;
    let comment = input.validate()?;
    let service = Arc::clone(&state.comments);
    let created = run_blocking(move || service.create_comment(&comment)).await?;
    Ok(Json(created))
}

async fn delete_comment(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    let service = Arc::clone(&state.comments);
    run_blocking(move || service.delete_comment(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
