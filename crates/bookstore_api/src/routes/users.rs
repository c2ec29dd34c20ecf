use super::{parse_id, run_blocking};
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use bookstore_core::{EntityKind, UserDto, UserInput};
use std::sync::Arc;

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route("/users/:id", get(get_user).delete(delete_user))
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserDto>>, ApiError> {
    let service = Arc::clone(&state.users);
    let users = run_blocking(move || service.get_all_users()).await?;
    Ok(Json(users))
}

async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<UserDto>, ApiError> {
    let id = parse_id(&raw_id)?;
    let service = Arc::clone(&state.users);
    run_blocking(move || service.get_user_by_id(id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(EntityKind::User))
}

async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<UserInput>, JsonRejection>,
) -> Result<Json<UserDto>, ApiError> {
    let Json(input) = body?;
    let user = input.validate()?;
    let service = Arc::clone(&state.users);
    let created = run_blocking(move || service.create_user(&user)).await?;
    Ok(Json(created))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    let service = Arc::clone(&state.users);
    run_blocking(move || service.delete_user(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
