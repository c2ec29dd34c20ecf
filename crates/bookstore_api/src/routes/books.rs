//! `/books` handlers.

use super::{parse_id, run_blocking};
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use bookstore_core::{BookDto, BookInput, BookShortDto, EntityKind};
use std::sync::Arc;

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/", get(list_books).post(create_book))
        .route("/books/:id", get(get_book).delete(delete_book))
}

async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<BookDto>>, ApiError> {
    let service = Arc::clone(&state.books);
    let books = run_blocking(move || service.get_all_books()).await?;
    Ok(Json(books))
}

async fn get_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<BookDto>, ApiError> {
    let id = parse_id(&raw_id)?;
    let service = Arc::clone(&state.books);
    run_blocking(move || service.get_book_by_id(id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(EntityKind::Book))
}

/// Returns the short form: `bookId`, `bookTitle`, `authorId`.
async fn create_book(
    State(state): State<AppState>,
    body: Result<Json<BookInput>, JsonRejection>,
) -> Result<Json<BookShortDto>, ApiError> {
    let Json(input) = body?;
    let book = input.validate()?;
    let service = Arc::clone(&state.books);
    let created = run_blocking(move || service.create_book(&book)).await?;
    Ok(Json(created))
}

async fn delete_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    let service = Arc::clone(&state.books);
    run_blocking(move || service.delete_book(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
