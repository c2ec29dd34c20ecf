//! Route table and shared handler plumbing.

mod authors;
mod books;
mod comments;
mod health;
mod users;

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::Request;
use axum::http::{StatusCode, Uri};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use bookstore_core::{EntityId, RepoResult};
use log::info;
use std::time::Instant;

const RESOURCES: &[&str] = &["authors", "books", "users", "comments"];

/// Builds the application router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .merge(authors::routes())
        .merge(books::routes())
        .merge(users::routes())
        .merge(comments::routes())
        .fallback(unmatched)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Unknown paths under a known resource (`/authors/1/2`) are malformed ids,
/// anything else is a plain 404.
async fn unmatched(uri: Uri) -> Response {
    let resource = uri
        .path()
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default();
    if RESOURCES.contains(&resource) {
        ApiError::InvalidUrl.into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn log_request(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    info!(
        "event=http_request module=api method={} path={} http_status={} duration_ms={}",
        method,
        path,
        response.status().as_u16(),
        started_at.elapsed().as_millis()
    );
    response
}

/// Parses an id path segment: ASCII digits that fit in `i64`.
pub(crate) fn parse_id(raw: &str) -> Result<EntityId, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ApiError::InvalidUrl);
    }
    raw.parse::<EntityId>().map_err(|_| ApiError::InvalidUrl)
}

/// Runs a storage operation on the blocking thread pool.
pub(crate) async fn run_blocking<T, F>(operation: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> RepoResult<T> + Send + 'static,
{
    let result = tokio::task::spawn_blocking(operation)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;
    Ok(result?)
}

#[cfg(test)]
mod tests {
    use super::parse_id;
    use crate::error::ApiError;

    #[test]
    fn parse_id_accepts_plain_digits() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("0066").unwrap(), 66);
    }

    #[test]
    fn parse_id_rejects_non_numeric_and_overflowing_segments() {
        for raw in ["", "abc", "-1", "+1", "1.5", " 1", "99999999999999999999"] {
            assert!(
                matches!(parse_id(raw), Err(ApiError::InvalidUrl)),
                "`{raw}` should be rejected"
            );
        }
    }
}
