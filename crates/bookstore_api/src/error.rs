//! Boundary error and its HTTP mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bookstore_core::{EntityKind, RepoError, ValidationError};
use log::{error, warn};
use serde_json::json;
use std::error::Error;
use std::fmt::{Display, Formatter};

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error returned by request handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Id path segment is not a non-negative 64-bit integer.
    InvalidUrl,
    /// Body is not JSON or does not match the input shape.
    InvalidBody(String),
    Validation(ValidationError),
    /// Read of a missing id.
    NotFound(EntityKind),
    Repo(RepoError),
    /// Blocking task failed to complete.
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidUrl | Self::InvalidBody(_) | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Repo(RepoError::NotFound(..)) => StatusCode::NOT_FOUND,
            Self::Repo(RepoError::Constraint(_)) => StatusCode::CONFLICT,
            Self::Repo(RepoError::Db(_)) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response body.
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidUrl => "Invalid URL".to_string(),
            Self::InvalidBody(_) => "Invalid request body".to_string(),
            Self::Validation(err) => err.to_string(),
            Self::NotFound(kind) => format!("{kind} not found"),
            Self::Repo(err @ RepoError::NotFound(..)) => err.to_string(),
            Self::Repo(RepoError::Constraint(_)) => {
                "Operation violates a reference between entities".to_string()
            }
            Self::Repo(RepoError::Db(_)) | Self::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUrl => write!(f, "invalid id path segment"),
            Self::InvalidBody(detail) => write!(f, "invalid request body: {detail}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(kind) => write!(f, "{kind} not found"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Internal(detail) => write!(f, "internal error: {detail}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::InvalidBody(value.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(
                "event=request_failed module=api status=error http_status={} error={}",
                status.as_u16(),
                self
            );
        } else {
            warn!(
                "event=request_rejected module=api status=error http_status={} error={}",
                status.as_u16(),
                self
            );
        }

        (status, Json(json!({ "error": self.client_message() }))).into_response()
    }
}
