//! Comment DTOs.

use super::book::BookDto;
use super::user::UserDto;
use super::validation::{require_positive_id, require_text, ValidationError};
use super::{EntityId, EntityKind};
use serde::{Deserialize, Serialize};

/// Comment read model.
///
/// `user` and `book` are embedded on standalone reads. Inside a book graph
/// only `user` is set; inside a user graph neither is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub comment_id: EntityId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<BookDto>,
}

impl CommentDto {
    pub fn new(comment_id: EntityId, text: impl Into<String>) -> Self {
        Self {
            comment_id,
            text: text.into(),
            user: None,
            book: None,
        }
    }
}

/// Comment short form echoed back after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentShortDto {
    pub comment_id: EntityId,
    pub user_id: EntityId,
    pub book_id: EntityId,
    pub text: String,
}

/// Raw `POST /comments` body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentInput {
    pub text: Option<String>,
    pub user_id: Option<EntityId>,
    pub book_id: Option<EntityId>,
}

impl CommentInput {
    pub fn validate(self) -> Result<NewComment, ValidationError> {
        let text = require_text(self.text, EntityKind::Comment, "text")?;
        let user_id = require_positive_id(self.user_id, EntityKind::Comment, "userId")?;
        let book_id = require_positive_id(self.book_id, EntityKind::Comment, "bookId")?;
        Ok(NewComment {
            text,
            user_id,
            book_id,
        })
    }
}

/// Validated comment short form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub text: String,
    pub user_id: EntityId,
    pub book_id: EntityId,
}

impl NewComment {
    pub fn new(text: impl Into<String>, user_id: EntityId, book_id: EntityId) -> Self {
        Self {
            text: text.into(),
            user_id,
            book_id,
        }
    }
}
