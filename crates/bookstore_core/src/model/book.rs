//! Book DTOs.
//!
//! A book is read either standalone (with its author and comments) or nested
//! inside an author/user graph, where only `bookId` and `bookTitle` are set.

use super::author::AuthorDto;
use super::comment::CommentDto;
use super::validation::{require_positive_id, require_text, ValidationError};
use super::{EntityId, EntityKind};
use serde::{Deserialize, Serialize};

/// Book read model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub book_id: EntityId,
    pub book_title: String,
    /// Embedded author; `None` when nested inside an author graph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorDto>,
    /// Comments on this book, each embedding its commenting user.
    #[serde(default)]
    pub comments: Vec<CommentDto>,
}

impl BookDto {
    /// Book reference without author or comments.
    pub fn new(book_id: EntityId, book_title: impl Into<String>) -> Self {
        Self {
            book_id,
            book_title: book_title.into(),
            author: None,
            comments: Vec::new(),
        }
    }
}

/// Book short form echoed back after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookShortDto {
    pub book_id: EntityId,
    pub book_title: String,
    pub author_id: EntityId,
}

/// Raw `POST /books` body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    pub book_title: Option<String>,
    pub author_id: Option<EntityId>,
}

impl BookInput {
    pub fn validate(self) -> Result<NewBook, ValidationError> {
        let title = require_text(self.book_title, EntityKind::Book, "bookTitle")?;
        let author_id = require_positive_id(self.author_id, EntityKind::Book, "authorId")?;
        Ok(NewBook { title, author_id })
    }
}

/// Validated book short form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author_id: EntityId,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author_id: EntityId) -> Self {
        Self {
            title: title.into(),
            author_id,
        }
    }
}
