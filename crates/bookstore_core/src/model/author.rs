//! Author DTOs.

use super::book::BookDto;
use super::validation::{require_text, ValidationError};
use super::{EntityId, EntityKind};
use serde::{Deserialize, Serialize};

/// Author read model, eagerly carrying the author's books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub author_id: EntityId,
    pub author_name: String,
    /// Books written by this author, ordered by `book_id`. Nested books carry
    /// only id and title.
    #[serde(default)]
    pub books: Vec<BookDto>,
}

impl AuthorDto {
    /// Author without any folded books.
    pub fn new(author_id: EntityId, author_name: impl Into<String>) -> Self {
        Self {
            author_id,
            author_name: author_name.into(),
            books: Vec::new(),
        }
    }
}

/// Raw `POST /authors` body. Every field is optional until validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorInput {
    pub author_name: Option<String>,
}

impl AuthorInput {
    pub fn validate(self) -> Result<NewAuthor, ValidationError> {
        let name = require_text(self.author_name, EntityKind::Author, "authorName")?;
        Ok(NewAuthor { name })
    }
}

/// Validated author short form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
}

impl NewAuthor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
