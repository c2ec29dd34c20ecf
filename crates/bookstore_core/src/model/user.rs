//! User DTOs.

use super::book::BookDto;
use super::comment::CommentDto;
use super::validation::{require_text, ValidationError};
use super::{EntityId, EntityKind};
use serde::{Deserialize, Serialize};

/// User read model with authored comments and the books they review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub user_id: EntityId,
    pub user_name: String,
    #[serde(default)]
    pub comments: Vec<CommentDto>,
    /// Distinct books this user commented on, in first-comment order.
    #[serde(default)]
    pub reviewed_books: Vec<BookDto>,
}

impl UserDto {
    pub fn new(user_id: EntityId, user_name: impl Into<String>) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
            comments: Vec::new(),
            reviewed_books: Vec::new(),
        }
    }
}

/// Raw `POST /users` body. Accepts `userName` as an alias of `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserInput {
    #[serde(alias = "userName")]
    pub name: Option<String>,
}

impl UserInput {
    pub fn validate(self) -> Result<NewUser, ValidationError> {
        let name = require_text(self.name, EntityKind::User, "userName")?;
        Ok(NewUser { name })
    }
}

/// Validated user short form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
