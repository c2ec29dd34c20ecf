//! Bookstore DTOs and short-form request models.
//!
//! # Responsibility
//! - Define the JSON shapes exchanged at the API boundary.
//! - Turn raw client input into validated short forms.
//!
//! # Invariants
//! - Identity values (`*_id`) are assigned by storage, never by clients.
//! - Read-path collections are always present; empty means "no rows".
//! - Wire field names are camelCase.

pub mod author;
pub mod book;
pub mod comment;
pub mod user;
pub mod validation;

use std::fmt::{Display, Formatter};

/// Storage identity of any bookstore entity.
pub type EntityId = i64;

/// Entity family, used to label not-found and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Author,
    Book,
    User,
    Comment,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Author => "Author",
            Self::Book => "Book",
            Self::User => "User",
            Self::Comment => "Comment",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
