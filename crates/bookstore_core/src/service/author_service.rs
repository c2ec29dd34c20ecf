//! Author use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for author callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Inputs are already validated short forms; no re-validation happens here.
//! - Service layer remains storage-agnostic.

use crate::model::author::{AuthorDto, NewAuthor};
use crate::model::EntityId;
use crate::repo::author_repo::AuthorRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for author operations.
pub struct AuthorService<R: AuthorRepository> {
    repo: R,
}

impl<R: AuthorRepository> AuthorService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a validated short form and returns it with its storage id.
    pub fn create_author(&self, author: &NewAuthor) -> RepoResult<AuthorDto> {
        self.repo.create_author(author)
    }

    /// Gets one author by id, `None` when absent.
    pub fn get_author_by_id(&self, id: EntityId) -> RepoResult<Option<AuthorDto>> {
        self.repo.get_author_by_id(id)
    }

    /// Lists all authors in id order.
    pub fn get_all_authors(&self) -> RepoResult<Vec<AuthorDto>> {
        self.repo.get_all_authors()
    }

    /// Hard-deletes one author.
    ///
    /// Returns `RepoError::NotFound` when no row matched.
    pub fn delete_author(&self, id: EntityId) -> RepoResult<()> {
        self.repo.delete_author(id)
    }
}
