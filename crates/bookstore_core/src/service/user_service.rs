//! User use-case service.
//!
//! Pass-through facade over [`UserRepository`].

use crate::model::user::{NewUser, UserDto};
use crate::model::EntityId;
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for user operations.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a validated short form and returns it with its storage id.
    pub fn create_user(&self, user: &NewUser) -> RepoResult<UserDto> {
        self.repo.create_user(user)
    }

    /// Gets one user by id, `None` when absent.
    pub fn get_user_by_id(&self, id: EntityId) -> RepoResult<Option<UserDto>> {
        self.repo.get_user_by_id(id)
    }

    /// Lists all users in id order.
    pub fn get_all_users(&self) -> RepoResult<Vec<UserDto>> {
        self.repo.get_all_users()
    }

    /// Hard-deletes one user.
    ///
    /// Returns `RepoError::NotFound` when no row matched.
    pub fn delete_user(&self, id: EntityId) -> RepoResult<()> {
        self.repo.delete_user(id)
    }
}
