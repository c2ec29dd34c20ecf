//! Comment use-case service.

use crate::model::comment::{CommentDto, CommentShortDto, NewComment};
use crate::model::EntityId;
use crate::repo::comment_repo::CommentRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for comment operations.
pub struct CommentService<R: CommentRepository> {
    repo: R,
}

impl<R: CommentRepository> CommentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_comment(&self, comment: &NewComment) -> RepoResult<CommentShortDto> {
        self.repo.create_comment(comment)
    }

    /// Gets one comment by id, `None` when absent.
    pub fn get_comment_by_id(&self, id: EntityId) -> RepoResult<Option<CommentDto>> {
        self.repo.get_comment_by_id(id)
    }

    pub fn get_all_comments(&self) -> RepoResult<Vec<CommentDto>> {
        self.repo.get_all_comments()
    }

    /// Hard-deletes one comment.
    ///
    /// Returns `RepoError::NotFound` when no row matched.
    pub fn delete_comment(&self, id: EntityId) -> RepoResult<()> {
        self.repo.delete_comment(id)
    }
}
