//! Book use-case service.

use crate::model::book::{BookDto, BookShortDto, NewBook};
use crate::model::EntityId;
use crate::repo::book_repo::BookRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for book operations.
pub struct BookService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> BookService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_book(&self, book: &NewBook) -> RepoResult<BookShortDto> {
        self.repo.create_book(book)
    }

    /// Gets one book by id, `None` when absent.
    pub fn get_book_by_id(&self, id: EntityId) -> RepoResult<Option<BookDto>> {
        self.repo.get_book_by_id(id)
    }

    pub fn get_all_books(&self) -> RepoResult<Vec<BookDto>> {
        self.repo.get_all_books()
    }

    /// Hard-deletes one book.
    ///
    /// Returns `RepoError::NotFound` when no row matched.
    pub fn delete_book(&self, id: EntityId) -> RepoResult<()> {
        self.repo.delete_book(id)
    }
}
