//! Shared handler state.

use bookstore_core::{
    AuthorService, BookService, CommentService, ConnectionPool, SqliteAuthorRepository,
    SqliteBookRepository, SqliteCommentRepository, SqliteUserRepository, UserService,
};
use std::sync::Arc;

pub type SharedAuthorService = Arc<AuthorService<SqliteAuthorRepository>>;
pub type SharedBookService = Arc<BookService<SqliteBookRepository>>;
pub type SharedUserService = Arc<UserService<SqliteUserRepository>>;
pub type SharedCommentService = Arc<CommentService<SqliteCommentRepository>>;

/// Entity services wired over one connection pool.
#[derive(Clone)]
pub struct AppState {
    pub authors: SharedAuthorService,
    pub books: SharedBookService,
    pub users: SharedUserService,
    pub comments: SharedCommentService,
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        Self {
            authors: Arc::new(AuthorService::new(SqliteAuthorRepository::new(pool.clone()))),
            books: Arc::new(BookService::new(SqliteBookRepository::new(pool.clone()))),
            users: Arc::new(UserService::new(SqliteUserRepository::new(pool.clone()))),
            comments: Arc::new(CommentService::new(SqliteCommentRepository::new(pool))),
        }
    }
}
