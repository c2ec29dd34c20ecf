//! Core domain logic for the bookstore service.
//! Owns the schema, entity DTOs, validation, repositories and services.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, ConnectionPool, DbError, DbResult, PooledConnection};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::author::{AuthorDto, AuthorInput, NewAuthor};
pub use model::book::{BookDto, BookInput, BookShortDto, NewBook};
pub use model::comment::{CommentDto, CommentInput, CommentShortDto, NewComment};
pub use model::user::{NewUser, UserDto, UserInput};
pub use model::validation::ValidationError;
pub use model::{EntityId, EntityKind};
pub use repo::author_repo::{AuthorRepository, SqliteAuthorRepository};
pub use repo::book_repo::{BookRepository, SqliteBookRepository};
pub use repo::comment_repo::{CommentRepository, SqliteCommentRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use service::author_service::AuthorService;
pub use service::book_service::BookService;
pub use service::comment_service::CommentService;
pub use service::user_service::UserService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
