//! Book repository contract and SQLite implementation.
//!
//! # Invariants
//! - Book reads embed the author and every comment with its commenting user.
//! - Books are created against an existing author; storage rejects dangling
//!   `author_id` values.

use super::fold::{child_id, fold_rows, RowFold};
use super::{delete_by_id, RepoResult};
use crate::db::ConnectionPool;
use crate::model::author::AuthorDto;
use crate::model::book::{BookDto, BookShortDto, NewBook};
use crate::model::comment::CommentDto;
use crate::model::user::UserDto;
use crate::model::{EntityId, EntityKind};
use rusqlite::{params, Row};

const BOOK_SELECT_SQL: &str = "SELECT
    b.book_id,
    b.book_title,
    a.author_id,
    a.author_name,
    c.comment_id,
    c.text AS comment_text,
    u.user_id,
    u.user_name
FROM books b
LEFT JOIN authors a ON a.author_id = b.author_id
LEFT JOIN comments c ON c.book_id = b.book_id
LEFT JOIN users u ON u.user_id = c.user_id";

const BOOK_ORDER_SQL: &str = "ORDER BY b.book_id ASC, c.comment_id ASC";

/// Repository interface for book operations.
pub trait BookRepository {
    fn create_book(&self, book: &NewBook) -> RepoResult<BookShortDto>;
    fn get_book_by_id(&self, id: EntityId) -> RepoResult<Option<BookDto>>;
    fn get_all_books(&self) -> RepoResult<Vec<BookDto>>;
    fn delete_book(&self, id: EntityId) -> RepoResult<()>;
}

/// SQLite-backed book repository.
#[derive(Clone)]
pub struct SqliteBookRepository {
    pool: ConnectionPool,
}

impl SqliteBookRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }
}

impl BookRepository for SqliteBookRepository {
    fn create_book(&self, book: &NewBook) -> RepoResult<BookShortDto> {
        let conn = self.pool.acquire()?;
        conn.execute(
            "INSERT INTO books (book_title, author_id) VALUES (?1, ?2);",
            params![book.title.as_str(), book.author_id],
        )?;

        Ok(BookShortDto {
            book_id: conn.last_insert_rowid(),
            book_title: book.title.clone(),
            author_id: book.author_id,
        })
    }

    fn get_book_by_id(&self, id: EntityId) -> RepoResult<Option<BookDto>> {
        let conn = self.pool.acquire()?;
        let mut stmt = conn.prepare(&format!(
            "{BOOK_SELECT_SQL}
             WHERE b.book_id = ?1
             {BOOK_ORDER_SQL};"
        ))?;

        let books = fold_rows(&BookRows, stmt.query([id])?)?;
        Ok(books.into_first())
    }

    fn get_all_books(&self) -> RepoResult<Vec<BookDto>> {
        let conn = self.pool.acquire()?;
        let mut stmt = conn.prepare(&format!("{BOOK_SELECT_SQL} {BOOK_ORDER_SQL};"))?;

        let books = fold_rows(&BookRows, stmt.query([])?)?;
        Ok(books.into_parents())
    }

    fn delete_book(&self, id: EntityId) -> RepoResult<()> {
        delete_by_id(
            &self.pool,
            "DELETE FROM books WHERE book_id = ?1;",
            EntityKind::Book,
            id,
        )
    }
}

/// `books LEFT JOIN authors LEFT JOIN comments LEFT JOIN users`: one row per
/// (book, comment) pair, author columns repeated on each.
struct BookRows;

impl RowFold for BookRows {
    type Key = EntityId;
    type Parent = BookDto;

    fn parent_key(&self, row: &Row<'_>) -> rusqlite::Result<EntityId> {
        row.get("book_id")
    }

    fn build_parent(&self, row: &Row<'_>) -> rusqlite::Result<BookDto> {
        let mut book = BookDto::new(row.get("book_id")?, row.get::<_, String>("book_title")?);
        if let Some(author_id) = child_id(row, "author_id")? {
            book.author = Some(AuthorDto::new(
                author_id,
                row.get::<_, String>("author_name")?,
            ));
        }
        Ok(book)
    }

    fn fold_row(&self, book: &mut BookDto, row: &Row<'_>) -> rusqlite::Result<()> {
        let Some(comment_id) = child_id(row, "comment_id")? else {
            return Ok(());
        };

        let mut comment = CommentDto::new(comment_id, row.get::<_, String>("comment_text")?);
        if let Some(user_id) = child_id(row, "user_id")? {
            comment.user = Some(UserDto::new(user_id, row.get::<_, String>("user_name")?));
        }
        book.comments.push(comment);
        Ok(())
    }
}
