//! Author repository contract and SQLite implementation.
//!
//! # Invariants
//! - Author reads are eager: every author carries its books.
//! - An author without books is returned with an empty `books` list.

use super::fold::{child_id, fold_rows, RowFold};
use super::{delete_by_id, RepoResult};
use crate::db::ConnectionPool;
use crate::model::author::{AuthorDto, NewAuthor};
use crate::model::book::BookDto;
use crate::model::{EntityId, EntityKind};
use rusqlite::{params, Row};

const AUTHOR_SELECT_SQL: &str = "SELECT
    a.author_id,
    a.author_name,
    b.book_id,
    b.book_title
FROM authors a
LEFT JOIN books b ON b.author_id = a.author_id";

const AUTHOR_ORDER_SQL: &str = "ORDER BY a.author_id ASC, b.book_id ASC";

/// Repository interface for author operations.
pub trait AuthorRepository {
    fn create_author(&self, author: &NewAuthor) -> RepoResult<AuthorDto>;
    fn get_author_by_id(&self, id: EntityId) -> RepoResult<Option<AuthorDto>>;
    fn get_all_authors(&self) -> RepoResult<Vec<AuthorDto>>;
    fn delete_author(&self, id: EntityId) -> RepoResult<()>;
}

/// SQLite-backed author repository.
#[derive(Clone)]
pub struct SqliteAuthorRepository {
    pool: ConnectionPool,
}

impl SqliteAuthorRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }
}

impl AuthorRepository for SqliteAuthorRepository {
    fn create_author(&self, author: &NewAuthor) -> RepoResult<AuthorDto> {
        let conn = self.pool.acquire()?;
        conn.execute(
            "INSERT INTO authors (author_name) VALUES (?1);",
            params![author.name.as_str()],
        )?;

        Ok(AuthorDto::new(conn.last_insert_rowid(), author.name.clone()))
    }

    fn get_author_by_id(&self, id: EntityId) -> RepoResult<Option<AuthorDto>> {
        let conn = self.pool.acquire()?;
        let mut stmt = conn.prepare(&format!(
            "{AUTHOR_SELECT_SQL}
             WHERE a.author_id = ?1
             {AUTHOR_ORDER_SQL};"
        ))?;

        let authors = fold_rows(&AuthorRows, stmt.query([id])?)?;
        Ok(authors.into_first())
    }

    fn get_all_authors(&self) -> RepoResult<Vec<AuthorDto>> {
        let conn = self.pool.acquire()?;
        let mut stmt = conn.prepare(&format!("{AUTHOR_SELECT_SQL} {AUTHOR_ORDER_SQL};"))?;

        let authors = fold_rows(&AuthorRows, stmt.query([])?)?;
        Ok(authors.into_parents())
    }

    fn delete_author(&self, id: EntityId) -> RepoResult<()> {
        delete_by_id(
            &self.pool,
            "DELETE FROM authors WHERE author_id = ?1;",
            EntityKind::Author,
            id,
        )
    }
}

/// `authors LEFT JOIN books`: one row per (author, book) pair.
struct AuthorRows;

impl RowFold for AuthorRows {
    type Key = EntityId;
    type Parent = AuthorDto;

    fn parent_key(&self, row: &Row<'_>) -> rusqlite::Result<EntityId> {
        row.get("author_id")
    }

    fn build_parent(&self, row: &Row<'_>) -> rusqlite::Result<AuthorDto> {
        Ok(AuthorDto::new(
            row.get("author_id")?,
            row.get::<_, String>("author_name")?,
        ))
    }

    fn fold_row(&self, author: &mut AuthorDto, row: &Row<'_>) -> rusqlite::Result<()> {
        if let Some(book_id) = child_id(row, "book_id")? {
            author
                .books
                .push(BookDto::new(book_id, row.get::<_, String>("book_title")?));
        }
        Ok(())
    }
}
