//! User repository contract and SQLite implementation.
//!
//! # Invariants
//! - User reads carry authored comments and the books they review.
//! - `reviewed_books` gains one entry per comment row, so a book commented on
//!   twice is listed twice.

use super::fold::{child_id, fold_rows, RowFold};
use super::{delete_by_id, RepoResult};
use crate::db::ConnectionPool;
use crate::model::book::BookDto;
use crate::model::comment::CommentDto;
use crate::model::user::{NewUser, UserDto};
use crate::model::{EntityId, EntityKind};
use rusqlite::{params, Row};

const USER_SELECT_SQL: &str = "SELECT
    u.user_id,
    u.user_name,
    c.comment_id,
    c.text AS comment_text,
    b.book_id,
    b.book_title
FROM users u
LEFT JOIN comments c ON c.user_id = u.user_id
LEFT JOIN books b ON b.book_id = c.book_id";

const USER_ORDER_SQL: &str = "ORDER BY u.user_id ASC, c.comment_id ASC";

/// Repository interface for user operations.
pub trait UserRepository {
    fn create_user(&self, user: &NewUser) -> RepoResult<UserDto>;
    fn get_user_by_id(&self, id: EntityId) -> RepoResult<Option<UserDto>>;
    fn get_all_users(&self) -> RepoResult<Vec<UserDto>>;
    fn delete_user(&self, id: EntityId) -> RepoResult<()>;
}

/// SQLite-backed user repository.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: ConnectionPool,
}

impl SqliteUserRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn create_user(&self, user: &NewUser) -> RepoResult<UserDto> {
        let conn = self.pool.acquire()?;
        conn.execute(
            "INSERT INTO users (user_name) VALUES (?1);",
            params![user.name.as_str()],
        )?;

        Ok(UserDto::new(conn.last_insert_rowid(), user.name.clone()))
    }

    fn get_user_by_id(&self, id: EntityId) -> RepoResult<Option<UserDto>> {
        let conn = self.pool.acquire()?;
        let mut stmt = conn.prepare(&format!(
            "{USER_SELECT_SQL}
             WHERE u.user_id = ?1
             {USER_ORDER_SQL};"
        ))?;

        let users = fold_rows(&UserRows, stmt.query([id])?)?;
        Ok(users.into_first())
    }

    fn get_all_users(&self) -> RepoResult<Vec<UserDto>> {
        let conn = self.pool.acquire()?;
        let mut stmt = conn.prepare(&format!("{USER_SELECT_SQL} {USER_ORDER_SQL};"))?;

        let users = fold_rows(&UserRows, stmt.query([])?)?;
        Ok(users.into_parents())
    }

    fn delete_user(&self, id: EntityId) -> RepoResult<()> {
        delete_by_id(
            &self.pool,
            "DELETE FROM users WHERE user_id = ?1;",
            EntityKind::User,
            id,
        )
    }
}

/// `users LEFT JOIN comments LEFT JOIN books`: one row per (user, comment)
/// pair, the reviewed book riding along on the comment row.
struct UserRows;

impl RowFold for UserRows {
    type Key = EntityId;
    type Parent = UserDto;

    fn parent_key(&self, row: &Row<'_>) -> rusqlite::Result<EntityId> {
        row.get("user_id")
    }

    fn build_parent(&self, row: &Row<'_>) -> rusqlite::Result<UserDto> {
        Ok(UserDto::new(
            row.get("user_id")?,
            row.get::<_, String>("user_name")?,
        ))
    }

    fn fold_row(&self, user: &mut UserDto, row: &Row<'_>) -> rusqlite::Result<()> {
        if let Some(comment_id) = child_id(row, "comment_id")? {
            user.comments.push(CommentDto::new(
                comment_id,
                row.get::<_, String>("comment_text")?,
            ));
        }

        if let Some(book_id) = child_id(row, "book_id")? {
            user.reviewed_books
                .push(BookDto::new(book_id, row.get::<_, String>("book_title")?));
        }
        Ok(())
    }
}
