//! Comment repository contract and SQLite implementation.
//!
//! Comments are leaves of the graph: each row is one comment embedding its
//! user and book, so the fold only deduplicates by `comment_id`.

use super::fold::{child_id, fold_rows, RowFold};
use super::{delete_by_id, RepoResult};
use crate::db::ConnectionPool;
use crate::model::book::BookDto;
use crate::model::comment::{CommentDto, CommentShortDto, NewComment};
use crate::model::user::UserDto;
use crate::model::{EntityId, EntityKind};
use rusqlite::{params, Row};

const COMMENT_SELECT_SQL: &str = "SELECT
    c.comment_id,
    c.text,
    u.user_id,
    u.user_name,
    b.book_id,
    b.book_title
FROM comments c
LEFT JOIN users u ON u.user_id = c.user_id
LEFT JOIN books b ON b.book_id = c.book_id";

/// Repository interface for comment operations.
pub trait CommentRepository {
    fn create_comment(&self, comment: &NewComment) -> RepoResult<CommentShortDto>;
    fn get_comment_by_id(&self, id: EntityId) -> RepoResult<Option<CommentDto>>;
    fn get_all_comments(&self) -> RepoResult<Vec<CommentDto>>;
    fn delete_comment(&self, id: EntityId) -> RepoResult<()>;
}

/// SQLite-backed comment repository.
#[derive(Clone)]
pub struct SqliteCommentRepository {
    pool: ConnectionPool,
}

impl SqliteCommentRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }
}

impl CommentRepository for SqliteCommentRepository {
    fn create_comment(&self, comment: &NewComment) -> RepoResult<CommentShortDto> {
        let conn = self.pool.acquire()?;
        conn.execute(
            "INSERT INTO comments (user_id, book_id, text) VALUES (?1, ?2, ?3);",
            params![comment.user_id, comment.book_id, comment.text.as_str()],
        )?;

        Ok(CommentShortDto {
            comment_id: conn.last_insert_rowid(),
            user_id: comment.user_id,
            book_id: comment.book_id,
            text: comment.text.clone(),
        })
    }

    fn get_comment_by_id(&self, id: EntityId) -> RepoResult<Option<CommentDto>> {
        let conn = self.pool.acquire()?;
        let mut stmt = conn.prepare(&format!(
            "{COMMENT_SELECT_SQL}
             WHERE c.comment_id = ?1;"
        ))?;

        let comments = fold_rows(&CommentRows, stmt.query([id])?)?;
        Ok(comments.into_first())
    }

    fn get_all_comments(&self) -> RepoResult<Vec<CommentDto>> {
        let conn = self.pool.acquire()?;
        let mut stmt = conn.prepare(&format!(
            "{COMMENT_SELECT_SQL} ORDER BY c.comment_id ASC;"
        ))?;

        let comments = fold_rows(&CommentRows, stmt.query([])?)?;
        Ok(comments.into_parents())
    }

    fn delete_comment(&self, id: EntityId) -> RepoResult<()> {
        delete_by_id(
            &self.pool,
            "DELETE FROM comments WHERE comment_id = ?1;",
            EntityKind::Comment,
            id,
        )
    }
}

struct CommentRows;

impl RowFold for CommentRows {
    type Key = EntityId;
    type Parent = CommentDto;

    fn parent_key(&self, row: &Row<'_>) -> rusqlite::Result<EntityId> {
        row.get("comment_id")
    }

    fn build_parent(&self, row: &Row<'_>) -> rusqlite::Result<CommentDto> {
        let mut comment = CommentDto::new(row.get("comment_id")?, row.get::<_, String>("text")?);
        if let Some(user_id) = child_id(row, "user_id")? {
            comment.user = Some(UserDto::new(user_id, row.get::<_, String>("user_name")?));
        }
        if let Some(book_id) = child_id(row, "book_id")? {
            comment.book = Some(BookDto::new(book_id, row.get::<_, String>("book_title")?));
        }
        Ok(comment)
    }

    /// Comments carry no child collection; the parent row holds everything.
    fn fold_row(&self, _comment: &mut CommentDto, _row: &Row<'_>) -> rusqlite::Result<()> {
        Ok(())
    }
}
