//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define one data access contract per entity.
//! - Keep SQL and join flattening inside the persistence boundary.
//!
//! # Invariants
//! - Each repository operation checks out exactly one pooled connection and
//!   runs one statement.
//! - Deleting a missing id is `RepoError::NotFound`, never a silent no-op.
//! - Reading a missing id is `Ok(None)`.

pub mod author_repo;
pub mod book_repo;
pub mod comment_repo;
pub mod fold;
pub mod user_repo;

use crate::db::{ConnectionPool, DbError};
use crate::model::{EntityId, EntityKind};
use log::debug;
use rusqlite::ErrorCode;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for entity persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Connection, pool or statement failure.
    Db(DbError),
    /// No row with this id exists.
    NotFound(EntityKind, EntityId),
    /// Storage rejected the write: missing referenced row, row still
    /// referenced, or NOT NULL violation.
    Constraint(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(kind, id) => write!(f, "{kind} with id = {id} not found"),
            Self::Constraint(message) => write!(f, "constraint violation: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(..) | Self::Constraint(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        match value {
            DbError::Sqlite(err) => Self::from(err),
            other => Self::Db(other),
        }
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::SqliteFailure(err, message)
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Self::Constraint(message.unwrap_or_else(|| err.to_string()))
            }
            other => Self::Db(DbError::Sqlite(other)),
        }
    }
}

/// Runs a single-parameter `DELETE` and maps zero affected rows to
/// `RepoError::NotFound`.
pub(crate) fn delete_by_id(
    pool: &ConnectionPool,
    sql: &str,
    kind: EntityKind,
    id: EntityId,
) -> RepoResult<()> {
    let conn = pool.acquire()?;
    let changed = conn.execute(sql, [id])?;
    if changed == 0 {
        debug!(
            "event=entity_delete module=repo status=not_found entity={} id={}",
            kind, id
        );
        return Err(RepoError::NotFound(kind, id));
    }
    Ok(())
}
