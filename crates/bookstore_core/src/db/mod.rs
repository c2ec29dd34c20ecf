//! SQLite storage bootstrap, schema and connection pooling.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the bookstore.
//! - Apply the embedded schema in deterministic order.
//! - Hand out pooled connections scoped to a single data operation.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Every connection handed out has `foreign_keys=ON` and a migrated schema.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

pub mod migrations;
mod open;
mod pool;

pub use open::{open_db, open_db_in_memory};
pub use pool::{ConnectionPool, PooledConnection, DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_POOL_SIZE};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// Pool could not be built with its initial connections.
    Pool(r2d2::Error),
    /// No pooled connection became idle within the acquire timeout.
    PoolTimeout(Duration),
    /// Pool was configured with zero connections.
    EmptyPool,
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::Pool(err) => write!(f, "failed to build connection pool: {err}"),
            Self::PoolTimeout(waited) => write!(
                f,
                "timed out after {}ms waiting for a pooled connection",
                waited.as_millis()
            ),
            Self::EmptyPool => write!(f, "connection pool size must be at least 1"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Pool(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
            Self::PoolTimeout(_) => None,
            Self::EmptyPool => None,
        }
    }
}

impl From<r2d2::Error> for DbError {
    fn from(value: r2d2::Error) -> Self {
        Self::Pool(value)
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
