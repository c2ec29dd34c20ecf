//! Pooled SQLite connections on top of `r2d2`.
//!
//! # Responsibility
//! - Own every connection used by repositories.
//! - Bootstrap each new connection (pragmas + schema) before it is lent.
//! - Lend one connection per data operation through a scoped guard.
//!
//! # Invariants
//! - A lent connection returns to the pool when its guard drops, on success
//!   and error paths alike.
//! - The acquire timeout is fixed at build time and shared by every clone.
//! - In-memory pools hold exactly one connection that is never recycled:
//!   SQLite in-memory databases are private to the connection that created
//!   them.

use super::open::bootstrap_connection;
use super::{open_db, DbError, DbResult};
use log::{debug, info, warn};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

pub const DEFAULT_POOL_SIZE: usize = 4;
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection lent by [`ConnectionPool::acquire`].
///
/// Dereferences to [`rusqlite::Connection`].
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Cloneable handle to a shared set of SQLite connections.
#[derive(Clone)]
pub struct ConnectionPool {
    inner: Pool<SqliteConnectionManager>,
    acquire_timeout: Duration,
}

impl ConnectionPool {
    /// Opens a pool of up to `size` connections to the database file at
    /// `path`, with the default acquire timeout.
    pub fn open(path: impl AsRef<Path>, size: usize) -> DbResult<Self> {
        Self::open_with_timeout(path, size, DEFAULT_ACQUIRE_TIMEOUT)
    }

    /// Opens a file-backed pool whose checkouts give up after
    /// `acquire_timeout`.
    ///
    /// # Errors
    /// - `DbError::EmptyPool` for `size == 0`.
    /// - `DbError::UnsupportedSchemaVersion` when the file was written by a
    ///   newer schema.
    pub fn open_with_timeout(
        path: impl AsRef<Path>,
        size: usize,
        acquire_timeout: Duration,
    ) -> DbResult<Self> {
        if size == 0 {
            return Err(DbError::EmptyPool);
        }
        let path = path.as_ref();

        // Migrates once up front; schema errors keep their own variant.
        drop(open_db(path)?);

        let manager = SqliteConnectionManager::file(path).with_init(init_connection);
        let inner = Pool::builder()
            .max_size(u32::try_from(size).unwrap_or(u32::MAX))
            .connection_timeout(acquire_timeout)
            .build(manager)?;

        info!(
            "event=pool_open module=db status=ok mode=file size={} path={}",
            size,
            path.display()
        );
        Ok(Self {
            inner,
            acquire_timeout,
        })
    }

    /// Opens a single-connection pool over a fresh in-memory database.
    pub fn in_memory() -> DbResult<Self> {
        Self::in_memory_with_timeout(DEFAULT_ACQUIRE_TIMEOUT)
    }

    /// In-memory pool whose checkouts give up after `acquire_timeout`.
    pub fn in_memory_with_timeout(acquire_timeout: Duration) -> DbResult<Self> {
        let manager = SqliteConnectionManager::memory().with_init(init_connection);
        let inner = Pool::builder()
            .max_size(1)
            .min_idle(Some(1))
            .idle_timeout(None)
            .max_lifetime(None)
            .connection_timeout(acquire_timeout)
            .build(manager)?;

        info!("event=pool_open module=db status=ok mode=memory size=1");
        Ok(Self {
            inner,
            acquire_timeout,
        })
    }

    /// Maximum number of connections owned by this pool.
    pub fn size(&self) -> usize {
        self.inner.max_size() as usize
    }

    /// Number of connections currently not lent out.
    pub fn idle_count(&self) -> usize {
        self.inner.state().idle_connections as usize
    }

    pub fn acquire_timeout(&self) -> Duration {
        self.acquire_timeout
    }

    /// Checks out one connection, blocking until one is idle.
    ///
    /// # Errors
    /// - `DbError::PoolTimeout` when nothing is returned within the acquire
    ///   timeout.
    pub fn acquire(&self) -> DbResult<PooledConnection> {
        let started_at = Instant::now();
        match self.inner.get() {
            Ok(conn) => {
                debug!(
                    "event=pool_acquire module=db status=ok wait_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(conn)
            }
            Err(err) => {
                warn!(
                    "event=pool_acquire module=db status=error error_code=pool_timeout wait_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(DbError::PoolTimeout(self.acquire_timeout))
            }
        }
    }
}

fn init_connection(conn: &mut Connection) -> rusqlite::Result<()> {
    bootstrap_connection(conn).map_err(|err| match err {
        DbError::Sqlite(err) => err,
        other => rusqlite::Error::UserFunctionError(Box::new(other)),
    })
}
