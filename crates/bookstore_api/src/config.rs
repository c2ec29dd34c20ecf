//! Server configuration from environment variables.
//!
//! # Responsibility
//! - Read `BOOKSTORE_*` variables, optionally seeded from a `.env` file.
//! - Reject malformed values with the offending variable name.
//!
//! # Invariants
//! - Unset variables fall back to documented defaults.
//! - A successfully loaded config is always usable by `bookstore_server`.

use bookstore_core::db::DEFAULT_POOL_SIZE;
use bookstore_core::{default_log_level, LogTarget};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

pub const BIND_ADDR_VAR: &str = "BOOKSTORE_BIND_ADDR";
pub const DB_PATH_VAR: &str = "BOOKSTORE_DB_PATH";
pub const DB_POOL_SIZE_VAR: &str = "BOOKSTORE_DB_POOL_SIZE";
pub const LOG_LEVEL_VAR: &str = "BOOKSTORE_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "BOOKSTORE_LOG_DIR";

const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080);
const DEFAULT_DB_PATH: &str = "bookstore.sqlite3";
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: &'static str,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}=`{}`: {}", self.var, self.value, self.reason)
    }
}

impl Error for ConfigError {}

/// Effective server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub db_path: PathBuf,
    pub pool_size: usize,
    pub log_level: String,
    pub log_target: LogTarget,
}

impl ServerConfig {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bind_addr = match read(BIND_ADDR_VAR) {
            Some(value) => value.parse().map_err(|_| ConfigError {
                var: BIND_ADDR_VAR,
                value,
                reason: "expected host:port socket address",
            })?,
            None => DEFAULT_BIND_ADDR,
        };

        let db_path = read(DB_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        let pool_size = match read(DB_POOL_SIZE_VAR) {
            Some(value) => match value.parse::<usize>() {
                Ok(size) if size >= 1 => size,
                _ => {
                    return Err(ConfigError {
                        var: DB_POOL_SIZE_VAR,
                        value,
                        reason: "expected an integer >= 1",
                    })
                }
            },
            None => DEFAULT_POOL_SIZE,
        };

        let log_level = match read(LOG_LEVEL_VAR) {
            Some(value) => {
                let normalized = value.to_ascii_lowercase();
                if !LOG_LEVELS.contains(&normalized.as_str()) {
                    return Err(ConfigError {
                        var: LOG_LEVEL_VAR,
                        value,
                        reason: "expected trace|debug|info|warn|error",
                    });
                }
                normalized
            }
            None => default_log_level().to_string(),
        };

        let log_target = match read(LOG_DIR_VAR) {
            Some(value) if Path::new(&value).is_absolute() => {
                LogTarget::Directory(PathBuf::from(value))
            }
            Some(value) => {
                return Err(ConfigError {
                    var: LOG_DIR_VAR,
                    value,
                    reason: "expected an absolute directory path",
                })
            }
            None => LogTarget::Stderr,
        };

        Ok(Self {
            bind_addr,
            db_path,
            pool_size,
            log_level,
            log_target,
        })
    }
}
