//! SQLite configuration and environment variable handling.

use std::env;

/// DSN used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "calculator.db";

/// Marker for a private in-memory database.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

/// Configuration for the SQLite store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteConfig {
    /// File path, `:memory:`, or a `sqlite://` URL
    pub database_url: String,
    /// Maximum number of pooled connections (ignored for in-memory databases)
    pub max_pool_size: u32,
    /// How long SQLite waits on a locked database before failing, in milliseconds
    pub busy_timeout_ms: u64,
    /// Pool checkout timeout in seconds
    pub connection_timeout_sec: u64,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_pool_size: 8,
            busy_timeout_ms: 5000,
            connection_timeout_sec: 30,
        }
    }
}

impl SqliteConfig {
    /// Create configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to their defaults.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL`: Database path or URL (default: `calculator.db`)
    /// - `SQLITE_POOL_MAX`: Maximum pool size (default: 8)
    /// - `SQLITE_BUSY_TIMEOUT_MS`: Lock wait in milliseconds (default: 5000)
    /// - `SQLITE_CONN_TIMEOUT_SEC`: Pool checkout timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.database_url);

        let max_pool_size = env::var("SQLITE_POOL_MAX")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(defaults.max_pool_size);

        let busy_timeout_ms = env::var("SQLITE_BUSY_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults.busy_timeout_ms);

        let connection_timeout_sec = env::var("SQLITE_CONN_TIMEOUT_SEC")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(defaults.connection_timeout_sec);

        Self {
            database_url,
            max_pool_size,
            busy_timeout_ms,
            connection_timeout_sec,
        }
    }

    /// Create a new configuration with a database URL.
    pub fn with_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Default::default()
        }
    }

    /// Configuration for a private in-memory database.
    pub fn in_memory() -> Self {
        Self::with_url(IN_MEMORY_DATABASE)
    }

    /// The path handed to SQLite.
    ///
    /// Accepts SQLAlchemy-style URLs: `sqlite:///calculator.db` is the
    /// relative path `calculator.db`, `sqlite:////var/lib/calc.db` is absolute,
    /// and a bare `sqlite://` is an in-memory database.
    pub fn database_path(&self) -> String {
        let url = self.database_url.trim();
        let Some(rest) = url.strip_prefix("sqlite://") else {
            return url.to_string();
        };

        let path = rest.strip_prefix('/').unwrap_or(rest);
        if path.is_empty() {
            IN_MEMORY_DATABASE.to_string()
        } else {
            path.to_string()
        }
    }

    /// Whether this configuration points at an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.database_path() == IN_MEMORY_DATABASE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paths_pass_through() {
        assert_eq!(SqliteConfig::with_url("calc.db").database_path(), "calc.db");
        assert_eq!(
            SqliteConfig::with_url("/tmp/calc.db").database_path(),
            "/tmp/calc.db"
        );
        assert!(SqliteConfig::in_memory().is_in_memory());
    }

    #[test]
    fn test_sqlite_urls_are_normalized() {
        assert_eq!(
            SqliteConfig::with_url("sqlite:///calculator.db").database_path(),
            "calculator.db"
        );
        assert_eq!(
            SqliteConfig::with_url("sqlite:////var/lib/calc.db").database_path(),
            "/var/lib/calc.db"
        );
        assert!(SqliteConfig::with_url("sqlite://").is_in_memory());
        assert!(SqliteConfig::with_url("sqlite:///:memory:").is_in_memory());
    }

    #[test]
    fn test_defaults() {
        let config = SqliteConfig::default();
        assert_eq!(config.database_url, "calculator.db");
        assert_eq!(config.max_pool_size, 8);
        assert_eq!(config.busy_timeout_ms, 5000);
        assert_eq!(config.connection_timeout_sec, 30);
        assert!(!config.is_in_memory());
    }
}
