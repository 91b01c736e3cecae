//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating and configuring repository instances
//! based on runtime configuration.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::config::SqliteConfig;
use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
#[cfg(feature = "sqlite-repo")]
use super::repositories::SqliteRepository;
use super::repository::{CalculationRepository, RepositoryError, RepositoryResult};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// SQLite + Diesel implementation
    Sqlite,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("sqlite", "local", "memory")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from the `REPOSITORY_TYPE` environment variable.
    ///
    /// Defaults to SQLite when unset or unrecognised.
    pub fn from_env() -> Self {
        std::env::var("REPOSITORY_TYPE")
            .ok()
            .and_then(|val| val.parse().ok())
            .unwrap_or(Self::Sqlite)
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```ignore
/// use calculator_rust::db::{RepositoryFactory, RepositoryType, SqliteConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = SqliteConfig::from_env();
///     let repo = RepositoryFactory::create(RepositoryType::Sqlite, Some(&config)).await?;
///     let local_repo = RepositoryFactory::create_local();
///     Ok(())
/// }
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Arguments
    /// * `repo_type` - Type of repository to create
    /// * `sqlite_config` - Optional SQLite configuration (defaults apply when absent)
    pub async fn create(
        repo_type: RepositoryType,
        sqlite_config: Option<&SqliteConfig>,
    ) -> RepositoryResult<Arc<dyn CalculationRepository>> {
        match repo_type {
            RepositoryType::Sqlite => {
                let config = sqlite_config.cloned().unwrap_or_default();
                Self::create_sqlite_dyn(config).await
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create a SQLite repository, running migrations.
    #[cfg(feature = "sqlite-repo")]
    pub async fn create_sqlite(config: &SqliteConfig) -> RepositoryResult<Arc<SqliteRepository>> {
        let config = config.clone();
        let repo = tokio::task::spawn_blocking(move || SqliteRepository::new(config))
            .await
            .map_err(|e| RepositoryError::internal(format!("Task join error: {}", e)))??;
        Ok(Arc::new(repo))
    }

    #[cfg(feature = "sqlite-repo")]
    async fn create_sqlite_dyn(
        config: SqliteConfig,
    ) -> RepositoryResult<Arc<dyn CalculationRepository>> {
        let repo = Self::create_sqlite(&config).await?;
        Ok(repo as Arc<dyn CalculationRepository>)
    }

    #[cfg(not(feature = "sqlite-repo"))]
    async fn create_sqlite_dyn(
        _config: SqliteConfig,
    ) -> RepositoryResult<Arc<dyn CalculationRepository>> {
        Err(RepositoryError::configuration(
            "SQLite repository feature not enabled",
        ))
    }

    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn CalculationRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create repository from environment configuration.
    ///
    /// When `REPOSITORY_CONFIG` names a TOML file it wins; otherwise
    /// `REPOSITORY_TYPE` selects the backend and SQLite settings come from
    /// [`SqliteConfig::from_env`].
    pub async fn from_env() -> RepositoryResult<Arc<dyn CalculationRepository>> {
        if let Some(path) = std::env::var("REPOSITORY_CONFIG")
            .ok()
            .filter(|p| !p.trim().is_empty())
        {
            return Self::from_config_file(path).await;
        }

        let repo_type = RepositoryType::from_env();
        let config = SqliteConfig::from_env();
        Self::create(repo_type, Some(&config)).await
    }

    /// Create repository from a TOML configuration file.
    ///
    /// # Arguments
    /// * `config_path` - Path to the repository.toml configuration file
    pub async fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn CalculationRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_repository_config(&config).await
    }

    /// Create repository from a RepositoryConfig instance.
    pub async fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn CalculationRepository>> {
        let repo_type = config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;
        let sqlite_config = config.to_sqlite_config();
        Self::create(repo_type, Some(&sqlite_config)).await
    }
}
