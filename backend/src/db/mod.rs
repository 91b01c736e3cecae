//! Database module for calculation storage.
//!
//! This module provides abstractions for database operations via the Repository pattern,
//! allowing different storage backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Service Layer (services/) - compute, then persist      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!          ┌──────────┴───────────┐
//!          │                      │
//! ┌────────▼─────────┐   ┌────────▼─────────┐
//! │ SqliteRepository │   │ LocalRepository  │
//! │ (diesel + r2d2)  │   │ (in-memory)      │
//! └──────────────────┘   └──────────────────┘
//! ```
//!
//! The module includes:
//! - `repository`: Trait definition and error types
//! - `repositories::sqlite`: SQLite implementation with Diesel ORM
//! - `repositories::local`: In-memory implementation for unit testing and local development
//! - `factory`: Factory for creating repository instances
//! - `config` / `repo_config`: Environment and TOML configuration
//!
//! There is no process-wide repository handle: the binary builds one with
//! [`RepositoryFactory`] and passes it to the HTTP state explicitly.

pub mod config;
pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;

pub use config::SqliteConfig;
pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
#[cfg(feature = "sqlite-repo")]
pub use repositories::SqliteRepository;
pub use repository::{CalculationRepository, ErrorContext, RepositoryError, RepositoryResult};
