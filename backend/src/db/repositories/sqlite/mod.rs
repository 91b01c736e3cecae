//! SQLite repository implementation using Diesel.
//!
//! ## Features
//!
//! - Connection pooling with r2d2
//! - Automatic migration execution
//! - `busy_timeout` applied to every pooled connection
//!
//! ## Configuration
//!
//! See [`SqliteConfig`](crate::db::SqliteConfig). An in-memory database lives
//! only as long as its connection, so for `:memory:` the pool is pinned to a
//! single connection that is never reaped.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::time::Duration;
use tokio::task;

use crate::db::config::SqliteConfig;
use crate::db::repository::{
    CalculationRepository, ErrorContext, RepositoryError, RepositoryResult,
};
use crate::models::{Calculation, CalculationId, NewCalculation, Operation};

mod models;
mod schema;

use models::*;
use schema::*;

type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("src/db/repositories/sqlite/migrations");

/// Per-connection pragmas applied when the pool opens a connection.
#[derive(Debug, Clone, Copy)]
struct ConnectionOptions {
    busy_timeout_ms: u64,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!("PRAGMA busy_timeout = {};", self.busy_timeout_ms))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Diesel-backed repository for SQLite.
#[derive(Clone, Debug)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Open (creating if needed) the database and run pending migrations.
    ///
    /// # Arguments
    /// * `config` - Database configuration
    ///
    /// # Returns
    /// * `Ok(SqliteRepository)` on success
    /// * `Err(RepositoryError)` if the database cannot be opened or migrated
    pub fn new(config: SqliteConfig) -> RepositoryResult<Self> {
        let path = config.database_path();
        let manager = ConnectionManager::<SqliteConnection>::new(path.as_str());
        let options = ConnectionOptions {
            busy_timeout_ms: config.busy_timeout_ms,
        };

        let builder = Pool::builder()
            .connection_timeout(Duration::from_secs(config.connection_timeout_sec))
            .connection_customizer(Box::new(options))
            .test_on_check_out(true);

        let builder = if config.is_in_memory() {
            builder
                .max_size(1)
                .min_idle(Some(1))
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            builder.max_size(config.max_pool_size)
        };

        let pool = builder.build(manager).map_err(|e| {
            RepositoryError::connection_with_context(
                e.to_string(),
                ErrorContext::new("create_pool").with_details(format!("database={}", path)),
            )
        })?;

        {
            let mut conn = pool
                .get()
                .map_err(|e| RepositoryError::from(e).with_operation("run_migrations"))?;
            Self::run_migrations(&mut conn)?;
        }

        log::info!("SQLite store ready at {}", path);

        Ok(Self { pool })
    }

    /// Run pending database migrations.
    fn run_migrations(conn: &mut SqliteConnection) -> RepositoryResult<()> {
        let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Migration failed: {}", e),
                ErrorContext::new("run_migrations"),
            )
        })?;

        for version in applied {
            log::debug!("Applied migration {}", version);
        }

        Ok(())
    }

    /// Run a blocking database operation on a pooled connection.
    async fn with_conn<T, F>(&self, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> RepositoryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();

        task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            f(&mut conn)
        })
        .await
        .map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Task join error: {}", e),
                ErrorContext::new("spawn_blocking"),
            )
        })?
    }
}

fn map_diesel_error(err: diesel::result::Error) -> RepositoryError {
    RepositoryError::from(err)
}

fn row_to_calculation(row: CalculationRow) -> RepositoryResult<Calculation> {
    let operation = row.operation.parse::<Operation>().map_err(|e| {
        RepositoryError::internal_with_context(
            e,
            ErrorContext::new("decode_row")
                .with_entity("calculation")
                .with_entity_id(row.id),
        )
    })?;

    Ok(Calculation {
        id: CalculationId(row.id),
        operation,
        a: row.a,
        b: row.b,
        result: row.result,
        created_at: DateTime::<Utc>::from_naive_utc_and_offset(row.created_at, Utc),
    })
}

#[async_trait]
impl CalculationRepository for SqliteRepository {
    async fn create(&self, calculation: NewCalculation) -> RepositoryResult<Calculation> {
        self.with_conn(move |conn| {
            let new_row = NewCalculationRow {
                operation: calculation.operation.as_str().to_string(),
                a: calculation.a,
                b: calculation.b,
                result: calculation.result,
                created_at: Utc::now().naive_utc(),
            };

            let inserted: CalculationRow = diesel::insert_into(calculations::table)
                .values(&new_row)
                .returning(CalculationRow::as_returning())
                .get_result(conn)
                .map_err(|e| map_diesel_error(e).with_operation("create_calculation"))?;

            row_to_calculation(inserted)
        })
        .await
    }

    async fn list(&self) -> RepositoryResult<Vec<Calculation>> {
        self.with_conn(|conn| {
            let rows = calculations::table
                .select(CalculationRow::as_select())
                .order((calculations::created_at.desc(), calculations::id.desc()))
                .load::<CalculationRow>(conn)
                .map_err(|e| map_diesel_error(e).with_operation("list_calculations"))?;

            rows.into_iter().map(row_to_calculation).collect()
        })
        .await
    }

    async fn get(&self, id: CalculationId) -> RepositoryResult<Calculation> {
        self.with_conn(move |conn| {
            let row = calculations::table
                .find(id.value())
                .select(CalculationRow::as_select())
                .first::<CalculationRow>(conn)
                .optional()
                .map_err(|e| map_diesel_error(e).with_operation("get_calculation"))?;

            match row {
                Some(row) => row_to_calculation(row),
                None => Err(RepositoryError::not_found_with_context(
                    "Calculation not found",
                    ErrorContext::new("get_calculation")
                        .with_entity("calculation")
                        .with_entity_id(id),
                )),
            }
        })
        .await
    }

    async fn delete(&self, id: CalculationId) -> RepositoryResult<usize> {
        self.with_conn(move |conn| {
            diesel::delete(calculations::table.find(id.value()))
                .execute(conn)
                .map_err(|e| map_diesel_error(e).with_operation("delete_calculation"))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_store_keeps_schema_across_calls() {
        let repo = SqliteRepository::new(SqliteConfig::in_memory()).unwrap();

        let created = repo
            .create(NewCalculation::new(Operation::Multiply, 6.0, 7.0, 42.0))
            .await
            .unwrap();
        assert!(created.id.value() > 0);

        let fetched = repo.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_row_affects_nothing() {
        let repo = SqliteRepository::new(SqliteConfig::in_memory()).unwrap();
        assert_eq!(repo.delete(CalculationId::new(999)).await.unwrap(), 0);
    }

    #[test]
    fn test_pool_checkout_failure_is_connection_error() {
        let manager = ConnectionManager::<SqliteConnection>::new("/nonexistent-dir/deeper/calc.db");
        let pool: SqlitePool = Pool::builder()
            .connection_timeout(Duration::from_millis(200))
            .build_unchecked(manager);

        let err = pool.get().err().map(RepositoryError::from).unwrap();
        assert!(matches!(err, RepositoryError::ConnectionError { .. }));
        assert_eq!(err.context().details.as_deref(), Some("pool_error"));
    }

    #[test]
    fn test_row_with_unknown_operation_is_rejected() {
        let row = CalculationRow {
            id: 5,
            operation: "modulo".to_string(),
            a: 1.0,
            b: 2.0,
            result: 1.0,
            created_at: Utc::now().naive_utc(),
        };
        let err = row_to_calculation(row).unwrap_err();
        assert!(matches!(err, RepositoryError::InternalError { .. }));
        assert_eq!(err.context().entity_id.as_deref(), Some("5"));
    }
}
