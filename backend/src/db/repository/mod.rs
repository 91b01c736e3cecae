//! Repository trait for calculation records.
//!
//! The trait is the only seam between the HTTP/service layers and storage,
//! so handlers can be exercised against the in-memory implementation or a
//! failing double in tests.

use async_trait::async_trait;

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use crate::models::{Calculation, CalculationId, NewCalculation};

/// Storage operations for calculation records.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait CalculationRepository: Send + Sync {
    /// Insert a new record.
    ///
    /// The store assigns the identity and the creation timestamp.
    ///
    /// # Returns
    /// * `Ok(Calculation)` - The fully populated record as stored
    /// * `Err(RepositoryError)` - If the insert fails
    async fn create(&self, calculation: NewCalculation) -> RepositoryResult<Calculation>;

    /// List all records, most recently created first.
    ///
    /// Records sharing a timestamp are ordered newest insertion first. An
    /// empty store yields an empty vector.
    async fn list(&self) -> RepositoryResult<Vec<Calculation>>;

    /// Fetch one record.
    ///
    /// # Returns
    /// * `Ok(Calculation)` - The record
    /// * `Err(RepositoryError::NotFound)` - If no record has this id
    async fn get(&self, id: CalculationId) -> RepositoryResult<Calculation>;

    /// Delete one record.
    ///
    /// Deleting an id that does not exist is not an error.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of rows removed (0 or 1)
    /// * `Err(RepositoryError)` - If the delete fails
    async fn delete(&self, id: CalculationId) -> RepositoryResult<usize>;
}
