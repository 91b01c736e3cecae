//! Calculation workflow: evaluate an operation, then persist the result.

use crate::algorithms::{evaluate, ArithmeticError};
use crate::db::repository::{CalculationRepository, RepositoryError, RepositoryResult};
use crate::models::{Calculation, CalculationId, NewCalculation, Operation};

/// Failure of [`record_calculation`].
#[derive(Debug, thiserror::Error)]
pub enum CalculationError {
    /// The operation itself failed; nothing was stored.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    /// The result was computed but could not be stored; it is discarded.
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

/// Evaluate `operation` on `(a, b)` and store the outcome.
///
/// The store is only touched when the arithmetic succeeds, and a storage
/// failure is not retried.
pub async fn record_calculation(
    repo: &dyn CalculationRepository,
    operation: Operation,
    a: f64,
    b: f64,
) -> Result<Calculation, CalculationError> {
    let result = evaluate(operation, a, b)?;
    let calculation = repo
        .create(NewCalculation::new(operation, a, b, result))
        .await?;
    Ok(calculation)
}

/// All stored calculations, most recent first.
pub async fn list_calculations(
    repo: &dyn CalculationRepository,
) -> RepositoryResult<Vec<Calculation>> {
    repo.list().await
}

pub async fn get_calculation(
    repo: &dyn CalculationRepository,
    id: CalculationId,
) -> RepositoryResult<Calculation> {
    repo.get(id).await
}

/// Delete a calculation, returning how many rows were removed.
pub async fn delete_calculation(
    repo: &dyn CalculationRepository,
    id: CalculationId,
) -> RepositoryResult<usize> {
    repo.delete(id).await
}
