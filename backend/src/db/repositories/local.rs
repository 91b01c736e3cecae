//! In-memory repository for unit testing and local development.
//!
//! Ids are assigned from a counter that never rewinds, so a deleted id is
//! never handed out again, matching the SQLite `AUTOINCREMENT` behaviour.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::db::repository::{
    CalculationRepository, ErrorContext, RepositoryError, RepositoryResult,
};
use crate::models::{Calculation, CalculationId, NewCalculation};

#[derive(Debug, Default)]
struct LocalState {
    last_id: i64,
    records: Vec<Calculation>,
}

/// Calculation store kept entirely in process memory.
#[derive(Debug, Default)]
pub struct LocalRepository {
    state: RwLock<LocalState>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.state.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CalculationRepository for LocalRepository {
    async fn create(&self, calculation: NewCalculation) -> RepositoryResult<Calculation> {
        let mut state = self.state.write();
        state.last_id += 1;
        let record = calculation.into_calculation(CalculationId(state.last_id), Utc::now());
        state.records.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> RepositoryResult<Vec<Calculation>> {
        let mut records = self.state.read().records.clone();
        records.sort_by(|x, y| {
            y.created_at
                .cmp(&x.created_at)
                .then_with(|| y.id.cmp(&x.id))
        });
        Ok(records)
    }

    async fn get(&self, id: CalculationId) -> RepositoryResult<Calculation> {
        self.state
            .read()
            .records
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    "Calculation not found",
                    ErrorContext::new("get_calculation")
                        .with_entity("calculation")
                        .with_entity_id(id),
                )
            })
    }

    async fn delete(&self, id: CalculationId) -> RepositoryResult<usize> {
        let mut state = self.state.write();
        let before = state.records.len();
        state.records.retain(|c| c.id != id);
        Ok(before - state.records.len())
    }
}
