//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP handlers and the repository: they run the
//! arithmetic and decide what, if anything, reaches the store.

pub mod calculations;

pub use calculations::{
    delete_calculation, get_calculation, list_calculations, record_calculation, CalculationError,
};
