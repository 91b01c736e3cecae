//! Domain models shared by the store, the services and the HTTP layer.

pub mod macros;
pub mod calculation;

pub use calculation::*;
