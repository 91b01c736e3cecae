//! Data Transfer Objects for the HTTP API.
//!
//! Stored records are returned as [`Calculation`] directly since it already
//! derives Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::models::Calculation;

/// Request body for the arithmetic endpoints.
///
/// Both operands are required; `0` is a valid value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperandsRequest {
    pub a: f64,
    pub b: f64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
