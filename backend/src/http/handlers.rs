//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use super::dto::{HealthResponse, OperandsRequest};
use super::error::AppError;
use super::state::AppState;
use crate::models::{Calculation, CalculationId, Operation};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Result type for the arithmetic endpoints (`201 Created` plus the record).
pub type CreatedResult<T> = Result<(StatusCode, Json<T>), AppError>;

/// JSON body as seen by a handler, rejection included, so decode failures
/// can be rendered in the common error shape.
pub type JsonBody<T> = Result<Json<T>, JsonRejection>;

/// Raw `{id}` path segment; undecodable segments are reported as a bad id.
pub type IdPath = Result<Path<String>, PathRejection>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Always healthy; does not touch the store.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Arithmetic
// =============================================================================

/// POST /add
pub async fn add(
    State(state): State<AppState>,
    body: JsonBody<OperandsRequest>,
) -> CreatedResult<Calculation> {
    calculate(&state, Operation::Add, body).await
}

/// POST /subtract
pub async fn subtract(
    State(state): State<AppState>,
    body: JsonBody<OperandsRequest>,
) -> CreatedResult<Calculation> {
    calculate(&state, Operation::Subtract, body).await
}

/// POST /multiply
pub async fn multiply(
    State(state): State<AppState>,
    body: JsonBody<OperandsRequest>,
) -> CreatedResult<Calculation> {
    calculate(&state, Operation::Multiply, body).await
}

/// POST /divide
///
/// A zero divisor is answered with 400 and nothing is stored.
pub async fn divide(
    State(state): State<AppState>,
    body: JsonBody<OperandsRequest>,
) -> CreatedResult<Calculation> {
    calculate(&state, Operation::Divide, body).await
}

/// Decode, compute, persist, respond.
async fn calculate(
    state: &AppState,
    operation: Operation,
    body: JsonBody<OperandsRequest>,
) -> CreatedResult<Calculation> {
    let Json(OperandsRequest { a, b }) = body?;

    let calculation =
        services::record_calculation(state.repository.as_ref(), operation, a, b).await?;

    tracing::debug!(
        id = %calculation.id,
        operation = %operation,
        result = calculation.result,
        "Calculation stored"
    );

    Ok((StatusCode::CREATED, Json(calculation)))
}

// =============================================================================
// Calculation CRUD
// =============================================================================

/// GET /calculations
///
/// List all stored calculations, most recent first.
pub async fn list_calculations(State(state): State<AppState>) -> HandlerResult<Vec<Calculation>> {
    let calculations = services::list_calculations(state.repository.as_ref())
        .await
        .map_err(|e| AppError::storage("Failed to list calculations", e))?;

    Ok(Json(calculations))
}

/// GET /calculations/{id}
pub async fn get_calculation(
    State(state): State<AppState>,
    raw_id: IdPath,
) -> HandlerResult<Calculation> {
    let id = parse_calculation_id(raw_id)?;

    match services::get_calculation(state.repository.as_ref(), id).await {
        Ok(calculation) => Ok(Json(calculation)),
        Err(e) if e.is_not_found() => Err(AppError::NotFound(e.message().to_string())),
        Err(e) => Err(AppError::storage("Failed to fetch calculation", e)),
    }
}

/// DELETE /calculations/{id}
///
/// 204 when a record was removed, 404 when nothing matched.
pub async fn delete_calculation(
    State(state): State<AppState>,
    raw_id: IdPath,
) -> Result<StatusCode, AppError> {
    let id = parse_calculation_id(raw_id)?;

    let removed = services::delete_calculation(state.repository.as_ref(), id)
        .await
        .map_err(|e| AppError::storage("Failed to delete calculation", e))?;

    if removed == 0 {
        return Err(AppError::NotFound("Calculation not found".to_string()));
    }

    tracing::debug!(%id, "Calculation deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

fn parse_calculation_id(raw: IdPath) -> Result<CalculationId, AppError> {
    raw.ok()
        .and_then(|Path(id)| id.parse::<CalculationId>().ok())
        .ok_or_else(|| AppError::BadRequest("Invalid calculation ID".to_string()))
}
