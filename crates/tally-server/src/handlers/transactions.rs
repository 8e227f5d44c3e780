//! Transaction handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    Json,
};

use crate::{AppError, AppState};
use tally_core::models::{NewTransaction, Transaction};

/// GET /transactions - List all transactions, newest date first
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let transactions = state.db.list_transactions()?;
    Ok(Json(transactions))
}

/// POST /transactions - Record a single transaction
///
/// A positive amount on an expense is stored negated; income amounts are
/// stored as given. Unknown `type` values are rejected.
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<(StatusCode, Json<Transaction>), AppError> {
    let bytes = axum::body::to_bytes(request.into_body(), 1024 * 16)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;
    let new: NewTransaction = serde_json::from_slice(&bytes)
        .map_err(|e| AppError::bad_request(&format!("Invalid JSON: {}", e)))?;

    let created = state.db.insert_transaction(&new)?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /transactions/:id - Delete a transaction by id
///
/// An id that does not exist still yields 204; deletion is a no-op then.
pub async fn delete_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.db.delete_transaction(id)?;
    Ok(StatusCode::NO_CONTENT)
}
