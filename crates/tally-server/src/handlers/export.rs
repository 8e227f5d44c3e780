//! CSV export handler

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Response, StatusCode},
};
use tracing::info;

use crate::{AppError, AppState};

/// GET /transactions/export - Download all transactions as CSV
///
/// The header row is present even when the store is empty.
pub async fn export_transactions(
    State(state): State<Arc<AppState>>,
) -> Result<Response<Body>, AppError> {
    let transactions = state.db.list_transactions()?;
    let csv = tally_core::export::transactions_to_csv(&transactions)?;
    info!("Exported {} transactions to CSV", transactions.len());

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv; charset=utf-8")
        .header(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"transactions.csv\"",
        )
        .body(Body::from(csv))
        .map_err(|e| AppError::internal(&e.to_string()))
}
