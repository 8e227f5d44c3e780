//! Summary report handlers
//!
//! Both reports are derived from the transactions table on every request.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppError, AppState};
use tally_core::models::{CategorySummary, MonthlySummary};

/// GET /summary/monthly - Income/expense totals for the 12 most recent months
pub async fn monthly_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MonthlySummary>>, AppError> {
    let summaries = state.db.monthly_summary()?;
    Ok(Json(summaries))
}

/// GET /summary/categories - Signed totals grouped by category and type
pub async fn category_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CategorySummary>>, AppError> {
    let summaries = state.db.category_summary()?;
    Ok(Json(summaries))
}
