//! CSV bulk import handler

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
};
use tracing::info;

use crate::{AppError, AppState, MAX_UPLOAD_SIZE};

/// POST /transactions/import - Import transactions from an uploaded CSV
///
/// Expects a multipart form with a `file` field holding CSV data in the
/// export column order. The batch is written as one storage transaction:
/// a file with any unparseable row persists nothing.
pub async fn import_transactions(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<StatusCode, AppError> {
    let mut file_data: Option<Vec<u8>> = None;

    // Extract the file field from the multipart form
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(&format!("Failed to read form field: {}", e)))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|_| AppError::bad_request("Failed to read file data"))?;

            if bytes.len() > MAX_UPLOAD_SIZE {
                return Err(AppError::bad_request(&format!(
                    "File too large. Maximum size is {} KB",
                    MAX_UPLOAD_SIZE / 1024
                )));
            }

            file_data = Some(bytes.to_vec());
        }
    }

    let file_data = file_data.ok_or_else(|| AppError::bad_request("Missing file field"))?;

    let transactions = tally_core::import::parse_csv(file_data.as_slice())
        .map_err(|e| AppError::bad_request(&e.to_string()))?;

    let imported = state.db.bulk_insert_transactions(&transactions)?;
    info!("Imported {} transactions", imported);

    Ok(StatusCode::CREATED)
}
