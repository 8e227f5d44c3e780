//! Tally Web Server
//!
//! Axum-based REST API for the Tally personal finance ledger. Handlers
//! are thin adapters over the core library's store and CSV codec; all
//! consistency (including the atomicity of bulk import) is delegated to
//! SQLite.

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use tally_core::db::Database;

mod handlers;

/// Maximum CSV upload size (1 MB)
pub const MAX_UPLOAD_SIZE: usize = 1024 * 1024;

/// Shared application state
pub struct AppState {
    pub db: Database,
}

/// Permissive cross-origin policy
///
/// Every response carries the allow-all headers; an OPTIONS preflight is
/// answered directly with 204 and no body, before routing.
async fn cors_middleware(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );

    response
}

/// Create the application router
pub fn create_router(db: Database) -> Router {
    let state = Arc::new(AppState { db });

    Router::new()
        .route(
            "/transactions",
            get(handlers::list_transactions).post(handlers::create_transaction),
        )
        .route("/transactions/:id", delete(handlers::delete_transaction))
        .route("/transactions/import", post(handlers::import_transactions))
        .route("/transactions/export", get(handlers::export_transactions))
        .route("/summary/monthly", get(handlers::monthly_summary))
        .route("/summary/categories", get(handlers::category_summary))
        .with_state(state)
        .layer(middleware::from_fn(cors_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the server
pub async fn serve(db: Database, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(db);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
