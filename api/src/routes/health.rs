use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use util::state::AppState;

use crate::response::ApiResponse;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[derive(Debug, Serialize, Default)]
pub struct HealthResponse {
    pub database: bool,
}

/// GET /health
///
/// Pings the database. `503` when it cannot be reached.
///
/// ```json
/// { "success": true, "data": { "database": true }, "message": "Health check passed" }
/// ```
async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    match state.db().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                HealthResponse { database: true },
                "Health check passed",
            )),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Database ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::error("Database unavailable")),
            )
        }
    }
}
