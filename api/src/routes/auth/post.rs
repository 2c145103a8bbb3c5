use axum::{Json, extract::State, http::StatusCode};
use common::format_validation_errors;
use db::models::user;
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

use crate::auth::generate_jwt;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Default)]
pub struct LoginResponse {
    pub id: i64,
    pub username: String,
    pub admin: bool,
    pub token: String,
    pub expires_at: String,
}

/// POST /auth/login
///
/// Authenticate a lecturer and return a JWT.
///
/// ### Request Body
/// ```json
/// { "username": "lecturer", "password": "password" }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "username": "lecturer",
///     "admin": false,
///     "token": "jwt_token_here",
///     "expires_at": "2025-09-08T11:00:00+00:00"
///   },
///   "message": "Login successful"
/// }
/// ```
///
/// - `400 Bad Request` (validation failure)
/// - `401 Unauthorized` (unknown user or wrong password)
/// ```json
/// { "success": false, "data": {...}, "message": "Invalid username or password" }
/// ```
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> (StatusCode, Json<ApiResponse<LoginResponse>>) {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format_validation_errors(&validation_errors))),
        );
    }

    let user = match user::Model::verify_credentials(state.db(), &req.username, &req.password).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::info!(username = %req.username, "Failed login attempt");
            return (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error("Invalid username or password")),
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Database error during login");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Database error")),
            );
        }
    };

    match generate_jwt(user.id, user.admin) {
        Ok((token, expires_at)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                LoginResponse {
                    id: user.id,
                    username: user.username,
                    admin: user.admin,
                    token,
                    expires_at,
                },
                "Login successful",
            )),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Token encoding failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to issue token")),
            )
        }
    }
}
