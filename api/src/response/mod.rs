use axum::{Json, http::StatusCode, response::IntoResponse};
use axum_extra::extract::FormRejection;
use serde::Serialize;
use services::AttendanceError;
use tracing::{error, info};

/// Standardized API response wrapper for all outgoing JSON responses.
///
/// ```json
/// {
///   "success": true,
///   "data": { ... },
///   "message": "Some message"
/// }
/// ```
///
/// Domain rejections (expired session, too far away, ...) use `success: false`
/// with status `200 OK`; lookups and permission failures use the matching
/// HTTP error status.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// Constructs an error response with a message and default `data`.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}

/// Placeholder payload for responses that carry no data.
#[derive(Serialize, Default)]
pub struct Empty;

/// Maps an undecodable form body (missing or non-numeric fields, wrong
/// content type) onto the envelope with the extractor's status.
pub fn form_rejection<T>(rejection: FormRejection) -> (StatusCode, Json<ApiResponse<T>>)
where
    T: Serialize + Default,
{
    let reason = rejection.to_string();
    let status = rejection.into_response().status();
    info!(%reason, "Form rejected");
    (status, Json(ApiResponse::error(format!("Invalid form: {reason}"))))
}

/// Maps a service failure onto its status code and envelope.
pub fn service_error<T>(err: AttendanceError) -> (StatusCode, Json<ApiResponse<T>>)
where
    T: Serialize + Default,
{
    let status = match &err {
        AttendanceError::NotFound(_) => StatusCode::NOT_FOUND,
        AttendanceError::Forbidden(_) => StatusCode::FORBIDDEN,
        AttendanceError::Conflict(_) => StatusCode::CONFLICT,
        AttendanceError::Rejected(rejection) => {
            info!(reason = %rejection, "Request rejected");
            StatusCode::OK
        }
        AttendanceError::Database(e) => {
            error!(error = %e, "Database error");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Database error")),
            );
        }
        AttendanceError::Qr(e) => {
            error!(error = %e, "QR rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Json(ApiResponse::error(err.to_string())))
}
