use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::{Form, FormRejection};
use chrono::Utc;
use common::format_validation_errors;
use serde::{Deserialize, Serialize};
use services::scan_service::{ScanService, ScanSubmission};
use services::session_service::SessionService;
use util::{config, state::AppState};
use validator::Validate;

use crate::response::{ApiResponse, form_rejection, service_error};

#[derive(Debug, Serialize, Default)]
pub struct ScanFormResponse {
    pub session_key: String,
    pub course_code: String,
    pub course_name: String,
    pub expires_at: String,
    pub location_required: bool,
}

/// GET /attendance/scan/{key}/
///
/// What the scan page shows before submission.
///
/// ### Responses
/// - `200 OK` with course and expiry
/// - `200 OK` with `success: false` once the session has expired
/// - `404 Not Found` for an unknown key
pub async fn scan_form(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> (StatusCode, Json<ApiResponse<ScanFormResponse>>) {
    match SessionService::scan_form(state.db(), &key, Utc::now()).await {
        Ok(form) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                ScanFormResponse {
                    location_required: form.session.required_location().is_some(),
                    expires_at: form.session.expires_at.to_rfc3339(),
                    session_key: form.session.key,
                    course_code: form.course.code,
                    course_name: form.course.name,
                },
                "Session open",
            )),
        ),
        Err(e) => service_error(e),
    }
}

/// Scan page fields. Anything may be omitted; the checks decide what is fatal.
#[derive(Debug, Deserialize, Default, Validate)]
pub struct ScanForm {
    #[validate(length(max = 150, message = "Full name must be at most 150 characters"))]
    pub full_name: Option<String>,
    #[validate(length(max = 15, message = "Index number must be at most 15 characters"))]
    pub index_number: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

#[derive(Debug, Serialize, Default)]
pub struct ScanResultResponse {
    pub full_name: String,
    pub index_number: String,
    pub distance_m: Option<f64>,
}

/// POST /attendance/scan/{key}/
///
/// Form fields: `full_name`, `index_number`, `latitude`, `longitude`.
///
/// ### Responses
/// - `200 OK`, success
/// ```json
/// {
///   "success": true,
///   "data": { "full_name": "Ama Serwaa", "index_number": "1001", "distance_m": 12.4 },
///   "message": "Attendance marked for Ama Serwaa"
/// }
/// ```
/// - `200 OK` with `success: false` for an expired session, no matching
///   student, a student not enrolled, missing location, being too far away,
///   or a repeated scan
/// - `400 Bad Request` for an over-long name or index number
/// - `404 Not Found` for an unknown key
pub async fn submit_scan(
    State(state): State<AppState>,
    Path(key): Path<String>,
    form: Result<Form<ScanForm>, FormRejection>,
) -> (StatusCode, Json<ApiResponse<ScanResultResponse>>) {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return form_rejection(rejection),
    };
    if let Err(validation_errors) = form.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format_validation_errors(&validation_errors))),
        );
    }

    let submission = ScanSubmission {
        full_name: form.full_name,
        index_number: form.index_number,
        latitude: form.latitude,
        longitude: form.longitude,
    };

    match ScanService::submit(
        state.db(),
        &key,
        &submission,
        config::fuzzy_match_threshold(),
        Utc::now(),
    )
    .await
    {
        Ok(marked) => {
            let message = format!("Attendance marked for {}", marked.full_name);
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    ScanResultResponse {
                        full_name: marked.full_name,
                        index_number: marked.index_number,
                        distance_m: marked.distance_m,
                    },
                    message,
                )),
            )
        }
        Err(e) => service_error(e),
    }
}
