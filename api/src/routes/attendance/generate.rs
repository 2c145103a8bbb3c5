use axum::{Extension, Json, extract::State, http::StatusCode};
use axum_extra::extract::{Form, FormRejection};
use chrono::Utc;
use common::format_validation_errors;
use serde::{Deserialize, Serialize};
use services::course_service::CourseService;
use services::session_service::{IssuePolicy, SessionService};
use util::{config, state::AppState};
use validator::Validate;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, form_rejection, service_error};
use crate::routes::common::{CoursePickerResponse, CourseResponse};

/// GET /attendance/generate/
///
/// Courses the caller can issue a QR session for.
pub async fn generate_form(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> (StatusCode, Json<ApiResponse<CoursePickerResponse>>) {
    match CourseService::visible_courses(state.db(), user.actor()).await {
        Ok(courses) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                CoursePickerResponse::new("Generate Attendance QR", courses),
                "Courses retrieved",
            )),
        ),
        Err(e) => service_error(e.into()),
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateForm {
    pub course_id: i64,

    /// Minutes the session stays open. Defaults to `SESSION_DURATION_MINUTES`.
    #[validate(range(min = 1, max = 1440, message = "Duration must be between 1 and 1440 minutes"))]
    pub duration: Option<i64>,
}

#[derive(Debug, Serialize, Default)]
pub struct LocationResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub tolerance_m: i32,
}

#[derive(Debug, Serialize, Default)]
pub struct GeneratedSessionResponse {
    /// Base64 PNG of the scan URL.
    pub qr_image: String,
    pub session_key: String,
    pub scan_url: String,
    pub course: CourseResponse,
    pub expires_at: String,
    pub location: Option<LocationResponse>,
}

/// POST /attendance/generate/
///
/// Form fields: `course_id`, optional `duration` in minutes.
///
/// ### Response
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "qr_image": "iVBORw0KGgo...",
///     "session_key": "3f9a...",
///     "scan_url": "http://127.0.0.1:3000/attendance/scan/3f9a.../",
///     "course": { "id": 1, "code": "MATH101", ... },
///     "expires_at": "2025-09-08T10:10:00+00:00",
///     "location": { "latitude": 6.671, "longitude": -1.5658, "tolerance_m": 50 }
///   },
///   "message": "QR code generated"
/// }
/// ```
pub async fn generate_session(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    form: Result<Form<GenerateForm>, FormRejection>,
) -> (StatusCode, Json<ApiResponse<GeneratedSessionResponse>>) {
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

    match SessionService::issue(
        state.db(),
        user.actor(),
        form.course_id,
        form.duration,
        IssuePolicy::from_config(),
        &config::public_base_url(),
        Utc::now(),
    )
    .await
    {
        Ok(issued) => {
            let location = issued.session.required_location().map(|c| LocationResponse {
                latitude: c.latitude,
                longitude: c.longitude,
                tolerance_m: issued.session.location_tolerance_m,
            });
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    GeneratedSessionResponse {
                        qr_image: issued.qr_image,
                        expires_at: issued.session.expires_at.to_rfc3339(),
                        session_key: issued.session.key,
                        scan_url: issued.scan_url,
                        course: CourseResponse::from(issued.course),
                        location,
                    },
                    "QR code generated",
                )),
            )
        }
        Err(e) => service_error(e),
    }
}
