use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use common::format_validation_errors;
use serde::{Deserialize, Serialize};
use services::course_service::CourseService;
use util::state::AppState;
use validator::Validate;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, service_error};

#[derive(Debug, Deserialize, Validate)]
pub struct MaxMarksRequest {
    #[validate(range(min = 0, message = "Total class score cannot be negative"))]
    pub total_class_score: Option<i32>,

    #[validate(range(min = 0, message = "Max attendance marks cannot be negative"))]
    pub max_attendance_marks: Option<i32>,
}

#[derive(Debug, Serialize, Default)]
pub struct MaxMarksResponse {
    pub course_id: i64,
    pub total_class_score: i32,
    pub max_attendance_marks: i32,
}

/// PUT /courses/{course_id}/max-marks
///
/// Create or update the course's mark configuration. Omitted fields keep their
/// current value (100 and 10 for a new row).
///
/// ### Request Body
/// ```json
/// { "max_attendance_marks": 10 }
/// ```
pub async fn set_max_marks(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<MaxMarksRequest>,
) -> (StatusCode, Json<ApiResponse<MaxMarksResponse>>) {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format_validation_errors(&validation_errors))),
        );
    }

    match CourseService::set_max_marks(
        state.db(),
        user.actor(),
        course_id,
        req.total_class_score,
        req.max_attendance_marks,
    )
    .await
    {
        Ok(marks) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                MaxMarksResponse {
                    course_id: marks.course_id,
                    total_class_score: marks.total_class_score,
                    max_attendance_marks: marks.max_attendance_marks,
                },
                "Max marks updated",
            )),
        ),
        Err(e) => service_error(e),
    }
}
