use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use common::format_validation_errors;
use serde::Deserialize;
use services::course_service::{CourseService, NewCourse};
use util::state::AppState;
use validator::Validate;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, service_error};
use crate::routes::common::{CourseResponse, StudentResponse};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 20, message = "Course code must be 1 to 20 characters"))]
    pub code: String,

    #[validate(length(min = 1, max = 100, message = "Course name must be 1 to 100 characters"))]
    pub name: String,

    #[validate(range(min = 0, message = "Total lectures cannot be negative"))]
    pub total_lectures_possible: Option<i32>,
}

/// POST /courses/
///
/// Create a course owned by the caller.
///
/// ### Request Body
/// ```json
/// { "code": "MATH101", "name": "Calculus I", "total_lectures_possible": 12 }
/// ```
///
/// ### Responses
/// - `201 Created` with the course
/// - `400 Bad Request` (validation failure)
/// - `409 Conflict` (code already taken)
pub async fn create_course(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateCourseRequest>,
) -> (StatusCode, Json<ApiResponse<CourseResponse>>) {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format_validation_errors(&validation_errors))),
        );
    }

    let params = NewCourse {
        code: req.code,
        name: req.name,
        total_lectures_possible: req.total_lectures_possible,
    };

    match CourseService::create(state.db(), user.actor(), params).await {
        Ok(course) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                CourseResponse::from(course),
                "Course created successfully",
            )),
        ),
        Err(e) => service_error(e),
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct EnrollStudentRequest {
    #[validate(length(min = 1, max = 15, message = "Index number must be 1 to 15 characters"))]
    pub index_number: String,

    #[validate(length(min = 1, max = 100, message = "Full name must be 1 to 100 characters"))]
    pub full_name: String,
}

/// POST /courses/{course_id}/students
///
/// Enroll a student, creating them first when the index number is unknown.
/// Enrolling an already enrolled student succeeds without change.
///
/// ### Request Body
/// ```json
/// { "index_number": "1001", "full_name": "Ama Serwaa" }
/// ```
pub async fn enroll_student(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<EnrollStudentRequest>,
) -> (StatusCode, Json<ApiResponse<StudentResponse>>) {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format_validation_errors(&validation_errors))),
        );
    }

    match CourseService::enroll_student(
        state.db(),
        user.actor(),
        course_id,
        &req.index_number,
        &req.full_name,
    )
    .await
    {
        Ok(student) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                StudentResponse::from(student),
                "Student enrolled",
            )),
        ),
        Err(e) => service_error(e),
    }
}
