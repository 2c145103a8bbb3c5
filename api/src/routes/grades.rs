use axum::{Extension, Json, Router, extract::State, http::StatusCode, routing::get};
use axum_extra::extract::{Form, FormRejection};
use serde::{Deserialize, Serialize};
use services::course_service::CourseService;
use services::grade_service::{GradeRow, GradeService};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, form_rejection, service_error};
use crate::routes::common::{CoursePickerResponse, CourseResponse};

/// - `GET /grades/` → `grades_form`
/// - `POST /grades/` → `course_grades`
pub fn grades_routes() -> Router<AppState> {
    Router::new().route("/grades/", get(grades_form).post(course_grades))
}

/// GET /grades/
pub async fn grades_form(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> (StatusCode, Json<ApiResponse<CoursePickerResponse>>) {
    match CourseService::visible_courses(state.db(), user.actor()).await {
        Ok(courses) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                CoursePickerResponse::new("View Student Grades", courses),
                "Courses retrieved",
            )),
        ),
        Err(e) => service_error(e.into()),
    }
}

#[derive(Debug, Deserialize)]
pub struct GradesForm {
    pub course_id: i64,
}

#[derive(Debug, Serialize, Default)]
pub struct GradesResponse {
    pub title: String,
    pub selected_course: CourseResponse,
    pub students: Vec<GradeRow>,
}

/// POST /grades/
///
/// Form field: `course_id`.
///
/// ### Response
/// ```json
/// {
///   "success": true,
///   "data": {
///     "title": "View Student Grades",
///     "selected_course": { "id": 1, "code": "MATH101", ... },
///     "students": [
///       { "full_name": "Ama Serwaa", "index_number": "1001", "attendance_score": 5.0,
///         "attended": 6, "missed": 6, "warning": "CRITICAL" }
///     ]
///   },
///   "message": "Grades computed"
/// }
/// ```
pub async fn course_grades(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    form: Result<Form<GradesForm>, FormRejection>,
) -> (StatusCode, Json<ApiResponse<GradesResponse>>) {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return form_rejection(rejection),
    };
    match GradeService::course_grades(state.db(), user.actor(), form.course_id).await {
        Ok(grades) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                GradesResponse {
                    title: "View Student Grades".into(),
                    selected_course: CourseResponse::from(grades.course),
                    students: grades.students,
                },
                "Grades computed",
            )),
        ),
        Err(e) => service_error(e),
    }
}
