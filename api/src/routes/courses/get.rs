use axum::{Extension, Json, extract::State, http::StatusCode};
use services::course_service::CourseService;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::CourseResponse;

/// GET /courses/
///
/// Courses owned by the caller, ordered by code. Admins see every course.
pub async fn list_courses(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> (StatusCode, Json<ApiResponse<Vec<CourseResponse>>>) {
    match CourseService::visible_courses(state.db(), user.actor()).await {
        Ok(courses) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                courses.into_iter().map(CourseResponse::from).collect(),
                "Courses retrieved",
            )),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list courses");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Database error")),
            )
        }
    }
}
