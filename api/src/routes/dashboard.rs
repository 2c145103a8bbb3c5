use axum::{Extension, Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use services::course_service::CourseService;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::CourseResponse;

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/", get(dashboard).post(dashboard))
}

#[derive(Debug, Serialize, Default)]
pub struct DashboardResponse {
    pub title: String,
    pub message: String,
    pub courses: Vec<CourseResponse>,
}

/// GET /
/// POST /
///
/// Lecturer landing page.
///
/// ### Response
/// ```json
/// {
///   "success": true,
///   "data": {
///     "title": "Lecturer Dashboard",
///     "message": "Welcome back",
///     "courses": [{ "id": 1, "code": "MATH101", "name": "Calculus I", "lecturer_id": 1, "total_lectures_possible": 12 }]
///   },
///   "message": "Dashboard loaded"
/// }
/// ```
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> (StatusCode, Json<ApiResponse<DashboardResponse>>) {
    match CourseService::visible_courses(state.db(), user.actor()).await {
        Ok(courses) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                DashboardResponse {
                    title: "Lecturer Dashboard".into(),
                    message: "Welcome back".into(),
                    courses: courses.into_iter().map(CourseResponse::from).collect(),
                },
                "Dashboard loaded",
            )),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load dashboard courses");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Database error")),
            )
        }
    }
}
