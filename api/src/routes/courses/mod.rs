//! `/courses` routes: course creation, enrollment and mark configuration for
//! the calling lecturer.

pub mod get;
pub mod post;
pub mod put;

use axum::{
    Router,
    routing::{get, post, put},
};
use util::state::AppState;

/// - `GET /courses/` → `list_courses`
/// - `POST /courses/` → `create_course`
/// - `POST /courses/{course_id}/students` → `enroll_student`
/// - `PUT /courses/{course_id}/max-marks` → `set_max_marks`
pub fn courses_routes() -> Router<AppState> {
    Router::new()
        .route("/courses/", get(get::list_courses).post(post::create_course))
        .route("/courses/{course_id}/students", post(post::enroll_student))
        .route("/courses/{course_id}/max-marks", put(put::set_max_marks))
}
