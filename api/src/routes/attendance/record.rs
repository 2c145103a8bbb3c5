use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
};
use axum_extra::extract::{Form, FormRejection};
use chrono::Utc;
use common::format_validation_errors;
use serde::{Deserialize, Serialize};
use services::roll_call_service::{RollCall, RollCallService};
use util::state::AppState;
use validator::Validate;

use crate::auth::AuthUser;
use crate::response::{ApiResponse, form_rejection, service_error};
use crate::routes::common::{CourseResponse, StudentResponse};

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub course_id: Option<i64>,
}

#[derive(Debug, Serialize, Default)]
pub struct RosterResponse {
    pub title: String,
    pub courses: Vec<CourseResponse>,
    pub selected_course: Option<CourseResponse>,
    pub students: Vec<StudentResponse>,
}

/// GET /attendance/record/?course_id={id}
///
/// The caller's courses and, when `course_id` is given, that course's students
/// ordered by full name.
pub async fn roll_call_form(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<RosterQuery>,
) -> (StatusCode, Json<ApiResponse<RosterResponse>>) {
    match RollCallService::roster(state.db(), user.actor(), query.course_id).await {
        Ok(roster) => {
            let (selected_course, students) = match roster.selected {
                Some(sel) => (
                    Some(CourseResponse::from(sel.course)),
                    sel.students.into_iter().map(StudentResponse::from).collect(),
                ),
                None => (None, Vec::new()),
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    RosterResponse {
                        title: "Record Attendance".into(),
                        courses: roster.courses.into_iter().map(CourseResponse::from).collect(),
                        selected_course,
                        students,
                    },
                    "Roster loaded",
                )),
            )
        }
        Err(e) => service_error(e),
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct RollCallForm {
    pub course_id: i64,

    #[validate(length(min = 1, max = 100, message = "Session key must be 1 to 100 characters"))]
    pub session_key: String,

    /// Repeated `present_students` fields.
    #[serde(default)]
    pub present_students: Vec<String>,
}

#[derive(Debug, Serialize, Default)]
pub struct RollCallResponse {
    pub course_id: i64,
    pub session_key: String,
    pub recorded: usize,
}

/// POST /attendance/record/
///
/// Form fields: `course_id`, `session_key`, and `present_students` repeated
/// once per present student.
///
/// ### Responses
/// - `201 Created` with the number of records written
/// - `200 OK` with `success: false` when the session was already recorded
/// - `404 Not Found` for an unknown course or student index
pub async fn record_roll_call(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    form: Result<Form<RollCallForm>, FormRejection>,
) -> (StatusCode, Json<ApiResponse<RollCallResponse>>) {
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
    if form.session_key.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Session key must be 1 to 100 characters")),
        );
    }

    let roll_call = RollCall {
        course_id: form.course_id,
        session_key: form.session_key,
        present_students: form.present_students,
    };
    let session_key = roll_call.session_key.trim().to_owned();

    match RollCallService::record(state.db(), user.actor(), roll_call, Utc::now()).await {
        Ok(rows) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                RollCallResponse {
                    course_id: form.course_id,
                    session_key,
                    recorded: rows.len(),
                },
                "Attendance recorded",
            )),
        ),
        Err(e) => service_error(e),
    }
}
