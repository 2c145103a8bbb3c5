//! HTTP route entry point.
//!
//! Route groups:
//! - `/health` → health check (public)
//! - `/auth/login` → token issuance (public)
//! - `/attendance/scan/{key}/` → student self-report (public)
//! - `/`, `/courses/...`, `/attendance/record/`, `/attendance/generate/`,
//!   `/grades/` → lecturer pages (Bearer JWT required)

use axum::{Router, middleware::from_fn};
use util::state::AppState;

use crate::auth::guards::allow_authenticated;

pub mod attendance;
pub mod auth;
pub mod common;
pub mod courses;
pub mod dashboard;
pub mod grades;
pub mod health;

use attendance::{lecturer_attendance_routes, scan_routes};
use auth::auth_routes;
use courses::courses_routes;
use dashboard::dashboard_routes;
use grades::grades_routes;
use health::health_routes;

/// Builds the complete application router.
///
/// Lecturer routes are wrapped in `allow_authenticated` before the public
/// groups are merged in, so the guard never runs for those.
pub fn routes(app_state: AppState) -> Router {
    let lecturer = Router::new()
        .merge(dashboard_routes())
        .merge(courses_routes())
        .merge(lecturer_attendance_routes())
        .merge(grades_routes())
        .route_layer(from_fn(allow_authenticated));

    Router::new()
        .merge(lecturer)
        .merge(health_routes())
        .merge(auth_routes())
        .merge(scan_routes())
        .with_state(app_state)
}
