//! `/attendance` routes.
//!
//! Roll call and QR generation are lecturer routes. The scan endpoints are
//! public: a student only holds the session key from the QR code.

pub mod generate;
pub mod record;
pub mod scan;

use axum::{Router, routing::get};
use util::state::AppState;

/// - `GET|POST /attendance/record/` → roll call
/// - `GET|POST /attendance/generate/` → QR session issuance
pub fn lecturer_attendance_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/attendance/record/",
            get(record::roll_call_form).post(record::record_roll_call),
        )
        .route(
            "/attendance/generate/",
            get(generate::generate_form).post(generate::generate_session),
        )
}

/// - `GET|POST /attendance/scan/{key}/` → student self-report
pub fn scan_routes() -> Router<AppState> {
    Router::new().route(
        "/attendance/scan/{key}/",
        get(scan::scan_form).post(scan::submit_scan),
    )
}
