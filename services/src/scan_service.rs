//! Student self-report through a scanned session link.
//!
//! A scan runs these checks in order and stops at the first failure:
//! key lookup, expiry, identity resolution (exact index, then fuzzy name among
//! the enrolled), enrollment, location presence, geofence, and finally the
//! insert, which the unique index makes atomic.

use chrono::{DateTime, Utc};
use db::models::attendance_record::{self, Recorded};
use db::models::student::{self, RosterOrder};
use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::info;
use util::fuzzy;
use util::geo::{self, Coordinate, Fence};

use crate::error::{AttendanceError, Rejection};
use crate::session_service::load_session;

/// Raw form fields from the scan page. Any of them may be missing.
#[derive(Debug, Clone, Default)]
pub struct ScanSubmission {
    pub full_name: Option<String>,
    pub index_number: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkedPresent {
    pub full_name: String,
    pub index_number: String,
    /// Distance from the required coordinate, when the session has one.
    pub distance_m: Option<f64>,
}

/// Longest submitted name that is fuzzy-matched; matches `students.full_name`.
pub const MAX_NAME_CHARS: usize = 150;

pub struct ScanService;

impl ScanService {
    pub async fn submit<C>(
        db: &C,
        key: &str,
        submission: &ScanSubmission,
        fuzzy_threshold: u8,
        now: DateTime<Utc>,
    ) -> Result<MarkedPresent, AttendanceError>
    where
        C: ConnectionTrait,
    {
        let (session, course) = load_session(db, key).await?;

        if session.is_expired(now) {
            info!(course = %course.code, "Scan rejected: session expired");
            return Err(Rejection::Expired.into());
        }

        let student = resolve_student(db, course.id, submission, fuzzy_threshold).await?;

        if !student.is_enrolled_in(db, course.id).await? {
            info!(course = %course.code, student = %student.index_number, "Scan rejected: not enrolled");
            return Err(Rejection::NotEnrolled.into());
        }

        let Some(position) = Coordinate::parse(
            submission.latitude.as_deref(),
            submission.longitude.as_deref(),
        ) else {
            info!(student = %student.index_number, "Scan rejected: no location");
            return Err(Rejection::LocationRequired.into());
        };

        let distance_m = match session.required_location() {
            Some(center) => {
                match geo::check_fence(center, position, session.location_tolerance_m as f64) {
                    Fence::Inside { distance_m } => Some(distance_m),
                    Fence::Outside { distance_m } => {
                        info!(
                            student = %student.index_number,
                            distance_m,
                            tolerance_m = session.location_tolerance_m,
                            "Scan rejected: outside geofence"
                        );
                        return Err(Rejection::TooFar { distance_m }.into());
                    }
                }
            }
            None => None,
        };

        match attendance_record::Model::record(
            db,
            course.id,
            &student.index_number,
            &session.key,
            now,
            Some(position),
        )
        .await?
        {
            Recorded::New(_) => {
                info!(course = %course.code, student = %student.index_number, "Attendance marked by scan");
                Ok(MarkedPresent {
                    full_name: student.full_name,
                    index_number: student.index_number,
                    distance_m,
                })
            }
            Recorded::AlreadyPresent => Err(Rejection::AlreadyMarked.into()),
        }
    }
}

/// Exact index match first, over all students. Otherwise the enrolled student
/// whose name scores highest above `threshold`, lowest index winning ties.
async fn resolve_student<C>(
    db: &C,
    course_id: i64,
    submission: &ScanSubmission,
    threshold: u8,
) -> Result<student::Model, AttendanceError>
where
    C: ConnectionTrait,
{
    if let Some(index) = non_blank(submission.index_number.as_deref()) {
        if let Some(found) = student::Model::find_by_index(db, index).await? {
            return Ok(found);
        }
    }

    let Some(name) = non_blank(submission.full_name.as_deref()) else {
        return Err(Rejection::NoMatchingStudent.into());
    };
    // Matching cost grows with the input length.
    if name.chars().count() > MAX_NAME_CHARS {
        info!(course_id, "Scan rejected: submitted name too long to match");
        return Err(Rejection::NoMatchingStudent.into());
    }

    let enrolled = student::Model::enrolled_in(db, course_id, RosterOrder::IndexNumber).await?;
    match fuzzy::best_match(name, &enrolled, |s| s.full_name.as_str(), threshold) {
        Some((found, score)) => {
            info!(student = %found.index_number, score, "Student resolved by name");
            Ok(found.clone())
        }
        None => {
            info!(course_id, "Scan rejected: no student matched");
            Err(Rejection::NoMatchingStudent.into())
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
