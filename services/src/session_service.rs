use chrono::{DateTime, Duration, Utc};
use db::models::{course, session_key};
use db::models::session_key::NewSessionKey;
use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::info;
use util::config;
use util::geo::Coordinate;
use util::qr;

use crate::course_service::{Actor, CourseService};
use crate::error::{AttendanceError, Rejection};

/// Where and for how long an issued session accepts scans.
#[derive(Debug, Clone, Copy)]
pub struct IssuePolicy {
    pub required_location: Option<Coordinate>,
    pub location_tolerance_m: i32,
    pub default_duration_minutes: i64,
}

impl IssuePolicy {
    /// The configured campus coordinate, tolerance and duration.
    pub fn from_config() -> Self {
        Self {
            required_location: Some(Coordinate::new(
                config::campus_latitude(),
                config::campus_longitude(),
            )),
            location_tolerance_m: config::location_tolerance_m(),
            default_duration_minutes: config::session_duration_minutes(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IssuedSession {
    pub session: session_key::Model,
    pub course: course::Model,
    pub scan_url: String,
    /// Base64 PNG encoding `scan_url`.
    pub qr_image: String,
}

/// What a student sees before submitting a scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanForm {
    pub session: session_key::Model,
    pub course: course::Model,
}

pub struct SessionService;

impl SessionService {
    /// `{base}/attendance/scan/{key}/`
    pub fn scan_url(base_url: &str, key: &str) -> String {
        format!("{}/attendance/scan/{}/", base_url.trim_end_matches('/'), key)
    }

    /// Issues a new session key for the course and renders its scan link as a QR image.
    pub async fn issue<C>(
        db: &C,
        actor: Actor,
        course_id: i64,
        duration_minutes: Option<i64>,
        policy: IssuePolicy,
        base_url: &str,
        now: DateTime<Utc>,
    ) -> Result<IssuedSession, AttendanceError>
    where
        C: ConnectionTrait,
    {
        let course = CourseService::managed_course(db, actor, course_id).await?;
        let minutes = duration_minutes.unwrap_or(policy.default_duration_minutes);

        let session = session_key::Model::create(
            db,
            NewSessionKey {
                course_id: course.id,
                created_by: actor.user_id,
                duration: Duration::minutes(minutes),
                required_location: policy.required_location,
                location_tolerance_m: policy.location_tolerance_m,
            },
            now,
        )
        .await?;

        let scan_url = Self::scan_url(base_url, &session.key);
        let qr_image = qr::render_png_base64(&scan_url)?;

        info!(
            course = %course.code,
            lecturer = actor.user_id,
            expires_at = %session.expires_at,
            "Attendance session issued"
        );

        Ok(IssuedSession {
            session,
            course,
            scan_url,
            qr_image,
        })
    }

    /// Loads a session for display. Expired sessions are rejected just like a scan would be.
    pub async fn scan_form<C>(
        db: &C,
        key: &str,
        now: DateTime<Utc>,
    ) -> Result<ScanForm, AttendanceError>
    where
        C: ConnectionTrait,
    {
        let (session, course) = load_session(db, key).await?;
        if session.is_expired(now) {
            return Err(Rejection::Expired.into());
        }
        Ok(ScanForm { session, course })
    }
}

/// Looks up a session key and its course. Either missing is a not-found.
pub(crate) async fn load_session<C>(
    db: &C,
    key: &str,
) -> Result<(session_key::Model, course::Model), AttendanceError>
where
    C: ConnectionTrait,
{
    let session = session_key::Model::find_by_key(db, key)
        .await?
        .ok_or_else(|| AttendanceError::not_found("Attendance session not found"))?;
    let course = course::Model::find_by_id(db, session.course_id)
        .await?
        .ok_or_else(|| AttendanceError::not_found("Course not found"))?;
    Ok((session, course))
}
