use sea_orm::DbErr;
use thiserror::Error;
use util::qr::QrError;

/// Expected refusals. These reach the user as a message with `success = false`,
/// not as an HTTP error status.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("Attendance for session \"{session_key}\" has already been recorded for this course.")]
    DuplicateSession { session_key: String },

    #[error("Attendance session has expired.")]
    Expired,

    #[error("No student matches the submitted index number or name.")]
    NoMatchingStudent,

    #[error("You are not enrolled in this course.")]
    NotEnrolled,

    #[error("Location is required to mark attendance. Enable location access and try again.")]
    LocationRequired,

    #[error("You are too far from the lecture venue ({:.0} m away).", distance_m)]
    TooFar { distance_m: f64 },

    #[error("Attendance has already been marked for this session.")]
    AlreadyMarked,
}

#[derive(Debug, Error)]
pub enum AttendanceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Rejected(#[from] Rejection),

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("{0}")]
    Qr(String),
}

impl From<QrError> for AttendanceError {
    fn from(err: QrError) -> Self {
        AttendanceError::Qr(err.to_string())
    }
}

impl AttendanceError {
    pub fn not_found(what: impl Into<String>) -> Self {
        AttendanceError::NotFound(what.into())
    }
}
