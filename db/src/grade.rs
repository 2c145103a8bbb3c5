//! Attendance score arithmetic and the per-student summary it is computed from.

use sea_orm::{ConnectionTrait, DbErr};
use serde::Serialize;

use crate::models::{attendance_record, max_marks, student};

/// Missed lectures at which a warning is raised.
const WARNING_MISSED: i64 = 2;
/// Missed lectures at which the warning becomes critical.
const CRITICAL_MISSED: i64 = 3;
/// Courses with fewer lectures than this never produce warnings.
const MIN_LECTURES_FOR_WARNINGS: i32 = 3;

/// `attended / total * max_marks`, rounded to two decimals.
///
/// Zero lectures or zero marks yield `0.0`.
pub fn attendance_score(attended: u64, total_lectures: i32, max_marks: i32) -> f64 {
    if total_lectures <= 0 || max_marks <= 0 {
        return 0.0;
    }
    let raw = (attended as f64 / total_lectures as f64) * max_marks as f64;
    (raw * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WarningLevel {
    Warning,
    Critical,
}

impl WarningLevel {
    pub fn label(&self) -> &'static str {
        match self {
            WarningLevel::Warning => "WARNING",
            WarningLevel::Critical => "CRITICAL",
        }
    }
}

/// Classifies a student's absences. Only evaluated for courses with at least three lectures.
pub fn classify_warning(total_lectures: i32, attended: u64) -> Option<WarningLevel> {
    if total_lectures < MIN_LECTURES_FOR_WARNINGS {
        return None;
    }
    let missed = total_lectures as i64 - attended as i64;
    if missed >= CRITICAL_MISSED {
        Some(WarningLevel::Critical)
    } else if missed == WARNING_MISSED {
        Some(WarningLevel::Warning)
    } else {
        None
    }
}

/// Figures behind a student's attendance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceSummary {
    /// The course the figures refer to; `None` for a student with no enrollment.
    pub course_id: Option<i64>,
    pub attended: u64,
    pub total_lectures: i32,
    pub max_attendance_marks: Option<i32>,
    pub score: f64,
}

impl AttendanceSummary {
    fn empty() -> Self {
        Self {
            course_id: None,
            attended: 0,
            total_lectures: 0,
            max_attendance_marks: None,
            score: 0.0,
        }
    }

    pub fn missed(&self) -> i64 {
        self.total_lectures as i64 - self.attended as i64
    }

    pub fn warning(&self) -> Option<WarningLevel> {
        classify_warning(self.total_lectures, self.attended)
    }
}

/// Computes the student's attendance summary against their first enrolled course.
///
/// Students are modelled as taking a single course: with several enrollments
/// only the lowest course id counts. A course without a max-marks row scores 0.
pub async fn student_summary<C>(
    db: &C,
    student: &student::Model,
) -> Result<AttendanceSummary, DbErr>
where
    C: ConnectionTrait,
{
    let Some(course) = student.first_course(db).await? else {
        return Ok(AttendanceSummary::empty());
    };

    let attended =
        attendance_record::Model::count_for_student(db, course.id, &student.index_number).await?;
    let marks = max_marks::Model::for_course(db, course.id).await?;
    let max = marks.as_ref().map(|m| m.max_attendance_marks);

    Ok(AttendanceSummary {
        course_id: Some(course.id),
        attended,
        total_lectures: course.total_lectures_possible,
        max_attendance_marks: max,
        score: max
            .map(|m| attendance_score(attended, course.total_lectures_possible, m))
            .unwrap_or(0.0),
    })
}
