use db::grade::{self, WarningLevel};
use db::models::course;
use db::models::student::{self, RosterOrder};
use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::course_service::{Actor, CourseService};
use crate::error::AttendanceError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeRow {
    pub full_name: String,
    pub index_number: String,
    pub attendance_score: f64,
    pub attended: u64,
    pub missed: i64,
    pub warning: Option<WarningLevel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseGrades {
    pub course: course::Model,
    pub students: Vec<GradeRow>,
}

pub struct GradeService;

impl GradeService {
    /// One row per enrolled student, ordered by full name.
    ///
    /// Each score is the student's own attendance score, which is computed
    /// against their first enrolled course.
    pub async fn course_grades<C>(
        db: &C,
        actor: Actor,
        course_id: i64,
    ) -> Result<CourseGrades, AttendanceError>
    where
        C: ConnectionTrait,
    {
        let course = CourseService::managed_course(db, actor, course_id).await?;
        let enrolled = student::Model::enrolled_in(db, course.id, RosterOrder::FullName).await?;

        let mut students = Vec::with_capacity(enrolled.len());
        for s in enrolled {
            let summary = grade::student_summary(db, &s).await?;
            students.push(GradeRow {
                attendance_score: summary.score,
                attended: summary.attended,
                missed: summary.missed(),
                warning: summary.warning(),
                full_name: s.full_name,
                index_number: s.index_number,
            });
        }

        Ok(CourseGrades { course, students })
    }
}
