use db::models::{course, course_student, max_marks, student};
use sea_orm::{ConnectionTrait, DbErr, SqlErr};
use tracing::info;

use crate::error::AttendanceError;

/// The authenticated lecturer a request acts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: i64,
    pub admin: bool,
}

impl Actor {
    pub fn lecturer(user_id: i64) -> Self {
        Self { user_id, admin: false }
    }
}

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub code: String,
    pub name: String,
    pub total_lectures_possible: Option<i32>,
}

pub struct CourseService;

impl CourseService {
    /// Courses the actor may act on: their own, or every course for an admin.
    pub async fn visible_courses<C>(db: &C, actor: Actor) -> Result<Vec<course::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        if actor.admin {
            course::Model::list_all(db).await
        } else {
            course::Model::list_for_lecturer(db, actor.user_id).await
        }
    }

    /// Loads a course the actor manages.
    pub async fn managed_course<C>(
        db: &C,
        actor: Actor,
        course_id: i64,
    ) -> Result<course::Model, AttendanceError>
    where
        C: ConnectionTrait,
    {
        let course = course::Model::find_by_id(db, course_id)
            .await?
            .ok_or_else(|| AttendanceError::not_found(format!("Course {course_id} not found")))?;

        if !course.is_managed_by(actor.user_id, actor.admin) {
            return Err(AttendanceError::Forbidden(format!(
                "You do not manage course {}",
                course.code
            )));
        }
        Ok(course)
    }

    pub async fn create<C>(
        db: &C,
        actor: Actor,
        params: NewCourse,
    ) -> Result<course::Model, AttendanceError>
    where
        C: ConnectionTrait,
    {
        if course::Model::find_by_code(db, &params.code).await?.is_some() {
            return Err(duplicate_code(&params.code));
        }

        let total = params
            .total_lectures_possible
            .unwrap_or(course::DEFAULT_TOTAL_LECTURES);

        match course::Model::create(db, &params.code, &params.name, actor.user_id, total).await {
            Ok(created) => {
                info!(course = %created.code, lecturer = actor.user_id, "Course created");
                Ok(created)
            }
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(duplicate_code(&params.code))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Creates the student when unknown and enrolls them. Re-enrolling is a no-op.
    pub async fn enroll_student<C>(
        db: &C,
        actor: Actor,
        course_id: i64,
        index_number: &str,
        full_name: &str,
    ) -> Result<student::Model, AttendanceError>
    where
        C: ConnectionTrait,
    {
        let course = Self::managed_course(db, actor, course_id).await?;
        let student = student::Model::get_or_create(db, index_number, full_name).await?;
        course_student::Model::enroll(db, course.id, &student.index_number).await?;
        Ok(student)
    }

    pub async fn set_max_marks<C>(
        db: &C,
        actor: Actor,
        course_id: i64,
        total_class_score: Option<i32>,
        max_attendance_marks: Option<i32>,
    ) -> Result<max_marks::Model, AttendanceError>
    where
        C: ConnectionTrait,
    {
        let course = Self::managed_course(db, actor, course_id).await?;
        Ok(max_marks::Model::upsert(db, course.id, total_class_score, max_attendance_marks).await?)
    }
}

fn duplicate_code(code: &str) -> AttendanceError {
    AttendanceError::Conflict(format!("A course with code {} already exists", code.trim()))
}
