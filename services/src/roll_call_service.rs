use chrono::{DateTime, Utc};
use db::models::attendance_record::{self, Recorded};
use db::models::course;
use db::models::student::{self, RosterOrder};
use sea_orm::{ConnectionTrait, TransactionTrait};
use serde::Serialize;
use tracing::info;

use crate::course_service::{Actor, CourseService};
use crate::error::{AttendanceError, Rejection};

/// A lecturer-entered roll call. No location check applies.
#[derive(Debug, Clone)]
pub struct RollCall {
    pub course_id: i64,
    pub session_key: String,
    pub present_students: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectedCourse {
    pub course: course::Model,
    pub students: Vec<student::Model>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Roster {
    pub courses: Vec<course::Model>,
    pub selected: Option<SelectedCourse>,
}

pub struct RollCallService;

impl RollCallService {
    /// The actor's courses and, if one is chosen, its students by full name.
    pub async fn roster<C>(
        db: &C,
        actor: Actor,
        course_id: Option<i64>,
    ) -> Result<Roster, AttendanceError>
    where
        C: ConnectionTrait,
    {
        let courses = CourseService::visible_courses(db, actor).await?;
        let selected = match course_id {
            Some(id) => {
                let course = CourseService::managed_course(db, actor, id).await?;
                let students = student::Model::enrolled_in(db, course.id, RosterOrder::FullName).await?;
                Some(SelectedCourse { course, students })
            }
            None => None,
        };
        Ok(Roster { courses, selected })
    }

    /// Records every listed student as present for the session.
    ///
    /// Unknown index numbers fail the whole submission before anything is written.
    /// A session already taken by a roll call, or one that already has scans for
    /// the course, is rejected as a duplicate.
    pub async fn record<C>(
        db: &C,
        actor: Actor,
        roll_call: RollCall,
        now: DateTime<Utc>,
    ) -> Result<Vec<attendance_record::Model>, AttendanceError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let course = CourseService::managed_course(db, actor, roll_call.course_id).await?;
        let session_key = roll_call.session_key.trim().to_owned();

        let present: Vec<String> = roll_call
            .present_students
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();

        for index in &present {
            if student::Model::find_by_index(db, index).await?.is_none() {
                return Err(AttendanceError::not_found(format!("Student {index} not found")));
            }
        }

        match attendance_record::Model::record_roll_call(db, course.id, &session_key, &present, now)
            .await?
        {
            Recorded::New(rows) => {
                info!(
                    course = %course.code,
                    session = %session_key,
                    present = rows.len(),
                    "Roll call recorded"
                );
                Ok(rows)
            }
            Recorded::AlreadyPresent => {
                info!(course = %course.code, session = %session_key, "Roll call rejected: duplicate session");
                Err(Rejection::DuplicateSession { session_key }.into())
            }
        }
    }
}
