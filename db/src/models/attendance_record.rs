use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, PaginatorTrait, Set, SqlErr, TransactionTrait,
};
use serde::Serialize;
use std::collections::BTreeSet;
use util::geo::Coordinate;

use super::roll_call_session;

/// Append-only log of a student being present for one session of a course.
///
/// `(course_id, session_key, student_index)` is unique at the database level.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "attendance_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub student_index: String,
    /// Scanned token or lecturer-entered session label.
    pub session_key: String,
    pub timestamp: DateTime<Utc>,
    pub student_latitude: Option<f64>,
    pub student_longitude: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentIndex",
        to = "super::student::Column::IndexNumber",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Result of an insert guarded by the uniqueness constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded<T> {
    New(T),
    AlreadyPresent,
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

impl Model {
    /// Inserts a single record. A row that already exists for the same student,
    /// course and session yields `Recorded::AlreadyPresent` without touching the table.
    pub async fn record<C>(
        db: &C,
        course_id: i64,
        student_index: &str,
        session_key: &str,
        timestamp: DateTime<Utc>,
        location: Option<Coordinate>,
    ) -> Result<Recorded<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        let row = ActiveModel {
            course_id: Set(course_id),
            student_index: Set(student_index.to_owned()),
            session_key: Set(session_key.to_owned()),
            timestamp: Set(timestamp),
            student_latitude: Set(location.map(|c| c.latitude)),
            student_longitude: Set(location.map(|c| c.longitude)),
            ..Default::default()
        };

        match row.insert(db).await {
            Ok(m) => Ok(Recorded::New(m)),
            Err(e) if is_unique_violation(&e) => Ok(Recorded::AlreadyPresent),
            Err(e) => Err(e),
        }
    }

    /// Whether any record exists for this `(course, session)` pair.
    pub async fn session_recorded<C>(db: &C, course_id: i64, session_key: &str) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        let n = Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::SessionKey.eq(session_key))
            .count(db)
            .await?;
        Ok(n > 0)
    }

    /// Records a whole roll call in one transaction.
    ///
    /// The transaction first claims the `(course, session)` marker in
    /// `roll_call_sessions`, so of two concurrent roll calls for the same session
    /// only one commits. Returns `Recorded::AlreadyPresent` and writes nothing if
    /// the marker is already taken or scans already exist for the session.
    /// Repeated indexes are collapsed.
    pub async fn record_roll_call<C>(
        db: &C,
        course_id: i64,
        session_key: &str,
        student_indexes: &[String],
        timestamp: DateTime<Utc>,
    ) -> Result<Recorded<Vec<Model>>, DbErr>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let unique: BTreeSet<&str> = student_indexes.iter().map(|s| s.trim()).collect();

        let txn = db.begin().await?;

        match roll_call_session::Model::claim(&txn, course_id, session_key, timestamp).await {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                txn.rollback().await?;
                return Ok(Recorded::AlreadyPresent);
            }
            Err(e) => return Err(e),
        }

        if Self::session_recorded(&txn, course_id, session_key).await? {
            txn.rollback().await?;
            return Ok(Recorded::AlreadyPresent);
        }

        let mut inserted = Vec::with_capacity(unique.len());
        for index in unique {
            match Self::record(&txn, course_id, index, session_key, timestamp, None).await? {
                Recorded::New(m) => inserted.push(m),
                Recorded::AlreadyPresent => {
                    txn.rollback().await?;
                    return Ok(Recorded::AlreadyPresent);
                }
            }
        }

        txn.commit().await?;
        Ok(Recorded::New(inserted))
    }

    /// Number of records the student has for `course_id`.
    pub async fn count_for_student<C>(db: &C, course_id: i64, student_index: &str) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::StudentIndex.eq(student_index))
            .count(db)
            .await
    }
}
