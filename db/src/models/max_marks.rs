use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};
use serde::Serialize;

pub const DEFAULT_TOTAL_CLASS_SCORE: i32 = 100;
pub const DEFAULT_MAX_ATTENDANCE_MARKS: i32 = 10;

/// Maximum scores configured for a course (one row per course).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "max_marks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: i64,
    pub total_class_score: i32,
    /// Marks a student with perfect attendance earns.
    pub max_attendance_marks: i32,
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
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn for_course<C>(db: &C, course_id: i64) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find_by_id(course_id).one(db).await
    }

    /// Creates or replaces the course's configuration. `None` keeps the current
    /// value, or the default when no row exists yet.
    pub async fn upsert<C>(
        db: &C,
        course_id: i64,
        total_class_score: Option<i32>,
        max_attendance_marks: Option<i32>,
    ) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        match Self::for_course(db, course_id).await? {
            Some(existing) if total_class_score.is_none() && max_attendance_marks.is_none() => {
                Ok(existing)
            }
            Some(existing) => {
                let mut active: ActiveModel = existing.into();
                if let Some(v) = total_class_score {
                    active.total_class_score = Set(v);
                }
                if let Some(v) = max_attendance_marks {
                    active.max_attendance_marks = Set(v);
                }
                active.update(db).await
            }
            None => {
                ActiveModel {
                    course_id: Set(course_id),
                    total_class_score: Set(total_class_score.unwrap_or(DEFAULT_TOTAL_CLASS_SCORE)),
                    max_attendance_marks: Set(
                        max_attendance_marks.unwrap_or(DEFAULT_MAX_ATTENDANCE_MARKS)
                    ),
                }
                .insert(db)
                .await
            }
        }
    }
}
