use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, QueryOrder, Set};
use serde::Serialize;

/// Lecture count a course is configured with unless told otherwise.
pub const DEFAULT_TOTAL_LECTURES: i32 = 12;

/// Represents a course in the `courses` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique course code, e.g. `MATH101`.
    pub code: String,
    pub name: String,
    /// Owning lecturer (`users.id`).
    pub lecturer_id: i64,
    /// Number of lectures the attendance score is measured against.
    pub total_lectures_possible: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::LecturerId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Lecturer,
    #[sea_orm(has_many = "super::course_student::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::session_key::Entity")]
    SessionKeys,
    #[sea_orm(has_one = "super::max_marks::Entity")]
    MaxMarks,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lecturer.def()
    }
}

impl Related<super::course_student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::session_key::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionKeys.def()
    }
}

impl Related<super::max_marks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaxMarks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C>(
        db: &C,
        code: &str,
        name: &str,
        lecturer_id: i64,
        total_lectures_possible: i32,
    ) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        ActiveModel {
            code: Set(code.trim().to_owned()),
            name: Set(name.trim().to_owned()),
            lecturer_id: Set(lecturer_id),
            total_lectures_possible: Set(total_lectures_possible),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find_by_id<C>(db: &C, id: i64) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn find_by_code<C>(db: &C, code: &str) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::Code.eq(code.trim()))
            .one(db)
            .await
    }

    /// Courses owned by `lecturer_id`, ordered by code.
    pub async fn list_for_lecturer<C>(db: &C, lecturer_id: i64) -> Result<Vec<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::LecturerId.eq(lecturer_id))
            .order_by_asc(Column::Code)
            .all(db)
            .await
    }

    pub async fn list_all<C>(db: &C) -> Result<Vec<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find().order_by_asc(Column::Code).all(db).await
    }

    /// Whether `user_id` may act on this course. Admins may act on any course.
    pub fn is_managed_by(&self, user_id: i64, admin: bool) -> bool {
        admin || self.lecturer_id == user_id
    }
}
