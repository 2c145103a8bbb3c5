use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, PaginatorTrait, Set};
use serde::Serialize;

/// Enrollment of a student in a course (many-to-many join table).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "course_students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_index: String,
    pub enrolled_at: DateTime<Utc>,
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

impl Model {
    /// Enrolls the student. Enrolling twice is a no-op that returns the original row.
    pub async fn enroll<C>(db: &C, course_id: i64, student_index: &str) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let key = (course_id, student_index.trim().to_owned());
        if let Some(existing) = Entity::find_by_id(key.clone()).one(db).await? {
            return Ok(existing);
        }

        ActiveModel {
            course_id: Set(key.0),
            student_index: Set(key.1),
            enrolled_at: Set(Utc::now()),
        }
        .insert(db)
        .await
    }

    pub async fn exists<C>(db: &C, course_id: i64, student_index: &str) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        let n = Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::StudentIndex.eq(student_index))
            .count(db)
            .await?;
        Ok(n > 0)
    }
}
