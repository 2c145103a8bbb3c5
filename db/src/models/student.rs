use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, JoinType, QueryOrder, QuerySelect, Set};
use serde::Serialize;

use super::{course, course_student};

/// A student, keyed by their index number.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub index_number: String,
    pub full_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_student::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::attendance_record::Entity")]
    AttendanceRecords,
}

impl Related<super::course_student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::attendance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Ordering applied to [`Model::enrolled_in`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterOrder {
    FullName,
    IndexNumber,
}

impl Model {
    pub async fn create<C>(db: &C, index_number: &str, full_name: &str) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        ActiveModel {
            index_number: Set(index_number.trim().to_owned()),
            full_name: Set(full_name.trim().to_owned()),
        }
        .insert(db)
        .await
    }

    pub async fn find_by_index<C>(db: &C, index_number: &str) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find_by_id(index_number.trim().to_owned())
            .one(db)
            .await
    }

    /// Returns the existing student or creates one. An existing name is left untouched.
    pub async fn get_or_create<C>(
        db: &C,
        index_number: &str,
        full_name: &str,
    ) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        match Self::find_by_index(db, index_number).await? {
            Some(existing) => Ok(existing),
            None => Self::create(db, index_number, full_name).await,
        }
    }

    /// Students enrolled in `course_id`.
    pub async fn enrolled_in<C>(
        db: &C,
        course_id: i64,
        order: RosterOrder,
    ) -> Result<Vec<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        let sel = Entity::find()
            .join(JoinType::InnerJoin, Relation::Enrollments.def())
            .filter(course_student::Column::CourseId.eq(course_id));

        let sel = match order {
            RosterOrder::FullName => sel
                .order_by_asc(Column::FullName)
                .order_by_asc(Column::IndexNumber),
            RosterOrder::IndexNumber => sel.order_by_asc(Column::IndexNumber),
        };

        sel.all(db).await
    }

    pub async fn is_enrolled_in<C>(&self, db: &C, course_id: i64) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        course_student::Model::exists(db, course_id, &self.index_number).await
    }

    /// The course the student's score is computed against: the enrollment with the lowest course id.
    pub async fn first_course<C>(&self, db: &C) -> Result<Option<course::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        course::Entity::find()
            .join(JoinType::InnerJoin, course::Relation::Enrollments.def())
            .filter(course_student::Column::StudentIndex.eq(self.index_number.as_str()))
            .order_by_asc(course::Column::Id)
            .one(db)
            .await
    }
}
