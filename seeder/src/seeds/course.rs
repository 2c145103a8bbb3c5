use crate::seed::Seeder;
use crate::seeds::LECTURER_USERNAME;
use db::models::{course, max_marks, user};
use sea_orm::{DatabaseConnection, DbErr};
use std::pin::Pin;

pub struct CourseSeeder;

/// `(code, name, total lectures, max attendance marks)`
const COURSES: [(&str, &str, i32, Option<i32>); 3] = [
    ("MATH101", "Calculus I", 12, Some(10)),
    ("PHY102", "Mechanics", 10, Some(5)),
    ("CSC201", "Data Structures", 14, None),
];

impl Seeder for CourseSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 'a>> {
        Box::pin(async move {
            let lecturer = user::Model::get_by_username(db, LECTURER_USERNAME)
                .await?
                .ok_or_else(|| DbErr::RecordNotFound("seeded lecturer missing".into()))?;

            for (code, name, lectures, marks) in COURSES {
                let course = match course::Model::find_by_code(db, code).await? {
                    Some(existing) => existing,
                    None => course::Model::create(db, code, name, lecturer.id, lectures).await?,
                };
                if marks.is_some() {
                    max_marks::Model::upsert(db, course.id, None, marks).await?;
                }
            }

            Ok(())
        })
    }
}
