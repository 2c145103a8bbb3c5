use crate::seed::Seeder;
use db::models::{course, course_student, student};
use fake::{Fake, faker::name::en::Name};
use sea_orm::{DatabaseConnection, DbErr};
use std::pin::Pin;

pub struct StudentSeeder;

const STUDENT_COUNT: u32 = 30;
const FIRST_INDEX: u32 = 1001;

impl Seeder for StudentSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 'a>> {
        Box::pin(async move {
            let courses = course::Model::list_all(db).await?;

            for n in 0..STUDENT_COUNT {
                let index = (FIRST_INDEX + n).to_string();
                let name: String = Name().fake();
                let student = student::Model::get_or_create(db, &index, &name).await?;

                // Everyone takes the first course; the rest are spread round-robin.
                if let Some(first) = courses.first() {
                    course_student::Model::enroll(db, first.id, &student.index_number).await?;
                }
                if courses.len() > 1 {
                    let other = &courses[1 + n as usize % (courses.len() - 1)];
                    course_student::Model::enroll(db, other.id, &student.index_number).await?;
                }
            }

            Ok(())
        })
    }
}
