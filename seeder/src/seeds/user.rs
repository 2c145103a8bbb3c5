use crate::seed::Seeder;
use crate::seeds::LECTURER_USERNAME;
use db::models::user::Model;
use fake::{Fake, faker::internet::en::SafeEmail};
use sea_orm::{DatabaseConnection, DbErr};
use std::pin::Pin;

pub struct UserSeeder;

impl Seeder for UserSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 'a>> {
        Box::pin(async move {
            // Fixed admin and lecturer
            for (username, email, admin) in [
                ("admin", "admin@example.com", true),
                (LECTURER_USERNAME, "lecturer@example.com", false),
            ] {
                if Model::get_by_username(db, username).await?.is_none() {
                    Model::create(db, username, email, "password", admin).await?;
                }
            }

            // Random lecturers without courses
            for _ in 0..3 {
                let username = format!("l{:06}", fastrand::u32(..1_000_000));
                let email: String = SafeEmail().fake();
                let _ = Model::create(db, &username, &email, "password", false).await;
            }

            Ok(())
        })
    }
}
