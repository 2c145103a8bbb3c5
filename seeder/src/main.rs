use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    attendance::AttendanceSeeder, course::CourseSeeder, student::StudentSeeder, user::UserSeeder,
};
use migration::Migrator;
use sea_orm_migration::MigratorTrait;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = Migrator::up(&db, None).await {
        eprintln!("Failed to run migrations: {e}");
        std::process::exit(1);
    }

    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder + Send + Sync>, "User"),
        (Box::new(CourseSeeder), "Course"),
        (Box::new(StudentSeeder), "Student"),
        (Box::new(AttendanceSeeder), "Attendance"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
