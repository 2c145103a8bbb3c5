use crate::seed::Seeder;
use chrono::{Duration, Utc};
use db::models::{attendance_record, course, student};
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};
use sea_orm::{DatabaseConnection, DbErr};
use std::pin::Pin;

pub struct AttendanceSeeder;

const WEEKS_HELD: i64 = 6;
const ATTENDANCE_RATE: f64 = 0.8;

impl Seeder for AttendanceSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 'a>> {
        Box::pin(async move {
            // Send-compatible RNG
            let mut rng = StdRng::from_rng(OsRng)
                .map_err(|e| DbErr::Custom(format!("failed to seed RNG: {e}")))?;

            for course in course::Model::list_all(db).await? {
                let roster =
                    student::Model::enrolled_in(db, course.id, student::RosterOrder::FullName)
                        .await?;

                for week in 1..=WEEKS_HELD {
                    let present: Vec<String> = roster
                        .iter()
                        .filter(|_| rng.gen_bool(ATTENDANCE_RATE))
                        .map(|s| s.index_number.clone())
                        .collect();
                    let held_at = Utc::now() - Duration::weeks(WEEKS_HELD - week);

                    // Already-recorded weeks are skipped on re-runs.
                    attendance_record::Model::record_roll_call(
                        db,
                        course.id,
                        &format!("Week {week}"),
                        &present,
                        held_at,
                    )
                    .await?;
                }
            }

            Ok(())
        })
    }
}
