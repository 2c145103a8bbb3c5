use db::models::{course, course_student, max_marks, student, user};
use sea_orm::DatabaseConnection;

pub struct Fixture {
    pub lecturer: user::Model,
    pub other: user::Model,
    pub course: course::Model,
}

/// MATH101 with 12 lectures and 10 attendance marks, three enrolled students
/// and one student (`2001`) who is not enrolled.
pub async fn seed_math101(db: &DatabaseConnection) -> Fixture {
    let lecturer = user::Model::create(db, "lecturer", "lecturer@test.com", "password", false)
        .await
        .unwrap();
    let other = user::Model::create(db, "other", "other@test.com", "password", false)
        .await
        .unwrap();
    let course = course::Model::create(db, "MATH101", "Calculus I", lecturer.id, 12)
        .await
        .unwrap();
    max_marks::Model::upsert(db, course.id, None, Some(10))
        .await
        .unwrap();

    for (index, name) in [
        ("1001", "Ama Serwaa"),
        ("1002", "Kwame Mensah"),
        ("1003", "Kofi Boateng"),
    ] {
        student::Model::create(db, index, name).await.unwrap();
        course_student::Model::enroll(db, course.id, index)
            .await
            .unwrap();
    }
    student::Model::create(db, "2001", "Yaw Darko").await.unwrap();

    Fixture {
        lecturer,
        other,
        course,
    }
}
