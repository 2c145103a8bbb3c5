use api::{auth::generate_jwt, auth::middleware::log_request, routes::routes};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
    middleware::from_fn,
};
use db::models::{course, course_student, max_marks, student, user};
use db::test_utils::setup_test_db;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use util::state::AppState;

/// Full router over a fresh in-memory database.
pub async fn make_test_app() -> (Router, DatabaseConnection) {
    let db = setup_test_db().await;
    let app = routes(AppState::new(db.clone())).layer(from_fn(log_request));
    (app, db)
}

pub struct TestCtx {
    pub lecturer: user::Model,
    pub other: user::Model,
    pub course: course::Model,
}

/// MATH101 (12 lectures, 10 attendance marks) owned by `lecturer`, with
/// students 1001..1003 enrolled and 2001 not enrolled.
pub async fn seed(db: &DatabaseConnection) -> TestCtx {
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

    TestCtx {
        lecturer,
        other,
        course,
    }
}

pub fn bearer(user: &user::Model) -> String {
    let (token, _) = generate_jwt(user.id, user.admin).unwrap();
    format!("Bearer {token}")
}

pub fn get(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut req = Request::builder().method("GET").uri(uri);
    if let Some(auth) = auth {
        req = req.header("Authorization", auth);
    }
    req.body(Body::empty()).unwrap()
}

pub fn form(method: &str, uri: &str, auth: Option<&str>, body: &str) -> Request<Body> {
    let mut req = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(auth) = auth {
        req = req.header("Authorization", auth);
    }
    req.body(Body::from(body.to_owned())).unwrap()
}

pub fn json_request(method: &str, uri: &str, auth: Option<&str>, body: Value) -> Request<Body> {
    let mut req = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(auth) = auth {
        req = req.header("Authorization", auth);
    }
    req.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}
