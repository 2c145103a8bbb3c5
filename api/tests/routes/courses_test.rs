#[cfg(test)]
mod tests {
    use crate::helpers::app::{bearer, body_json, json_request, make_test_app, seed};
    use axum::http::StatusCode;
    use db::models::{course_student, max_marks};
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn create_course_then_duplicate_conflicts() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;
        let auth = bearer(&ctx.lecturer);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/courses/",
                Some(&auth),
                json!({ "code": "PHY201", "name": "Physics" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["data"]["code"], "PHY201");
        assert_eq!(body["data"]["total_lectures_possible"], 12);
        assert_eq!(body["data"]["lecturer_id"], ctx.lecturer.id);

        let response = app
            .oneshot(json_request(
                "POST",
                "/courses/",
                Some(&auth),
                json!({ "code": "MATH101", "name": "Again" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(response).await["success"], false);
    }

    #[tokio::test]
    async fn negative_lecture_count_is_rejected() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/courses/",
                Some(&bearer(&ctx.lecturer)),
                json!({ "code": "X1", "name": "X", "total_lectures_possible": -1 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["message"],
            "Total lectures cannot be negative"
        );
    }

    #[tokio::test]
    async fn enroll_student_creates_and_enrolls() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;
        let uri = format!("/courses/{}/students", ctx.course.id);

        let response = app
            .oneshot(json_request(
                "POST",
                &uri,
                Some(&bearer(&ctx.lecturer)),
                json!({ "index_number": "5005", "full_name": "Efua Mensah" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["data"]["full_name"], "Efua Mensah");
        assert!(course_student::Model::exists(&db, ctx.course.id, "5005").await.unwrap());
    }

    #[tokio::test]
    async fn other_lecturer_cannot_touch_the_course() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;
        let uri = format!("/courses/{}/max-marks", ctx.course.id);

        let response = app
            .oneshot(json_request(
                "PUT",
                &uri,
                Some(&bearer(&ctx.other)),
                json!({ "max_attendance_marks": 50 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let marks = max_marks::Model::for_course(&db, ctx.course.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(marks.max_attendance_marks, 10);
    }

    #[tokio::test]
    async fn set_max_marks_updates_one_field() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;
        let uri = format!("/courses/{}/max-marks", ctx.course.id);

        let response = app
            .oneshot(json_request(
                "PUT",
                &uri,
                Some(&bearer(&ctx.lecturer)),
                json!({ "total_class_score": 60 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["total_class_score"], 60);
        assert_eq!(body["data"]["max_attendance_marks"], 10);
    }

    #[tokio::test]
    async fn unknown_course_is_not_found() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;

        let response = app
            .oneshot(json_request(
                "PUT",
                "/courses/9999/max-marks",
                Some(&bearer(&ctx.lecturer)),
                json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
