#[cfg(test)]
mod tests {
    use crate::helpers::app::{bearer, body_json, form, get, make_test_app, seed};
    use axum::http::StatusCode;
    use db::models::attendance_record;
    use tower::ServiceExt;

    #[tokio::test]
    async fn roster_is_ordered_by_name() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;
        let uri = format!("/attendance/record/?course_id={}", ctx.course.id);

        let response = app
            .oneshot(get(&uri, Some(&bearer(&ctx.lecturer))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["selected_course"]["code"], "MATH101");
        let names: Vec<_> = body["data"]["students"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["full_name"].as_str().unwrap().to_owned())
            .collect();
        assert_eq!(names, vec!["Ama Serwaa", "Kofi Boateng", "Kwame Mensah"]);
    }

    #[tokio::test]
    async fn roster_without_course_has_no_selection() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;

        let response = app
            .oneshot(get("/attendance/record/", Some(&bearer(&ctx.lecturer))))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert!(body["data"]["selected_course"].is_null());
        assert_eq!(body["data"]["courses"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn second_submission_of_a_session_is_rejected() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;
        let auth = bearer(&ctx.lecturer);
        let body = format!(
            "course_id={}&session_key=Week+1&present_students=1001&present_students=1002",
            ctx.course.id
        );

        let response = app
            .clone()
            .oneshot(form("POST", "/attendance/record/", Some(&auth), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["data"]["recorded"], 2);
        assert_eq!(json["data"]["session_key"], "Week 1");

        let again = format!(
            "course_id={}&session_key=Week+1&present_students=1003",
            ctx.course.id
        );
        let response = app
            .oneshot(form("POST", "/attendance/record/", Some(&auth), &again))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(
            json["message"],
            "Attendance for session \"Week 1\" has already been recorded for this course."
        );
        assert_eq!(
            attendance_record::Model::count_for_student(&db, ctx.course.id, "1003")
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn unknown_student_is_not_found() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;
        let body = format!(
            "course_id={}&session_key=Week+3&present_students=4242",
            ctx.course.id
        );

        let response = app
            .oneshot(form("POST", "/attendance/record/", Some(&bearer(&ctx.lecturer)), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn blank_session_key_is_a_bad_request() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;
        let body = format!("course_id={}&session_key=+++", ctx.course.id);

        let response = app
            .oneshot(form("POST", "/attendance/record/", Some(&bearer(&ctx.lecturer)), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_course_id_is_rejected_in_envelope() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;

        let response = app
            .oneshot(form(
                "POST",
                "/attendance/record/",
                Some(&bearer(&ctx.lecturer)),
                "session_key=week-1&present_students=1001",
            ))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().starts_with("Invalid form"));
    }
}
