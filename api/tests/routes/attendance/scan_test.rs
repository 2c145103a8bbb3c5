#[cfg(test)]
mod tests {
    use crate::helpers::app::{TestCtx, body_json, form, get, make_test_app, seed};
    use axum::http::StatusCode;
    use chrono::{Duration, Utc};
    use db::models::attendance_record;
    use db::models::session_key::{self, NewSessionKey};
    use sea_orm::DatabaseConnection;
    use tower::ServiceExt;
    use util::geo::Coordinate;

    const CAMPUS_FORM: &str = "latitude=6.6710&longitude=-1.5658";

    /// A geofenced session around campus, opened `opened_ago` before now.
    async fn open_session(
        db: &DatabaseConnection,
        ctx: &TestCtx,
        opened_ago: Duration,
    ) -> session_key::Model {
        session_key::Model::create(
            db,
            NewSessionKey {
                course_id: ctx.course.id,
                created_by: ctx.lecturer.id,
                duration: Duration::minutes(10),
                required_location: Some(Coordinate::new(6.6710, -1.5658)),
                location_tolerance_m: 50,
            },
            Utc::now() - opened_ago,
        )
        .await
        .unwrap()
    }

    fn scan_uri(key: &str) -> String {
        format!("/attendance/scan/{key}/")
    }

    #[tokio::test]
    async fn scan_form_shows_course_without_a_token() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;
        let session = open_session(&db, &ctx, Duration::zero()).await;

        let response = app.oneshot(get(&scan_uri(&session.key), None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["course_code"], "MATH101");
        assert_eq!(body["data"]["location_required"], true);
    }

    #[tokio::test]
    async fn unknown_key_is_not_found() {
        let (app, _db) = make_test_app().await;
        let response = app.oneshot(get(&scan_uri("missing"), None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn scan_on_campus_marks_attendance() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;
        let session = open_session(&db, &ctx, Duration::zero()).await;

        let response = app
            .oneshot(form(
                "POST",
                &scan_uri(&session.key),
                None,
                &format!("full_name=&index_number=1001&{CAMPUS_FORM}"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Attendance marked for Ama Serwaa");
        assert_eq!(body["data"]["distance_m"], 0.0);
        assert_eq!(
            attendance_record::Model::count_for_student(&db, ctx.course.id, "1001")
                .await
                .unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn name_alone_resolves_an_enrolled_student() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;
        let session = open_session(&db, &ctx, Duration::zero()).await;

        let response = app
            .oneshot(form(
                "POST",
                &scan_uri(&session.key),
                None,
                &format!("full_name=kwame+mensah&{CAMPUS_FORM}"),
            ))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["index_number"], "1002");
    }

    #[tokio::test]
    async fn expired_session_rejects_with_success_false() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;
        let session = open_session(&db, &ctx, Duration::minutes(30)).await;

        let response = app
            .clone()
            .oneshot(form(
                "POST",
                &scan_uri(&session.key),
                None,
                &format!("index_number=1001&{CAMPUS_FORM}"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Attendance session has expired.");

        let response = app.oneshot(get(&scan_uri(&session.key), None)).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Attendance session has expired.");
    }

    #[tokio::test]
    async fn far_away_scan_reports_distance() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;
        let session = open_session(&db, &ctx, Duration::zero()).await;

        // ~1 km north of the required coordinate
        let response = app
            .oneshot(form(
                "POST",
                &scan_uri(&session.key),
                None,
                "index_number=1001&latitude=6.6799932&longitude=-1.5658",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        let message = body["message"].as_str().unwrap();
        assert!(message.starts_with("You are too far"), "{message}");
        assert!(message.ends_with("m away)."), "{message}");
    }

    #[tokio::test]
    async fn missing_location_is_required() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;
        let session = open_session(&db, &ctx, Duration::zero()).await;

        let response = app
            .oneshot(form("POST", &scan_uri(&session.key), None, "index_number=1001"))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().starts_with("Location is required"));
    }

    #[tokio::test]
    async fn not_enrolled_student_is_rejected() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;
        let session = open_session(&db, &ctx, Duration::zero()).await;

        let response = app
            .oneshot(form(
                "POST",
                &scan_uri(&session.key),
                None,
                &format!("index_number=2001&{CAMPUS_FORM}"),
            ))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "You are not enrolled in this course.");
    }

    #[tokio::test]
    async fn repeat_scan_is_already_marked() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;
        let session = open_session(&db, &ctx, Duration::zero()).await;
        let body = format!("index_number=1003&{CAMPUS_FORM}");

        let first = app
            .clone()
            .oneshot(form("POST", &scan_uri(&session.key), None, &body))
            .await
            .unwrap();
        assert_eq!(body_json(first).await["success"], true);

        let second = app
            .oneshot(form("POST", &scan_uri(&session.key), None, &body))
            .await
            .unwrap();
        let json = body_json(second).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Attendance has already been marked for this session.");
    }

    #[tokio::test]
    async fn overlong_name_is_a_bad_request() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;
        let session = open_session(&db, &ctx, Duration::zero()).await;
        let body = format!("full_name={}&{CAMPUS_FORM}", "a".repeat(151));

        let response = app
            .oneshot(form("POST", &scan_uri(&session.key), None, &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Full name must be at most 150 characters");
        for index in ["1001", "1002", "1003"] {
            let records = attendance_record::Model::count_for_student(&db, ctx.course.id, index)
                .await
                .unwrap();
            assert_eq!(records, 0);
        }
    }
}
