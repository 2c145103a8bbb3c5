#[cfg(test)]
mod tests {
    use crate::helpers::app::{bearer, body_json, form, get, make_test_app, seed};
    use axum::http::StatusCode;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use db::models::session_key;
    use tower::ServiceExt;

    #[tokio::test]
    async fn generate_form_lists_courses() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;

        let response = app
            .oneshot(get("/attendance/generate/", Some(&bearer(&ctx.lecturer))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["title"], "Generate Attendance QR");
        assert_eq!(body["data"]["courses"][0]["id"], ctx.course.id);
    }

    #[tokio::test]
    async fn generate_issues_session_with_png_qr() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;
        let body = format!("course_id={}&duration=15", ctx.course.id);

        let response = app
            .oneshot(form("POST", "/attendance/generate/", Some(&bearer(&ctx.lecturer)), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        let data = &json["data"];

        let key = data["session_key"].as_str().unwrap();
        assert_eq!(key.len(), 64);
        assert!(
            data["scan_url"]
                .as_str()
                .unwrap()
                .ends_with(&format!("/attendance/scan/{key}/"))
        );
        assert_eq!(data["course"]["code"], "MATH101");
        assert!(data["location"]["tolerance_m"].is_number());

        let png = STANDARD.decode(data["qr_image"].as_str().unwrap()).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let stored = session_key::Model::find_by_key(&db, key).await.unwrap().unwrap();
        assert_eq!(stored.created_by, ctx.lecturer.id);
        assert_eq!(stored.expires_at - stored.created_at, chrono::Duration::minutes(15));
    }

    #[tokio::test]
    async fn out_of_range_duration_is_rejected() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;
        let body = format!("course_id={}&duration=0", ctx.course.id);

        let response = app
            .oneshot(form("POST", "/attendance/generate/", Some(&bearer(&ctx.lecturer)), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn generating_for_foreign_course_is_forbidden() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;
        let body = format!("course_id={}", ctx.course.id);

        let response = app
            .oneshot(form("POST", "/attendance/generate/", Some(&bearer(&ctx.other)), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
