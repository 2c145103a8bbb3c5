#[cfg(test)]
mod tests {
    use crate::helpers::app::{bearer, body_json, form, get, make_test_app, seed};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn dashboard_lists_own_courses_only() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;

        let response = app
            .clone()
            .oneshot(get("/", Some(&bearer(&ctx.lecturer))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["title"], "Lecturer Dashboard");
        assert_eq!(body["data"]["courses"][0]["code"], "MATH101");

        let response = app
            .oneshot(form("POST", "/", Some(&bearer(&ctx.other)), ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["courses"].as_array().unwrap().len(), 0);
    }
}
