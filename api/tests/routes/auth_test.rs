#[cfg(test)]
mod tests {
    use crate::helpers::app::{body_json, get, json_request, make_test_app, seed};
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn login_returns_a_usable_token() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/auth/login",
                None,
                json!({ "username": "lecturer", "password": "password" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], ctx.lecturer.id);
        assert_eq!(body["data"]["username"], "lecturer");
        assert_eq!(body["data"]["admin"], false);
        assert!(body["data"]["expires_at"].is_string());

        let token = body["data"]["token"].as_str().unwrap();
        let auth = format!("Bearer {token}");
        let response = app.oneshot(get("/courses/", Some(&auth))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let (app, db) = make_test_app().await;
        seed(&db).await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/auth/login",
                None,
                json!({ "username": "lecturer", "password": "nope" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid username or password");
    }

    #[tokio::test]
    async fn blank_credentials_fail_validation() {
        let (app, _db) = make_test_app().await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/auth/login",
                None,
                json!({ "username": "", "password": "x" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["message"], "Username is required");
    }

    #[tokio::test]
    async fn lecturer_routes_require_a_token() {
        let (app, _db) = make_test_app().await;

        for uri in ["/", "/courses/", "/attendance/record/", "/attendance/generate/", "/grades/"] {
            let response = app.clone().oneshot(get(uri, None)).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
        }

        let response = app
            .oneshot(get("/courses/", Some("Bearer not-a-jwt")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["message"], "Authentication required");
    }
}
