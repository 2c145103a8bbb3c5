#[cfg(test)]
mod tests {
    use crate::helpers::app::{body_json, get, make_test_app};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_check_returns_ok_json() {
        let (app, _db) = make_test_app().await;

        let response = app.oneshot(get("/health", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["database"], true);
        assert_eq!(json["message"], "Health check passed");
    }
}
