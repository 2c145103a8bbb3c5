#[cfg(test)]
mod tests {
    use crate::helpers::app::{bearer, body_json, form, get, make_test_app, seed};
    use axum::http::StatusCode;
    use chrono::Utc;
    use db::models::attendance_record;
    use tower::ServiceExt;

    #[tokio::test]
    async fn grades_form_lists_courses() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;

        let response = app
            .oneshot(get("/grades/", Some(&bearer(&ctx.lecturer))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["title"], "View Student Grades");
        assert_eq!(body["data"]["courses"][0]["code"], "MATH101");
    }

    #[tokio::test]
    async fn six_of_twelve_lectures_scores_five() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;

        for week in 1..=6 {
            attendance_record::Model::record(
                &db,
                ctx.course.id,
                "1001",
                &format!("Week {week}"),
                Utc::now(),
                None,
            )
            .await
            .unwrap();
        }

        let response = app
            .oneshot(form(
                "POST",
                "/grades/",
                Some(&bearer(&ctx.lecturer)),
                &format!("course_id={}", ctx.course.id),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let rows = body["data"]["students"].as_array().unwrap();
        assert_eq!(rows.len(), 3);

        // Ordered by full name: Ama, Kofi, Kwame.
        assert_eq!(rows[0]["index_number"], "1001");
        assert_eq!(rows[0]["attendance_score"], 5.0);
        assert_eq!(rows[0]["attended"], 6);
        assert_eq!(rows[0]["missed"], 6);
        assert_eq!(rows[0]["warning"], "CRITICAL");
        assert_eq!(rows[1]["full_name"], "Kofi Boateng");
        assert_eq!(rows[1]["attendance_score"], 0.0);
    }

    #[tokio::test]
    async fn grades_for_foreign_course_are_forbidden() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;

        let response = app
            .oneshot(form(
                "POST",
                "/grades/",
                Some(&bearer(&ctx.other)),
                &format!("course_id={}", ctx.course.id),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn non_numeric_course_id_is_rejected_in_envelope() {
        let (app, db) = make_test_app().await;
        let ctx = seed(&db).await;

        let response = app
            .oneshot(form("POST", "/grades/", Some(&bearer(&ctx.lecturer)), "course_id=abc"))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().starts_with("Invalid form"));
    }
}
