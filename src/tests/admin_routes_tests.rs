#[cfg(test)]
mod tests {
    use crate::models::UserRole;
    use crate::test_utils::{create_offline_app, send, token_for_role};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_admin_routes_require_token() {
        let app = create_offline_app();

        let (status, body) = send(&app, "GET", "/api/admin/blog", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "UNAUTHORIZED");

        let (status, _) = send(&app, "GET", "/api/admin/permissions", Some("garbage"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_permissions_endpoint_returns_callers_table() {
        let app = create_offline_app();
        let token = token_for_role(UserRole::Editor);

        let (status, body) = send(&app, "GET", "/api/admin/permissions", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "editor");

        let resources = body["resources"].as_array().unwrap();
        assert_eq!(resources.len(), 6);
        let users = resources.iter().find(|r| r["resource"] == "users").unwrap();
        assert_eq!(users["can_read"], false);
    }

    #[tokio::test]
    async fn test_viewer_cannot_mutate_content() {
        let app = create_offline_app();
        let token = token_for_role(UserRole::Viewer);
        let id = uuid::Uuid::new_v4();

        // bodies must deserialize, otherwise the JSON extractor rejects first
        let attempts = [
            ("POST", "/api/admin/blog".to_string(), Some(json!({"title": "t", "content": "c", "author": "a"}))),
            ("PUT", format!("/api/admin/faqs/{}", id), Some(json!({"answer": "updated"}))),
            ("DELETE", format!("/api/admin/locations/{}", id), None),
            ("POST", "/api/admin/team".to_string(), Some(json!({"name": "n", "title": "t"}))),
            ("DELETE", format!("/api/admin/seo/{}", id), None),
        ];

        for (method, uri, body) in attempts {
            let (status, response) = send(&app, method, &uri, Some(&token), body).await;
            assert_eq!(status, StatusCode::FORBIDDEN, "{} {}", method, uri);
            assert_eq!(response["code"], "FORBIDDEN");
        }
    }

    #[tokio::test]
    async fn test_editor_cannot_delete_locations_or_manage_users() {
        let app = create_offline_app();
        let token = token_for_role(UserRole::Editor);
        let id = uuid::Uuid::new_v4();

        let (status, _) = send(&app, "DELETE", &format!("/api/admin/locations/{}", id), Some(&token), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = send(&app, "GET", "/api/users", Some(&token), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_permitted_request_without_database_is_unavailable() {
        let app = create_offline_app();
        let token = token_for_role(UserRole::Editor);

        let (status, body) = send(&app, "GET", "/api/admin/blog", Some(&token), None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], "SERVICE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_invalid_payload_rejected_before_database() {
        let app = create_offline_app();
        let token = token_for_role(UserRole::Admin);

        let (status, body) = send(
            &app,
            "POST",
            "/api/admin/blog",
            Some(&token),
            Some(json!({"title": "Hello", "slug": "Not A Slug", "content": "x", "author": "y"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_missing_field_uses_error_body() {
        let app = create_offline_app();
        let token = token_for_role(UserRole::Admin);

        let (status, body) = send(&app, "POST", "/api/admin/blog", Some(&token), Some(json!({"title": "x"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
        assert_eq!(body["status"], 400);
        assert!(body["error"].as_str().unwrap().contains("content"));
    }

    #[tokio::test]
    async fn test_malformed_record_id_uses_error_body() {
        let app = create_offline_app();
        let token = token_for_role(UserRole::Admin);

        for uri in ["/api/admin/blog/not-a-uuid", "/api/admin/locations/123", "/api/users/abc"] {
            let (status, body) = send(&app, "GET", uri, Some(&token), None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body["code"], "BAD_REQUEST");
        }
    }

    #[tokio::test]
    async fn test_overlong_slug_is_bad_request() {
        let app = create_offline_app();
        let token = token_for_role(UserRole::Admin);
        let slug = "a".repeat(300);

        let (status, body) = send(
            &app,
            "POST",
            "/api/admin/blog",
            Some(&token),
            Some(json!({"title": "Hello", "slug": slug, "content": "x", "author": "y"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("slug"));
    }

    #[tokio::test]
    async fn test_admin_cannot_change_own_role() {
        let app = create_offline_app();
        let token = token_for_role(UserRole::Admin);
        let claims = crate::auth::verify_jwt(&token, crate::test_utils::TEST_JWT_SECRET).unwrap();

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/users/{}", claims.sub),
            Some(&token),
            Some(json!({"role": "viewer"})),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["code"], "FORBIDDEN");
    }

    #[tokio::test]
    async fn test_admin_cannot_delete_self() {
        let app = create_offline_app();
        let token = token_for_role(UserRole::Admin);
        let claims = crate::auth::verify_jwt(&token, crate::test_utils::TEST_JWT_SECRET).unwrap();

        let (status, _) = send(&app, "DELETE", &format!("/api/users/{}", claims.sub), Some(&token), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_login_without_database_is_unavailable() {
        let app = create_offline_app();

        let (status, _) = send(
            &app,
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"username": "admin", "password": "adminpass123"})),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
