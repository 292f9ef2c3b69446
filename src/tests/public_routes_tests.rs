#[cfg(test)]
mod tests {
    use crate::test_utils::{create_offline_app, send};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_health_reports_missing_database() {
        let app = create_offline_app();
        let (status, body) = send(&app, "GET", "/api/health", None, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], "not_configured");
    }

    #[tokio::test]
    async fn test_content_lists_degrade_to_empty() {
        let app = create_offline_app();

        for uri in ["/api/blog", "/api/blog/tags", "/api/faqs?category=billing", "/api/locations", "/api/team"] {
            let (status, body) = send(&app, "GET", uri, None, None).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(body, serde_json::json!([]), "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_single_items_are_not_found_without_database() {
        let app = create_offline_app();

        let (status, body) = send(&app, "GET", "/api/blog/some-post", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");

        let (status, _) = send(&app, "GET", "/api/locations/riverside", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_seo_uses_static_table_without_database() {
        let app = create_offline_app();

        let (status, body) = send(&app, "GET", "/api/seo?path=/About/", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "static");
        assert_eq!(body["metadata"]["page_path"], "/about");
        assert_eq!(body["metadata"]["title"], "About Us | Test Clinic");
        assert_eq!(body["metadata"]["canonical_url"], "https://clinic.example/about");
    }

    #[tokio::test]
    async fn test_seo_default_for_unknown_page() {
        let app = create_offline_app();

        let (status, body) = send(&app, "GET", "/api/seo?path=/programs/teen-iop", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "default");
        assert_eq!(body["metadata"]["title"], "Teen Iop | Test Clinic");
    }

    #[tokio::test]
    async fn test_seo_requires_path() {
        let app = create_offline_app();

        let (status, body) = send(&app, "GET", "/api/seo", None, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_unparseable_limit_is_bad_request() {
        let app = create_offline_app();

        let (status, body) = send(&app, "GET", "/api/blog?limit=abc", None, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
        assert_eq!(body["status"], 400);
    }
}
