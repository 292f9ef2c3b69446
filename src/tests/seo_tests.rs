#[cfg(test)]
mod tests {
    use crate::models::{SeoMetadata, SeoSource};
    use crate::seo::{fallback, normalize_path, SeoResolver, SeoStore, SiteIdentity};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    fn site() -> SiteIdentity {
        SiteIdentity {
            name: "Test Clinic".to_string(),
            url: Some("https://clinic.example".to_string()),
        }
    }

    fn stored(path: &str, title: &str) -> SeoMetadata {
        SeoMetadata {
            id: Uuid::new_v4(),
            page_path: path.to_string(),
            title: title.to_string(),
            description: "From the database".to_string(),
            keywords: vec!["stored".to_string()],
            og_title: None,
            og_description: None,
            og_image: None,
            canonical_url: None,
            no_index: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// Store with canned records that remembers which paths were asked for.
    struct FakeStore {
        records: Vec<SeoMetadata>,
        lookups: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SeoStore for FakeStore {
        async fn find_by_path(&self, page_path: &str) -> anyhow::Result<Option<SeoMetadata>> {
            self.lookups.lock().unwrap().push(page_path.to_string());
            Ok(self.records.iter().find(|r| r.page_path == page_path).cloned())
        }
    }

    struct FailingStore;

    #[async_trait]
    impl SeoStore for FailingStore {
        async fn find_by_path(&self, _page_path: &str) -> anyhow::Result<Option<SeoMetadata>> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("about"), "/about");
        assert_eq!(normalize_path("/About/"), "/about");
        assert_eq!(normalize_path("//services///family-therapy/"), "/services/family-therapy");
        assert_eq!(normalize_path("/blog?page=2#top"), "/blog");
        assert_eq!(normalize_path("  /contact  "), "/contact");
        assert_eq!(normalize_path("/?utm_source=x"), "/");
    }

    #[test]
    fn test_every_static_path_is_normalized() {
        for path in fallback::static_paths() {
            assert_eq!(normalize_path(path), path);
        }
    }

    #[tokio::test]
    async fn test_database_record_wins() {
        let store = Arc::new(FakeStore {
            records: vec![stored("/about", "Stored About")],
            lookups: Mutex::new(Vec::new()),
        });
        let resolver = SeoResolver::new(Some(store.clone()), site());

        let resolved = resolver.resolve("/About/").await;
        assert_eq!(resolved.source, SeoSource::Database);
        assert_eq!(resolved.metadata.title, "Stored About");
        assert!(resolved.metadata.no_index);
        assert_eq!(store.lookups.lock().unwrap().as_slice(), ["/about"]);
    }

    #[tokio::test]
    async fn test_missing_record_falls_back_to_static_table() {
        let store = Arc::new(FakeStore {
            records: vec![],
            lookups: Mutex::new(Vec::new()),
        });
        let resolver = SeoResolver::new(Some(store), site());

        let resolved = resolver.resolve("/services").await;
        assert_eq!(resolved.source, SeoSource::Static);
        assert_eq!(resolved.metadata.title, "Our Services | Test Clinic");
        assert_eq!(
            resolved.metadata.canonical_url.as_deref(),
            Some("https://clinic.example/services")
        );
        assert!(!resolved.metadata.keywords.is_empty());
    }

    #[tokio::test]
    async fn test_store_error_falls_back_to_static_table() {
        let resolver = SeoResolver::new(Some(Arc::new(FailingStore)), site());

        let resolved = resolver.resolve("/privacy-policy").await;
        assert_eq!(resolved.source, SeoSource::Static);
        assert_eq!(resolved.metadata.page_path, "/privacy-policy");
    }

    #[tokio::test]
    async fn test_no_store_uses_static_table() {
        let resolver = SeoResolver::new(None, site());

        let home = resolver.resolve("/").await;
        assert_eq!(home.source, SeoSource::Static);
        assert_eq!(home.metadata.canonical_url.as_deref(), Some("https://clinic.example"));
    }

    #[tokio::test]
    async fn test_unknown_path_gets_default_entry() {
        let resolver = SeoResolver::new(Some(Arc::new(FailingStore)), site());

        let resolved = resolver.resolve("/services/family_therapy-programs").await;
        assert_eq!(resolved.source, SeoSource::Default);
        assert_eq!(resolved.metadata.title, "Family Therapy Programs | Test Clinic");
        assert_eq!(resolved.metadata.page_path, "/services/family_therapy-programs");
        assert!(!resolved.metadata.description.is_empty());
    }

    #[test]
    fn test_default_entry_without_site_url_has_no_canonical() {
        let site = SiteIdentity {
            name: "Test Clinic".to_string(),
            url: None,
        };
        let entry = fallback::default_entry(&site, "/new-page");
        assert_eq!(entry.title, "New Page | Test Clinic");
        assert!(entry.canonical_url.is_none());
    }
}
