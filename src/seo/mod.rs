//! Per-page SEO metadata with a two-tier lookup: stored records first,
//! then the built-in table in [`fallback`].

pub mod fallback;

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::models::{ResolvedSeo, SeoMetadata, SeoSource};
pub use fallback::SiteIdentity;

/// Where stored SEO records are read from.
#[async_trait]
pub trait SeoStore: Send + Sync {
    async fn find_by_path(&self, page_path: &str) -> Result<Option<SeoMetadata>>;
}

/// Canonical form of a page path used as the lookup key.
///
/// `"/About/?utm=x#team"` -> `"/about"`, `""` -> `"/"`.
pub fn normalize_path(raw: &str) -> String {
    let without_fragment = raw.split('#').next().unwrap_or("");
    let without_query = without_fragment.split('?').next().unwrap_or("");

    let segments: Vec<String> = without_query
        .trim()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_lowercase())
        .collect();

    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

#[derive(Clone)]
pub struct SeoResolver {
    store: Option<Arc<dyn SeoStore>>,
    site: SiteIdentity,
}

impl SeoResolver {
    /// `store` is `None` when no database is configured.
    pub fn new(store: Option<Arc<dyn SeoStore>>, site: SiteIdentity) -> Self {
        Self { store, site }
    }

    pub async fn resolve(&self, raw_path: &str) -> ResolvedSeo {
        let path = normalize_path(raw_path);

        if let Some(store) = &self.store {
            match store.find_by_path(&path).await {
                Ok(Some(record)) => {
                    return ResolvedSeo {
                        source: SeoSource::Database,
                        metadata: record.into(),
                    };
                }
                Ok(None) => debug!("No stored SEO metadata for {}, using fallback", path),
                Err(e) => warn!("SEO lookup for {} failed, using fallback: {}", path, e),
            }
        }

        self.fallback(&path)
    }

    /// Static table entry or, failing that, the site default.
    pub fn fallback(&self, normalized_path: &str) -> ResolvedSeo {
        match fallback::static_entry(&self.site, normalized_path) {
            Some(metadata) => ResolvedSeo {
                source: SeoSource::Static,
                metadata,
            },
            None => ResolvedSeo {
                source: SeoSource::Default,
                metadata: fallback::default_entry(&self.site, normalized_path),
            },
        }
    }
}
