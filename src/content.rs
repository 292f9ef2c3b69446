//! Read side used by the public site.
//!
//! Pages never fail because of the content database: any error (or no
//! database at all) is logged and the page gets an empty list or `None`,
//! and renders its empty state.

use std::future::Future;
use tracing::{debug, error};

use crate::db::Database;
use crate::models::{normalize_category, BlogListQuery, BlogPost, Faq, Location, TeamMember};

#[derive(Clone, Copy)]
pub struct PublicContent<'a> {
    db: Option<&'a Database>,
}

impl<'a> PublicContent<'a> {
    pub fn new(db: Option<&'a Database>) -> Self {
        Self { db }
    }

    pub async fn blog_posts(&self, query: &BlogListQuery) -> Vec<BlogPost> {
        self.list("blog posts", |db| db.get_published_blog_posts(query)).await
    }

    pub async fn blog_post(&self, slug: &str) -> Option<BlogPost> {
        self.one("blog post", |db| db.get_published_blog_post_by_slug(slug)).await
    }

    pub async fn blog_tags(&self) -> Vec<String> {
        self.list("blog tags", |db| db.get_blog_tags()).await
    }

    pub async fn faqs(&self, category: Option<&str>) -> Vec<Faq> {
        let category = match category.map(normalize_category) {
            Some(Ok(c)) => Some(c),
            // blank filter means no filter
            Some(Err(_)) | None => None,
        };
        self.list("FAQs", |db| db.get_active_faqs(category.as_deref())).await
    }

    pub async fn locations(&self) -> Vec<Location> {
        self.list("locations", |db| db.get_active_locations()).await
    }

    pub async fn location(&self, slug: &str) -> Option<Location> {
        self.one("location", |db| db.get_active_location_by_slug(slug)).await
    }

    pub async fn team_members(&self) -> Vec<TeamMember> {
        self.list("team members", |db| db.get_active_team_members()).await
    }

    async fn list<T, F, Fut>(&self, what: &str, fetch: F) -> Vec<T>
    where
        F: FnOnce(&'a Database) -> Fut,
        Fut: Future<Output = anyhow::Result<Vec<T>>>,
    {
        let Some(db) = self.db else {
            debug!("Content database not configured; returning no {}", what);
            return Vec::new();
        };
        match fetch(db).await {
            Ok(items) => items,
            Err(e) => {
                error!("Failed to fetch {}: {}", what, e);
                Vec::new()
            }
        }
    }

    async fn one<T, F, Fut>(&self, what: &str, fetch: F) -> Option<T>
    where
        F: FnOnce(&'a Database) -> Fut,
        Fut: Future<Output = anyhow::Result<Option<T>>>,
    {
        let Some(db) = self.db else {
            debug!("Content database not configured; no {} available", what);
            return None;
        };
        match fetch(db).await {
            Ok(item) => item,
            Err(e) => {
                error!("Failed to fetch {}: {}", what, e);
                None
            }
        }
    }
}
