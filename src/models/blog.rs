use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{errors::ApiError, validation};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub cover_image_url: Option<String>,
    pub tags: Vec<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBlogPost {
    pub title: String,
    /// Derived from the title when omitted
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateBlogPost {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub cover_image_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BlogListQuery {
    /// Only posts carrying this tag
    pub tag: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl BlogListQuery {
    pub const DEFAULT_LIMIT: i64 = 20;
    pub const MAX_LIMIT: i64 = 100;

    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    /// The trimmed tag filter; blank means no filter.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

impl CreateBlogPost {
    /// Trim, default and check the payload; the result is ready for insertion.
    pub fn validate(self) -> Result<Self, ApiError> {
        let title = validation::require_text("title", &self.title)?;
        let slug = validation::resolve_slug(self.slug.as_deref(), &title)?;
        let published_at = match (self.published, self.published_at) {
            (true, None) => Some(Utc::now()),
            (_, at) => at,
        };

        Ok(Self {
            slug: Some(slug),
            excerpt: self.excerpt.trim().to_string(),
            content: validation::require_text("content", &self.content)?,
            author: validation::bounded_text("author", &self.author, validation::NAME_MAX)?,
            cover_image_url: validation::optional_url("cover_image_url", self.cover_image_url)?,
            tags: validation::normalize_list(self.tags),
            published: self.published,
            published_at,
            title,
        })
    }
}

impl UpdateBlogPost {
    /// Merge the patch into `post`. Absent fields keep their value; an empty
    /// `cover_image_url` clears it.
    pub fn apply(self, mut post: BlogPost) -> Result<BlogPost, ApiError> {
        if let Some(title) = self.title {
            post.title = validation::require_text("title", &title)?;
        }
        if let Some(slug) = self.slug {
            post.slug = validation::resolve_slug(Some(&slug), &post.title)?;
        }
        if let Some(excerpt) = self.excerpt {
            post.excerpt = excerpt.trim().to_string();
        }
        if let Some(content) = self.content {
            post.content = validation::require_text("content", &content)?;
        }
        if let Some(author) = self.author {
            post.author = validation::bounded_text("author", &author, validation::NAME_MAX)?;
        }
        if self.cover_image_url.is_some() {
            post.cover_image_url = validation::optional_url("cover_image_url", self.cover_image_url)?;
        }
        if let Some(tags) = self.tags {
            post.tags = validation::normalize_list(tags);
        }
        if let Some(published_at) = self.published_at {
            post.published_at = Some(published_at);
        }
        if let Some(published) = self.published {
            post.published = published;
        }
        if post.published && post.published_at.is_none() {
            post.published_at = Some(Utc::now());
        }
        Ok(post)
    }
}
