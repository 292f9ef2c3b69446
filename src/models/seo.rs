use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{errors::ApiError, validation};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SeoMetadata {
    pub id: Uuid,
    pub page_path: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub canonical_url: Option<String>,
    pub no_index: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSeoMetadata {
    pub page_path: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub canonical_url: Option<String>,
    #[serde(default)]
    pub no_index: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateSeoMetadata {
    pub page_path: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub canonical_url: Option<String>,
    pub no_index: Option<bool>,
}

/// Where a resolved SEO record came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SeoSource {
    Database,
    Static,
    Default,
}

/// The page-facing view of SEO metadata, independent of its origin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PageSeo {
    pub page_path: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub canonical_url: Option<String>,
    pub no_index: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResolvedSeo {
    pub source: SeoSource,
    pub metadata: PageSeo,
}

#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SeoQuery {
    /// Page path, e.g. `/about`
    pub path: String,
}

impl From<SeoMetadata> for PageSeo {
    fn from(record: SeoMetadata) -> Self {
        Self {
            page_path: record.page_path,
            title: record.title,
            description: record.description,
            keywords: record.keywords,
            og_title: record.og_title,
            og_description: record.og_description,
            og_image: record.og_image,
            canonical_url: record.canonical_url,
            no_index: record.no_index,
        }
    }
}

impl CreateSeoMetadata {
    pub fn validate(self) -> Result<Self, ApiError> {
        Ok(Self {
            page_path: validate_page_path(&self.page_path)?,
            title: validation::require_text("title", &self.title)?,
            description: self.description.trim().to_string(),
            keywords: validation::normalize_list(self.keywords),
            og_title: validation::optional_text(self.og_title),
            og_description: validation::optional_text(self.og_description),
            og_image: validation::optional_url("og_image", self.og_image)?,
            canonical_url: validation::optional_url("canonical_url", self.canonical_url)?,
            no_index: self.no_index,
        })
    }
}

impl UpdateSeoMetadata {
    pub fn apply(self, mut record: SeoMetadata) -> Result<SeoMetadata, ApiError> {
        if let Some(page_path) = self.page_path {
            record.page_path = validate_page_path(&page_path)?;
        }
        if let Some(title) = self.title {
            record.title = validation::require_text("title", &title)?;
        }
        if let Some(description) = self.description {
            record.description = description.trim().to_string();
        }
        if let Some(keywords) = self.keywords {
            record.keywords = validation::normalize_list(keywords);
        }
        if self.og_title.is_some() {
            record.og_title = validation::optional_text(self.og_title);
        }
        if self.og_description.is_some() {
            record.og_description = validation::optional_text(self.og_description);
        }
        if self.og_image.is_some() {
            record.og_image = validation::optional_url("og_image", self.og_image)?;
        }
        if self.canonical_url.is_some() {
            record.canonical_url = validation::optional_url("canonical_url", self.canonical_url)?;
        }
        if let Some(no_index) = self.no_index {
            record.no_index = no_index;
        }
        Ok(record)
    }
}

/// Stored paths are always in `normalize_path` form so lookups match.
fn validate_page_path(raw: &str) -> Result<String, ApiError> {
    let trimmed = validation::require_text("page_path", raw)?;
    if trimmed.contains("://") {
        return Err(ApiError::bad_request("'page_path' must be a site-relative path like /about"));
    }
    let path = crate::seo::normalize_path(&trimmed);
    validation::max_len("page_path", &path, validation::PAGE_PATH_MAX)?;
    Ok(path)
}
