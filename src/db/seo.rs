use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{CreateSeoMetadata, SeoMetadata};
use crate::seo::SeoStore;
use super::Database;

const SEO_COLUMNS: &str = "id, page_path, title, description, keywords, og_title, og_description, \
    og_image, canonical_url, no_index, created_at, updated_at";

impl Database {
    pub async fn get_all_seo_metadata(&self) -> Result<Vec<SeoMetadata>> {
        let records = sqlx::query_as::<_, SeoMetadata>(&format!(
            "SELECT {SEO_COLUMNS} FROM seo_metadata ORDER BY page_path"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn get_seo_metadata_by_id(&self, id: Uuid) -> Result<Option<SeoMetadata>> {
        let record = sqlx::query_as::<_, SeoMetadata>(&format!(
            "SELECT {SEO_COLUMNS} FROM seo_metadata WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// `page_path` must already be normalized.
    pub async fn get_seo_metadata_by_path(&self, page_path: &str) -> Result<Option<SeoMetadata>> {
        let record = sqlx::query_as::<_, SeoMetadata>(&format!(
            "SELECT {SEO_COLUMNS} FROM seo_metadata WHERE page_path = $1"
        ))
        .bind(page_path)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn create_seo_metadata(&self, record: &CreateSeoMetadata) -> Result<SeoMetadata> {
        let created = sqlx::query_as::<_, SeoMetadata>(&format!(
            r#"
            INSERT INTO seo_metadata
                (page_path, title, description, keywords, og_title, og_description,
                 og_image, canonical_url, no_index)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {SEO_COLUMNS}
            "#
        ))
        .bind(&record.page_path)
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.keywords)
        .bind(&record.og_title)
        .bind(&record.og_description)
        .bind(&record.og_image)
        .bind(&record.canonical_url)
        .bind(record.no_index)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn update_seo_metadata(&self, record: &SeoMetadata) -> Result<Option<SeoMetadata>> {
        let updated = sqlx::query_as::<_, SeoMetadata>(&format!(
            r#"
            UPDATE seo_metadata SET
                page_path = $1, title = $2, description = $3, keywords = $4, og_title = $5,
                og_description = $6, og_image = $7, canonical_url = $8, no_index = $9,
                updated_at = NOW()
            WHERE id = $10
            RETURNING {SEO_COLUMNS}
            "#
        ))
        .bind(&record.page_path)
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.keywords)
        .bind(&record.og_title)
        .bind(&record.og_description)
        .bind(&record.og_image)
        .bind(&record.canonical_url)
        .bind(record.no_index)
        .bind(record.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete_seo_metadata(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM seo_metadata WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl SeoStore for Database {
    async fn find_by_path(&self, page_path: &str) -> Result<Option<SeoMetadata>> {
        self.get_seo_metadata_by_path(page_path).await
    }
}
