use anyhow::Result;
use uuid::Uuid;

use crate::models::{CreateFaq, Faq};
use super::Database;

const FAQ_COLUMNS: &str = "id, question, answer, category, sort_order, is_active, created_at, updated_at";

impl Database {
    pub async fn get_all_faqs(&self) -> Result<Vec<Faq>> {
        let faqs = sqlx::query_as::<_, Faq>(&format!(
            "SELECT {FAQ_COLUMNS} FROM faqs ORDER BY category, sort_order, created_at"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(faqs)
    }

    pub async fn get_active_faqs(&self, category: Option<&str>) -> Result<Vec<Faq>> {
        let faqs = sqlx::query_as::<_, Faq>(&format!(
            r#"
            SELECT {FAQ_COLUMNS} FROM faqs
            WHERE is_active = TRUE AND ($1::TEXT IS NULL OR category = $1)
            ORDER BY category, sort_order, created_at
            "#
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(faqs)
    }

    pub async fn get_faq_by_id(&self, id: Uuid) -> Result<Option<Faq>> {
        let faq = sqlx::query_as::<_, Faq>(&format!(
            "SELECT {FAQ_COLUMNS} FROM faqs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(faq)
    }

    pub async fn create_faq(&self, faq: &CreateFaq) -> Result<Faq> {
        let created = sqlx::query_as::<_, Faq>(&format!(
            r#"
            INSERT INTO faqs (question, answer, category, sort_order, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {FAQ_COLUMNS}
            "#
        ))
        .bind(&faq.question)
        .bind(&faq.answer)
        .bind(&faq.category)
        .bind(faq.sort_order)
        .bind(faq.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn update_faq(&self, faq: &Faq) -> Result<Option<Faq>> {
        let updated = sqlx::query_as::<_, Faq>(&format!(
            r#"
            UPDATE faqs SET
                question = $1, answer = $2, category = $3, sort_order = $4, is_active = $5,
                updated_at = NOW()
            WHERE id = $6
            RETURNING {FAQ_COLUMNS}
            "#
        ))
        .bind(&faq.question)
        .bind(&faq.answer)
        .bind(&faq.category)
        .bind(faq.sort_order)
        .bind(faq.is_active)
        .bind(faq.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete_faq(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
