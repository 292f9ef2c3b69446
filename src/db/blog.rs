use anyhow::Result;
use uuid::Uuid;

use crate::models::{BlogListQuery, BlogPost, CreateBlogPost};
use super::Database;

const BLOG_COLUMNS: &str = "id, title, slug, excerpt, content, author, cover_image_url, tags, \
    published, published_at, created_at, updated_at";

impl Database {
    /// Every post, drafts included, newest first. Used by the admin panel.
    pub async fn get_all_blog_posts(&self) -> Result<Vec<BlogPost>> {
        let posts = sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blog_posts ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    pub async fn get_published_blog_posts(&self, query: &BlogListQuery) -> Result<Vec<BlogPost>> {
        let posts = sqlx::query_as::<_, BlogPost>(&format!(
            r#"
            SELECT {BLOG_COLUMNS} FROM blog_posts
            WHERE published = TRUE
              AND ($1::TEXT IS NULL OR $1 = ANY(tags))
            ORDER BY published_at DESC NULLS LAST, created_at DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(query.tag())
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    pub async fn get_blog_post_by_id(&self, id: Uuid) -> Result<Option<BlogPost>> {
        let post = sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blog_posts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    pub async fn get_published_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>> {
        let post = sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blog_posts WHERE slug = $1 AND published = TRUE"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    /// Distinct tags across published posts, alphabetical.
    pub async fn get_blog_tags(&self) -> Result<Vec<String>> {
        let tags: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT DISTINCT tag FROM (
                SELECT unnest(tags) AS tag FROM blog_posts WHERE published = TRUE
            ) t
            ORDER BY tag
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tags.into_iter().map(|(tag,)| tag).collect())
    }

    /// Expects a payload that has already been through `CreateBlogPost::validate`.
    pub async fn create_blog_post(&self, post: &CreateBlogPost) -> Result<BlogPost> {
        let created = sqlx::query_as::<_, BlogPost>(&format!(
            r#"
            INSERT INTO blog_posts
                (title, slug, excerpt, content, author, cover_image_url, tags, published, published_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {BLOG_COLUMNS}
            "#
        ))
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.excerpt)
        .bind(&post.content)
        .bind(&post.author)
        .bind(&post.cover_image_url)
        .bind(&post.tags)
        .bind(post.published)
        .bind(post.published_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Writes every editable column of `post`. Returns `None` if the row is gone.
    pub async fn update_blog_post(&self, post: &BlogPost) -> Result<Option<BlogPost>> {
        let updated = sqlx::query_as::<_, BlogPost>(&format!(
            r#"
            UPDATE blog_posts SET
                title = $1, slug = $2, excerpt = $3, content = $4, author = $5,
                cover_image_url = $6, tags = $7, published = $8, published_at = $9,
                updated_at = NOW()
            WHERE id = $10
            RETURNING {BLOG_COLUMNS}
            "#
        ))
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.excerpt)
        .bind(&post.content)
        .bind(&post.author)
        .bind(&post.cover_image_url)
        .bind(&post.tags)
        .bind(post.published)
        .bind(post.published_at)
        .bind(post.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete_blog_post(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
