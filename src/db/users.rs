use anyhow::Result;
use uuid::Uuid;

use crate::models::{CreateUser, UpdateUser, User};
use super::Database;

const USER_COLUMNS: &str = "id, username, email, password_hash, role, created_at, updated_at";

impl Database {
    pub async fn create_user(&self, user: CreateUser) -> Result<User> {
        let password_hash = bcrypt::hash(&user.password, 12)?;

        let created = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (username, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&user.username)
        .bind(&user.email)
        .bind(&password_hash)
        .bind(user.role.to_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Returns `None` when no user has that id.
    pub async fn update_user(&self, id: Uuid, update: UpdateUser) -> Result<Option<User>> {
        let Some(user) = self.get_user_by_id(id).await? else {
            return Ok(None);
        };

        let username = update.username.unwrap_or(user.username);
        let email = update.email.unwrap_or(user.email);
        let role = update.role.unwrap_or(user.role);
        let password_hash = match update.password {
            Some(pwd) => bcrypt::hash(&pwd, 12)?,
            None => user.password_hash,
        };

        let updated = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users SET username = $1, email = $2, password_hash = $3, role = $4, updated_at = NOW()
            WHERE id = $5
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&username)
        .bind(&email)
        .bind(&password_hash)
        .bind(role.to_string())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete_user(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
