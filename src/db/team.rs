use anyhow::Result;
use uuid::Uuid;

use crate::models::{CreateTeamMember, TeamMember};
use super::Database;

const TEAM_COLUMNS: &str = "id, name, title, bio, credentials, image_url, email, sort_order, \
    is_active, created_at, updated_at";

impl Database {
    pub async fn get_all_team_members(&self) -> Result<Vec<TeamMember>> {
        let members = sqlx::query_as::<_, TeamMember>(&format!(
            "SELECT {TEAM_COLUMNS} FROM team_members ORDER BY sort_order, name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    pub async fn get_active_team_members(&self) -> Result<Vec<TeamMember>> {
        let members = sqlx::query_as::<_, TeamMember>(&format!(
            "SELECT {TEAM_COLUMNS} FROM team_members WHERE is_active = TRUE ORDER BY sort_order, name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    pub async fn get_team_member_by_id(&self, id: Uuid) -> Result<Option<TeamMember>> {
        let member = sqlx::query_as::<_, TeamMember>(&format!(
            "SELECT {TEAM_COLUMNS} FROM team_members WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(member)
    }

    pub async fn create_team_member(&self, member: &CreateTeamMember) -> Result<TeamMember> {
        let created = sqlx::query_as::<_, TeamMember>(&format!(
            r#"
            INSERT INTO team_members
                (name, title, bio, credentials, image_url, email, sort_order, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {TEAM_COLUMNS}
            "#
        ))
        .bind(&member.name)
        .bind(&member.title)
        .bind(&member.bio)
        .bind(&member.credentials)
        .bind(&member.image_url)
        .bind(&member.email)
        .bind(member.sort_order)
        .bind(member.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn update_team_member(&self, member: &TeamMember) -> Result<Option<TeamMember>> {
        let updated = sqlx::query_as::<_, TeamMember>(&format!(
            r#"
            UPDATE team_members SET
                name = $1, title = $2, bio = $3, credentials = $4, image_url = $5,
                email = $6, sort_order = $7, is_active = $8, updated_at = NOW()
            WHERE id = $9
            RETURNING {TEAM_COLUMNS}
            "#
        ))
        .bind(&member.name)
        .bind(&member.title)
        .bind(&member.bio)
        .bind(&member.credentials)
        .bind(&member.image_url)
        .bind(&member.email)
        .bind(member.sort_order)
        .bind(member.is_active)
        .bind(member.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete_team_member(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
