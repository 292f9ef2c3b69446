use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{errors::ApiError, validation};

/// A member of the management team shown on the leadership page.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub credentials: Option<String>,
    pub image_url: Option<String>,
    pub email: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTeamMember {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub bio: String,
    pub credentials: Option<String>,
    pub image_url: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTeamMember {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub credentials: Option<String>,
    pub image_url: Option<String>,
    pub email: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl CreateTeamMember {
    pub fn validate(self) -> Result<Self, ApiError> {
        Ok(Self {
            name: validation::bounded_text("name", &self.name, validation::NAME_MAX)?,
            title: validation::bounded_text("title", &self.title, validation::NAME_MAX)?,
            bio: self.bio.trim().to_string(),
            credentials: validation::optional_bounded("credentials", self.credentials, validation::NAME_MAX)?,
            image_url: validation::optional_url("image_url", self.image_url)?,
            email: validation::optional_bounded("email", self.email, validation::EMAIL_MAX)?,
            sort_order: self.sort_order,
            is_active: self.is_active,
        })
    }
}

impl UpdateTeamMember {
    pub fn apply(self, mut member: TeamMember) -> Result<TeamMember, ApiError> {
        if let Some(name) = self.name {
            member.name = validation::bounded_text("name", &name, validation::NAME_MAX)?;
        }
        if let Some(title) = self.title {
            member.title = validation::bounded_text("title", &title, validation::NAME_MAX)?;
        }
        if let Some(bio) = self.bio {
            member.bio = bio.trim().to_string();
        }
        if self.credentials.is_some() {
            member.credentials = validation::optional_bounded("credentials", self.credentials, validation::NAME_MAX)?;
        }
        if self.image_url.is_some() {
            member.image_url = validation::optional_url("image_url", self.image_url)?;
        }
        if self.email.is_some() {
            member.email = validation::optional_bounded("email", self.email, validation::EMAIL_MAX)?;
        }
        if let Some(sort_order) = self.sort_order {
            member.sort_order = sort_order;
        }
        if let Some(is_active) = self.is_active {
            member.is_active = is_active;
        }
        Ok(member)
    }
}
