use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{errors::ApiError, validation};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Faq {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFaq {
    pub question: String,
    pub answer: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_category() -> String {
    "general".to_string()
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateFaq {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct FaqQuery {
    pub category: Option<String>,
}

impl CreateFaq {
    pub fn validate(self) -> Result<Self, ApiError> {
        Ok(Self {
            question: validation::require_text("question", &self.question)?,
            answer: validation::require_text("answer", &self.answer)?,
            category: normalize_category(&self.category)?,
            sort_order: self.sort_order,
            is_active: self.is_active,
        })
    }
}

impl UpdateFaq {
    pub fn apply(self, mut faq: Faq) -> Result<Faq, ApiError> {
        if let Some(question) = self.question {
            faq.question = validation::require_text("question", &question)?;
        }
        if let Some(answer) = self.answer {
            faq.answer = validation::require_text("answer", &answer)?;
        }
        if let Some(category) = self.category {
            faq.category = normalize_category(&category)?;
        }
        if let Some(sort_order) = self.sort_order {
            faq.sort_order = sort_order;
        }
        if let Some(is_active) = self.is_active {
            faq.is_active = is_active;
        }
        Ok(faq)
    }
}

/// Categories are stored lowercase so filtering is case-insensitive.
pub fn normalize_category(category: &str) -> Result<String, ApiError> {
    Ok(validation::bounded_text("category", category, validation::CATEGORY_MAX)?.to_lowercase())
}
