pub mod auth;
pub mod config;
pub mod content;
pub mod db;
pub mod errors;
pub mod extract;
pub mod models;
pub mod permissions;
pub mod routes;
pub mod seed;
pub mod seo;
pub mod swagger;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

#[cfg(test)]
mod tests;

use axum::Json;
use config::Config;
use content::PublicContent;
use db::Database;
use errors::ApiError;
use seo::{SeoResolver, SeoStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// `None` when `DATABASE_URL` is not configured.
    pub db: Option<Database>,
    pub config: Config,
    pub seo: SeoResolver,
}

impl AppState {
    pub fn new(db: Option<Database>, config: Config) -> Self {
        let store = db.clone().map(|db| Arc::new(db) as Arc<dyn SeoStore>);
        let seo = SeoResolver::new(store, config.site_identity());
        Self { db, config, seo }
    }

    /// Admin operations need a database; the public site does not.
    pub fn require_db(&self) -> Result<&Database, ApiError> {
        self.db.as_ref().ok_or_else(ApiError::database_not_configured)
    }

    pub fn public_content(&self) -> PublicContent<'_> {
        PublicContent::new(self.db.as_ref())
    }
}

/// Health check endpoint for monitoring
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health_check(
    axum::extract::State(state): axum::extract::State<Arc<AppState>>,
) -> Json<serde_json::Value> {
    let database = match &state.db {
        Some(db) if !db.get_pool_health().is_closed => "connected",
        Some(_) => "closed",
        None => "not_configured",
    };
    Json(serde_json::json!({"status": "ok", "database": database}))
}
