use axum::{routing::get, Router};
use std::sync::Arc;

use crate::AppState;

pub mod admin;
pub mod auth;
pub mod public;
pub mod users;

/// Every API route, without the static-site fallback or middleware.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(crate::health_check))
        .nest("/api", public::router())
        .nest("/api/auth", auth::router())
        .nest("/api/admin", admin::router())
        .nest("/api/users", users::router())
}
