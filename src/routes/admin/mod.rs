//! Content-management endpoints for the admin dashboard.
//!
//! Every handler checks the caller's role against the permission table
//! before it touches the database.

use axum::{response::Json, routing::get, Router};
use std::sync::Arc;

use crate::{
    auth::AuthUser,
    permissions::{permission_table, PermissionTable},
    AppState,
};

pub mod blog;
pub mod faqs;
pub mod locations;
pub mod seo;
pub mod team;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/permissions", get(get_permissions))
        .nest("/blog", blog::router())
        .nest("/faqs", faqs::router())
        .nest("/locations", locations::router())
        .nest("/seo", seo::router())
        .nest("/team", team::router())
}

#[utoipa::path(
    get,
    path = "/api/admin/permissions",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "CRUD flags per resource for the caller's role", body = PermissionTable),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_permissions(auth_user: AuthUser) -> Json<PermissionTable> {
    Json(permission_table(auth_user.role))
}
