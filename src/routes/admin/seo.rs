//! Stored SEO records. A record here overrides the built-in entry for the
//! same normalized page path; deleting it restores the fallback.

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{
    auth::AuthUser,
    errors::ApiError,
    extract::{Json, Path},
    models::{SeoMetadata, CreateSeoMetadata, UpdateSeoMetadata},
    permissions::{Action, Resource},
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_seo_metadata).post(create_seo_metadata))
        .route("/{id}", get(get_seo_metadata).put(update_seo_metadata).delete(delete_seo_metadata))
}

#[utoipa::path(
    get,
    path = "/api/admin/seo",
    tag = "admin",
    operation_id = "admin_list_seo_metadata",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All stored SEO records", body = Vec<SeoMetadata>),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn list_seo_metadata(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SeoMetadata>>, ApiError> {
    auth_user.require(Resource::Seo, Action::Read)?;
    Ok(Json(state.require_db()?.get_all_seo_metadata().await?))
}

#[utoipa::path(
    get,
    path = "/api/admin/seo/{id}",
    tag = "admin",
    operation_id = "admin_get_seo_metadata",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Record ID")),
    responses(
        (status = 200, description = "The record", body = SeoMetadata),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_seo_metadata(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SeoMetadata>, ApiError> {
    auth_user.require(Resource::Seo, Action::Read)?;
    state
        .require_db()?
        .get_seo_metadata_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[utoipa::path(
    post,
    path = "/api/admin/seo",
    tag = "admin",
    operation_id = "admin_create_seo_metadata",
    security(("bearer_auth" = [])),
    request_body = CreateSeoMetadata,
    responses(
        (status = 201, description = "Created", body = SeoMetadata),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Duplicate page path")
    )
)]
pub async fn create_seo_metadata(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateSeoMetadata>,
) -> Result<(StatusCode, Json<SeoMetadata>), ApiError> {
    auth_user.require(Resource::Seo, Action::Create)?;
    let payload = payload.validate()?;
    let created = state.require_db()?.create_seo_metadata(&payload).await?;
    info!("{} created SEO metadata {}", auth_user.username, created.id);

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/admin/seo/{id}",
    tag = "admin",
    operation_id = "admin_update_seo_metadata",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Record ID")),
    request_body = UpdateSeoMetadata,
    responses(
        (status = 200, description = "Updated", body = SeoMetadata),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Duplicate page path")
    )
)]
pub async fn update_seo_metadata(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(patch): Json<UpdateSeoMetadata>,
) -> Result<Json<SeoMetadata>, ApiError> {
    auth_user.require(Resource::Seo, Action::Update)?;
    let db = state.require_db()?;

    let existing = db.get_seo_metadata_by_id(id).await?.ok_or(ApiError::NotFound)?;
    let merged = patch.apply(existing)?;
    let updated = db.update_seo_metadata(&merged).await?.ok_or(ApiError::NotFound)?;
    info!("{} updated SEO metadata {}", auth_user.username, id);

    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/admin/seo/{id}",
    tag = "admin",
    operation_id = "admin_delete_seo_metadata",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Record ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_seo_metadata(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    auth_user.require(Resource::Seo, Action::Delete)?;

    if !state.require_db()?.delete_seo_metadata(id).await? {
        return Err(ApiError::NotFound);
    }
    info!("{} deleted SEO metadata {}", auth_user.username, id);

    Ok(StatusCode::NO_CONTENT)
}
