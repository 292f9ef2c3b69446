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
    models::{Location, CreateLocation, UpdateLocation},
    permissions::{Action, Resource},
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_locations).post(create_location))
        .route("/{id}", get(get_location).put(update_location).delete(delete_location))
}

#[utoipa::path(
    get,
    path = "/api/admin/locations",
    tag = "admin",
    operation_id = "admin_list_locations",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All locations, inactive included", body = Vec<Location>),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn list_locations(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Location>>, ApiError> {
    auth_user.require(Resource::Locations, Action::Read)?;
    Ok(Json(state.require_db()?.get_all_locations().await?))
}

#[utoipa::path(
    get,
    path = "/api/admin/locations/{id}",
    tag = "admin",
    operation_id = "admin_get_location",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Record ID")),
    responses(
        (status = 200, description = "The record", body = Location),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_location(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Location>, ApiError> {
    auth_user.require(Resource::Locations, Action::Read)?;
    state
        .require_db()?
        .get_location_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[utoipa::path(
    post,
    path = "/api/admin/locations",
    tag = "admin",
    operation_id = "admin_create_location",
    security(("bearer_auth" = [])),
    request_body = CreateLocation,
    responses(
        (status = 201, description = "Created", body = Location),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Duplicate slug")
    )
)]
pub async fn create_location(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateLocation>,
) -> Result<(StatusCode, Json<Location>), ApiError> {
    auth_user.require(Resource::Locations, Action::Create)?;
    let payload = payload.validate()?;
    let created = state.require_db()?.create_location(&payload).await?;
    info!("{} created location {}", auth_user.username, created.id);

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/admin/locations/{id}",
    tag = "admin",
    operation_id = "admin_update_location",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Record ID")),
    request_body = UpdateLocation,
    responses(
        (status = 200, description = "Updated", body = Location),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Duplicate slug")
    )
)]
pub async fn update_location(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(patch): Json<UpdateLocation>,
) -> Result<Json<Location>, ApiError> {
    auth_user.require(Resource::Locations, Action::Update)?;
    let db = state.require_db()?;

    let existing = db.get_location_by_id(id).await?.ok_or(ApiError::NotFound)?;
    let merged = patch.apply(existing)?;
    let updated = db.update_location(&merged).await?.ok_or(ApiError::NotFound)?;
    info!("{} updated location {}", auth_user.username, id);

    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/admin/locations/{id}",
    tag = "admin",
    operation_id = "admin_delete_location",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Record ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_location(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    auth_user.require(Resource::Locations, Action::Delete)?;

    if !state.require_db()?.delete_location(id).await? {
        return Err(ApiError::NotFound);
    }
    info!("{} deleted location {}", auth_user.username, id);

    Ok(StatusCode::NO_CONTENT)
}
