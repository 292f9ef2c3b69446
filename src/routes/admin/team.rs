//! Management-team members shown on the leadership page.

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
    models::{TeamMember, CreateTeamMember, UpdateTeamMember},
    permissions::{Action, Resource},
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_team_members).post(create_team_member))
        .route("/{id}", get(get_team_member).put(update_team_member).delete(delete_team_member))
}

#[utoipa::path(
    get,
    path = "/api/admin/team",
    tag = "admin",
    operation_id = "admin_list_team_members",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All team members, inactive included", body = Vec<TeamMember>),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn list_team_members(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TeamMember>>, ApiError> {
    auth_user.require(Resource::Team, Action::Read)?;
    Ok(Json(state.require_db()?.get_all_team_members().await?))
}

#[utoipa::path(
    get,
    path = "/api/admin/team/{id}",
    tag = "admin",
    operation_id = "admin_get_team_member",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Record ID")),
    responses(
        (status = 200, description = "The record", body = TeamMember),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_team_member(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamMember>, ApiError> {
    auth_user.require(Resource::Team, Action::Read)?;
    state
        .require_db()?
        .get_team_member_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[utoipa::path(
    post,
    path = "/api/admin/team",
    tag = "admin",
    operation_id = "admin_create_team_member",
    security(("bearer_auth" = [])),
    request_body = CreateTeamMember,
    responses(
        (status = 201, description = "Created", body = TeamMember),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_team_member(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTeamMember>,
) -> Result<(StatusCode, Json<TeamMember>), ApiError> {
    auth_user.require(Resource::Team, Action::Create)?;
    let payload = payload.validate()?;
    let created = state.require_db()?.create_team_member(&payload).await?;
    info!("{} created team member {}", auth_user.username, created.id);

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/admin/team/{id}",
    tag = "admin",
    operation_id = "admin_update_team_member",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Record ID")),
    request_body = UpdateTeamMember,
    responses(
        (status = 200, description = "Updated", body = TeamMember),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_team_member(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(patch): Json<UpdateTeamMember>,
) -> Result<Json<TeamMember>, ApiError> {
    auth_user.require(Resource::Team, Action::Update)?;
    let db = state.require_db()?;

    let existing = db.get_team_member_by_id(id).await?.ok_or(ApiError::NotFound)?;
    let merged = patch.apply(existing)?;
    let updated = db.update_team_member(&merged).await?.ok_or(ApiError::NotFound)?;
    info!("{} updated team member {}", auth_user.username, id);

    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/admin/team/{id}",
    tag = "admin",
    operation_id = "admin_delete_team_member",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Record ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_team_member(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    auth_user.require(Resource::Team, Action::Delete)?;

    if !state.require_db()?.delete_team_member(id).await? {
        return Err(ApiError::NotFound);
    }
    info!("{} deleted team member {}", auth_user.username, id);

    Ok(StatusCode::NO_CONTENT)
}
