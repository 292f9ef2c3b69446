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
    models::{Faq, CreateFaq, UpdateFaq},
    permissions::{Action, Resource},
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_faqs).post(create_faq))
        .route("/{id}", get(get_faq).put(update_faq).delete(delete_faq))
}

#[utoipa::path(
    get,
    path = "/api/admin/faqs",
    tag = "admin",
    operation_id = "admin_list_faqs",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All FAQs, inactive included", body = Vec<Faq>),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn list_faqs(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Faq>>, ApiError> {
    auth_user.require(Resource::Faq, Action::Read)?;
    Ok(Json(state.require_db()?.get_all_faqs().await?))
}

#[utoipa::path(
    get,
    path = "/api/admin/faqs/{id}",
    tag = "admin",
    operation_id = "admin_get_faq",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Record ID")),
    responses(
        (status = 200, description = "The record", body = Faq),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_faq(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Faq>, ApiError> {
    auth_user.require(Resource::Faq, Action::Read)?;
    state
        .require_db()?
        .get_faq_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[utoipa::path(
    post,
    path = "/api/admin/faqs",
    tag = "admin",
    operation_id = "admin_create_faq",
    security(("bearer_auth" = [])),
    request_body = CreateFaq,
    responses(
        (status = 201, description = "Created", body = Faq),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_faq(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateFaq>,
) -> Result<(StatusCode, Json<Faq>), ApiError> {
    auth_user.require(Resource::Faq, Action::Create)?;
    let payload = payload.validate()?;
    let created = state.require_db()?.create_faq(&payload).await?;
    info!("{} created FAQ {}", auth_user.username, created.id);

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/admin/faqs/{id}",
    tag = "admin",
    operation_id = "admin_update_faq",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Record ID")),
    request_body = UpdateFaq,
    responses(
        (status = 200, description = "Updated", body = Faq),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_faq(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(patch): Json<UpdateFaq>,
) -> Result<Json<Faq>, ApiError> {
    auth_user.require(Resource::Faq, Action::Update)?;
    let db = state.require_db()?;

    let existing = db.get_faq_by_id(id).await?.ok_or(ApiError::NotFound)?;
    let merged = patch.apply(existing)?;
    let updated = db.update_faq(&merged).await?.ok_or(ApiError::NotFound)?;
    info!("{} updated FAQ {}", auth_user.username, id);

    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/admin/faqs/{id}",
    tag = "admin",
    operation_id = "admin_delete_faq",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Record ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_faq(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    auth_user.require(Resource::Faq, Action::Delete)?;

    if !state.require_db()?.delete_faq(id).await? {
        return Err(ApiError::NotFound);
    }
    info!("{} deleted FAQ {}", auth_user.username, id);

    Ok(StatusCode::NO_CONTENT)
}
