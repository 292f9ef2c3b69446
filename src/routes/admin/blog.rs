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
    models::{BlogPost, CreateBlogPost, UpdateBlogPost},
    permissions::{Action, Resource},
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_blog_posts).post(create_blog_post))
        .route("/{id}", get(get_blog_post).put(update_blog_post).delete(delete_blog_post))
}

#[utoipa::path(
    get,
    path = "/api/admin/blog",
    tag = "admin",
    operation_id = "admin_list_blog_posts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All posts, drafts included", body = Vec<BlogPost>),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn list_blog_posts(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    auth_user.require(Resource::Blog, Action::Read)?;
    Ok(Json(state.require_db()?.get_all_blog_posts().await?))
}

#[utoipa::path(
    get,
    path = "/api/admin/blog/{id}",
    tag = "admin",
    operation_id = "admin_get_blog_post",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Record ID")),
    responses(
        (status = 200, description = "The record", body = BlogPost),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_blog_post(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogPost>, ApiError> {
    auth_user.require(Resource::Blog, Action::Read)?;
    state
        .require_db()?
        .get_blog_post_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[utoipa::path(
    post,
    path = "/api/admin/blog",
    tag = "admin",
    operation_id = "admin_create_blog_post",
    security(("bearer_auth" = [])),
    request_body = CreateBlogPost,
    responses(
        (status = 201, description = "Created", body = BlogPost),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Duplicate slug")
    )
)]
pub async fn create_blog_post(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBlogPost>,
) -> Result<(StatusCode, Json<BlogPost>), ApiError> {
    auth_user.require(Resource::Blog, Action::Create)?;
    let payload = payload.validate()?;
    let created = state.require_db()?.create_blog_post(&payload).await?;
    info!(
        "{} created blog post {} ({})",
        auth_user.username,
        created.slug,
        if created.published { "published" } else { "draft" }
    );

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/admin/blog/{id}",
    tag = "admin",
    operation_id = "admin_update_blog_post",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Record ID")),
    request_body = UpdateBlogPost,
    responses(
        (status = 200, description = "Updated", body = BlogPost),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Duplicate slug")
    )
)]
pub async fn update_blog_post(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(patch): Json<UpdateBlogPost>,
) -> Result<Json<BlogPost>, ApiError> {
    auth_user.require(Resource::Blog, Action::Update)?;
    let db = state.require_db()?;

    let existing = db.get_blog_post_by_id(id).await?.ok_or(ApiError::NotFound)?;
    let merged = patch.apply(existing)?;
    let updated = db.update_blog_post(&merged).await?.ok_or(ApiError::NotFound)?;
    info!("{} updated blog post {}", auth_user.username, id);

    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/admin/blog/{id}",
    tag = "admin",
    operation_id = "admin_delete_blog_post",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Record ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_blog_post(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    auth_user.require(Resource::Blog, Action::Delete)?;

    if !state.require_db()?.delete_blog_post(id).await? {
        return Err(ApiError::NotFound);
    }
    info!("{} deleted blog post {}", auth_user.username, id);

    Ok(StatusCode::NO_CONTENT)
}
