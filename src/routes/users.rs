use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Router,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    auth::AuthUser,
    errors::ApiError,
    extract::{Json, Path},
    models::{CreateUser, UpdateUser, UserResponse},
    permissions::{Action, Resource},
    validation, AppState,
};

const MIN_PASSWORD_LEN: usize = 8;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
}

fn check_password(password: &str) -> Result<(), ApiError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::bad_request(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List of all users", body = Vec<UserResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn list_users(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    auth_user.require(Resource::Users, Action::Read)?;
    let users = state.require_db()?.get_all_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User information", body = UserResponse),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    auth_user.require(Resource::Users, Action::Read)?;
    let user = state
        .require_db()?
        .get_user_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(user.into()))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    security(
        ("bearer_auth" = [])
    ),
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Bad request - invalid user data"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Username or email already exists")
    )
)]
pub async fn create_user(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(mut user_data): Json<CreateUser>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    auth_user.require(Resource::Users, Action::Create)?;
    user_data.username = validation::bounded_text("username", &user_data.username, validation::NAME_MAX)?;
    user_data.email = validation::bounded_text("email", &user_data.email, validation::EMAIL_MAX)?;
    check_password(&user_data.password)?;

    let user = state.require_db()?.create_user(user_data).await?;
    tracing::info!("{} created user '{}' with role {}", auth_user.username, user.username, user.role);

    Ok((StatusCode::CREATED, Json(user.into())))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated successfully", body = UserResponse),
        (status = 400, description = "Bad request - invalid user data"),
        (status = 403, description = "Forbidden, or attempting to change your own role"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(mut update_data): Json<UpdateUser>,
) -> Result<Json<UserResponse>, ApiError> {
    auth_user.require(Resource::Users, Action::Update)?;
    if auth_user.id == id && update_data.role.is_some_and(|role| role != auth_user.role) {
        return Err(ApiError::forbidden("You cannot change your own role"));
    }
    if let Some(password) = &update_data.password {
        check_password(password)?;
    }
    if let Some(username) = &update_data.username {
        update_data.username = Some(validation::bounded_text("username", username, validation::NAME_MAX)?);
    }
    if let Some(email) = &update_data.email {
        update_data.email = Some(validation::bounded_text("email", email, validation::EMAIL_MAX)?);
    }

    let user = state
        .require_db()?
        .update_user(id, update_data)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(user.into()))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted successfully"),
        (status = 403, description = "Forbidden, or attempting to delete yourself"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    auth_user.require(Resource::Users, Action::Delete)?;

    if auth_user.id == id {
        return Err(ApiError::forbidden("You cannot delete your own account"));
    }

    if !state.require_db()?.delete_user(id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
