use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tracing::info;

use crate::{
    auth::{create_jwt, AuthUser},
    errors::ApiError,
    extract::Json,
    models::{LoginRequest, LoginResponse, UserResponse},
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", post(login))
        .route("/me", get(me))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Unauthorized - invalid credentials"),
        (status = 503, description = "Content database is not configured")
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(login_data): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let db = state.require_db()?;

    let user = db
        .get_user_by_username(login_data.username.trim())
        .await?
        .ok_or(ApiError::Unauthorized)?;

    let is_valid = bcrypt::verify(&login_data.password, &user.password_hash)
        .map_err(|e| ApiError::internal_server_error(e.to_string()))?;

    if !is_valid {
        info!("Failed login for '{}'", user.username);
        return Err(ApiError::Unauthorized);
    }

    let token = create_jwt(&user, &state.config.jwt_secret)?;

    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Current user information", body = UserResponse),
        (status = 401, description = "Unauthorized - invalid or missing token")
    )
)]
pub async fn me(
    auth_user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> Result<Json<UserResponse>, ApiError> {
    let db = state.require_db()?;

    // the token may outlive the account
    let user = db
        .get_user_by_id(auth_user.id)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    Ok(Json(user.into()))
}
