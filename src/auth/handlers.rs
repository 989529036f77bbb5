//! Login, profile and password endpoints.

use std::sync::Arc;

use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::gateway::response::{ApiResult, ok, ok_message};
use crate::gateway::state::AppState;
use crate::users::models::UserProfile;
use crate::users::store::UserStore;
use crate::validation::validate_request;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "admin")]
    #[validate(length(min = 3, message = "must be at least 3 characters"))]
    pub username: String,
    #[schema(example = "password123")]
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub current_password: String,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub new_password: String,
}

/// Login with username and password
///
/// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    validate_request(&req)?;

    // Unknown user, inactive user and wrong password are indistinguishable.
    let (user, stored_hash) = UserStore::get_auth_by_username(&state.db, &req.username)
        .await?
        .filter(|(user, _)| user.is_active)
        .ok_or_else(|| ApiError::auth("Invalid credentials"))?;

    if !state.auth.verify_password(&req.password, &stored_hash) {
        tracing::warn!(username = %req.username, "Failed login attempt");
        return Err(ApiError::auth("Invalid credentials"));
    }

    UserStore::touch_last_login(&state.db, user.id).await?;
    let token = state.auth.issue_token(user.id, user.role)?;

    tracing::info!(user_id = user.id, role = %user.role, "Login successful");
    ok_message(LoginResponse { token, user }, "Login successful")
}

/// Current user profile
///
/// GET /api/auth/profile
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    responses(
        (status = 200, description = "Profile of the authenticated user", body = UserProfile),
        (status = 401, description = "Unauthenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn profile(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<AuthUser>,
) -> ApiResult<UserProfile> {
    match UserStore::get(&state.db, actor.id).await? {
        Some(user) => ok(user),
        None => Err(ApiError::not_found("User not found")),
    }
}

/// Change own password
///
/// PUT /api/auth/change-password
#[utoipa::path(
    put,
    path = "/api/auth/change-password",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed"),
        (status = 400, description = "Current password incorrect")
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn change_password(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<AuthUser>,
    Json(req): Json<ChangePasswordRequest>,
) -> ApiResult<()> {
    validate_request(&req)?;

    let stored_hash = UserStore::get_password_hash(&state.db, actor.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    if !state.auth.verify_password(&req.current_password, &stored_hash) {
        return Err(ApiError::validation("Current password is incorrect"));
    }

    let new_hash = state.auth.hash_password(&req.new_password)?;
    UserStore::set_password_hash(&state.db, actor.id, &new_hash).await?;

    tracing::info!(user_id = actor.id, "Password changed");
    ok_message((), "Password changed successfully")
}

/// Logout (stateless acknowledgement; the client drops the token)
///
/// POST /api/auth/logout
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses((status = 200, description = "Logout acknowledged")),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn logout(Extension(_actor): Extension<AuthUser>) -> ApiResult<()> {
    ok_message((), "Logout successful")
}
