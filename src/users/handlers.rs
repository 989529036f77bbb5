//! Admin user management endpoints.

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};

use crate::access::{self, Capability, Role};
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::gateway::response::{ApiResult, Paginated, created, ok, ok_message};
use crate::gateway::state::AppState;
use crate::users::models::{CreateUserRequest, UpdateUserRequest, UserListQuery, UserProfile};
use crate::users::store::UserStore;
use crate::validation::validate_request;

fn parse_role(raw: &str) -> Result<Role, ApiError> {
    raw.parse().map_err(|_| ApiError::validation("Invalid role"))
}

/// List users (admin only)
///
/// GET /api/users
#[utoipa::path(
    get,
    path = "/api/users",
    params(
        ("page" = Option<i64>, Query, description = "Page number (1-based)"),
        ("limit" = Option<i64>, Query, description = "Page size"),
        ("role" = Option<String>, Query, description = "Filter by role"),
        ("search" = Option<String>, Query, description = "Search name/username/email")
    ),
    responses(
        (status = 200, description = "Page of users"),
        (status = 403, description = "Not an admin")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<AuthUser>,
    Query(query): Query<UserListQuery>,
) -> ApiResult<Paginated<UserProfile>> {
    access::require(actor.role, Capability::ManageUsers)?;

    let role = query.role.as_deref().map(parse_role).transpose()?;
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).clamp(1, 100);

    let (users, total) =
        UserStore::list(&state.db, role, query.search.as_deref(), page, limit).await?;
    ok(Paginated::new(users, total, page, limit))
}

/// Get a user by id (admin only)
///
/// GET /api/users/{id}
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User profile"),
        (status = 404, description = "Unknown user")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> ApiResult<UserProfile> {
    access::require(actor.role, Capability::ManageUsers)?;

    match UserStore::get(&state.db, id).await? {
        Some(user) => ok(user),
        None => Err(ApiError::not_found("User not found")),
    }
}

/// Create a user (admin only)
///
/// POST /api/users
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Validation failed or duplicate username/email")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<AuthUser>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<UserProfile> {
    access::require(actor.role, Capability::ManageUsers)?;
    validate_request(&req)?;
    let role = parse_role(&req.role)?;

    let password_hash = state.auth.hash_password(&req.password)?;
    let user = UserStore::create(
        &state.db,
        &req.username,
        &req.email,
        &password_hash,
        &req.full_name,
        req.phone.as_deref(),
        role,
    )
    .await?;

    tracing::info!(user_id = user.id, role = %user.role, "User created");
    created(user, "User created successfully")
}

/// Update a user (admin only)
///
/// PUT /api/users/{id}
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated"),
        (status = 404, description = "Unknown user")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<UserProfile> {
    access::require(actor.role, Capability::ManageUsers)?;
    validate_request(&req)?;
    let role = req.role.as_deref().map(parse_role).transpose()?;

    let user = UserStore::update(
        &state.db,
        id,
        req.full_name.as_deref(),
        req.phone.as_deref(),
        role,
        req.is_active,
    )
    .await?;

    ok_message(user, "User updated successfully")
}

/// Delete a user (admin only; self-deletion refused)
///
/// DELETE /api/users/{id}
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 400, description = "Attempted self-deletion"),
        (status = 404, description = "Unknown user")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> ApiResult<()> {
    access::require(actor.role, Capability::ManageUsers)?;

    if id == actor.id {
        return Err(ApiError::validation("Cannot delete your own account"));
    }

    UserStore::delete(&state.db, id).await?;
    ok_message((), "User deleted successfully")
}

/// Toggle a user's active flag (admin only; self-targeting refused)
///
/// PATCH /api/users/{id}/toggle-status
#[utoipa::path(
    patch,
    path = "/api/users/{id}/toggle-status",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Active flag flipped"),
        (status = 400, description = "Attempted self-deactivation"),
        (status = 404, description = "Unknown user")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn toggle_user_status(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> ApiResult<UserProfile> {
    access::require(actor.role, Capability::ManageUsers)?;

    if id == actor.id {
        return Err(ApiError::validation("Cannot deactivate your own account"));
    }

    let user = UserStore::toggle_active(&state.db, id).await?;
    let message = if user.is_active {
        "User activated successfully"
    } else {
        "User deactivated successfully"
    };
    ok_message(user, message)
}
