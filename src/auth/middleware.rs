use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use sqlx::Row;
use std::sync::Arc;

use crate::access::Role;
use crate::error::ApiError;
use crate::gateway::state::AppState;

/// Verified actor identity injected into request extensions.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: i64,
    pub role: Role,
}

/// Bearer-token middleware.
///
/// Verifies the JWT, then re-checks the user row so a deactivated account
/// is rejected even while its token is still unexpired.
pub async fn jwt_auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::auth("Access token required"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::auth("Invalid token format"))?;

    let claims = state.auth.verify_token(token)?;

    let user_id: i64 = claims
        .sub
        .parse()
        .map_err(|_| ApiError::auth("Invalid token subject"))?;
    let role: Role = claims
        .role
        .parse()
        .map_err(|_| ApiError::auth("Invalid token role"))?;

    let row = sqlx::query("SELECT is_active FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(&state.db)
        .await?;

    match row {
        Some(row) if row.get::<bool, _>("is_active") => {}
        _ => return Err(ApiError::auth("Invalid or inactive user")),
    }

    request
        .extensions_mut()
        .insert(AuthUser { id: user_id, role });

    Ok(next.run(request).await)
}
