use sqlx::PgPool;

use crate::auth::service::AuthService;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub db: PgPool,
    /// Password hashing + JWT issuing/verification
    pub auth: AuthService,
}

impl AppState {
    pub fn new(db: PgPool, auth: AuthService) -> Self {
        Self { db, auth }
    }
}
