use std::sync::Arc;

use shipflow::auth::AuthService;
use shipflow::config::AppConfig;
use shipflow::db::{Database, schema};
use shipflow::gateway::{self, state::AppState};
use shipflow::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = std::env::var("SHIPFLOW_ENV").unwrap_or_else(|_| "dev".to_string());
    let config = AppConfig::load(&env);

    // Guard must stay alive for the duration of the process
    let _log_guard = init_logging(&config);
    tracing::info!(env = %env, "Starting shipflow gateway");

    let db = Database::connect(&config.database).await?;
    schema::init(db.pool()).await?;

    let auth = AuthService::new(config.auth.jwt_secret.clone(), config.auth.token_ttl_hours);
    let state = Arc::new(AppState::new(db.pool().clone(), auth));

    gateway::run_server(&config.gateway, state).await;
    Ok(())
}
