//! HTTP gateway: router assembly and server startup.

pub mod openapi;
pub mod response;
pub mod state;

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post, put},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::middleware::jwt_auth_middleware;
use crate::config::GatewayConfig;
use crate::gateway::response::{ApiResult, ok};
use crate::{auth, orders, pricing, users};
use state::AppState;

/// Liveness probe with a database round trip
///
/// GET /api/health
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service and database are up")),
    tag = "Health"
)]
async fn health_check(State(state): State<Arc<AppState>>) -> ApiResult<Value> {
    crate::db::health_check(&state.db).await?;
    ok(json!({ "status": "ok" }))
}

/// Build the full application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let auth_routes = Router::new()
        .route("/profile", get(auth::handlers::profile))
        .route("/change-password", put(auth::handlers::change_password))
        .route("/logout", post(auth::handlers::logout))
        .route_layer(from_fn_with_state(state.clone(), jwt_auth_middleware))
        .route("/login", post(auth::handlers::login));

    let user_routes = Router::new()
        .route("/", get(users::handlers::list_users))
        .route("/", post(users::handlers::create_user))
        .route("/{id}", get(users::handlers::get_user))
        .route("/{id}", put(users::handlers::update_user))
        .route("/{id}", delete(users::handlers::delete_user))
        .route(
            "/{id}/toggle-status",
            patch(users::handlers::toggle_user_status),
        );

    let pricing_routes = Router::new()
        .route("/service-types", get(pricing::handlers::list_service_types))
        .route(
            "/service-types",
            post(pricing::handlers::create_service_type),
        )
        .route(
            "/service-types/all",
            get(pricing::handlers::list_service_types_admin),
        )
        .route(
            "/service-types/{id}",
            put(pricing::handlers::update_service_type),
        )
        .route(
            "/service-types/{id}",
            delete(pricing::handlers::delete_service_type),
        )
        .route(
            "/service-types/{id}/rules",
            get(pricing::handlers::list_rules_for_service_type),
        )
        .route("/rules", get(pricing::handlers::list_rules))
        .route("/rules", post(pricing::handlers::create_rule))
        .route("/rules/{id}", put(pricing::handlers::update_rule))
        .route("/rules/{id}", delete(pricing::handlers::delete_rule))
        .route("/quote", post(pricing::handlers::quote_cost));

    let order_routes = Router::new()
        .route("/", get(orders::handlers::list_orders))
        .route("/", post(orders::handlers::create_order))
        .route("/stats/overview", get(orders::handlers::order_stats))
        .route("/{id}", get(orders::handlers::get_order))
        .route("/{id}", put(orders::handlers::update_order))
        .route("/{id}", delete(orders::handlers::delete_order))
        .route("/{id}/status", patch(orders::handlers::update_order_status));

    Router::new()
        .route("/api/health", get(health_check))
        .nest("/api/auth", auth_routes)
        .nest(
            "/api/users",
            user_routes.route_layer(from_fn_with_state(state.clone(), jwt_auth_middleware)),
        )
        .nest(
            "/api/pricing",
            pricing_routes.route_layer(from_fn_with_state(state.clone(), jwt_auth_middleware)),
        )
        .nest(
            "/api/orders",
            order_routes.route_layer(from_fn_with_state(state.clone(), jwt_auth_middleware)),
        )
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Bind and serve until the process is stopped.
pub async fn run_server(config: &GatewayConfig, state: Arc<AppState>) {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("❌ FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                config.port, config.port
            );
            std::process::exit(1);
        }
    };

    println!("🚀 Gateway listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);
    println!("🔒 API routes under /api/* require a bearer token (except /api/auth/login)");

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("❌ FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
