//! OpenAPI / Swagger UI documentation.
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::auth::handlers::{ChangePasswordRequest, LoginRequest, LoginResponse};
use crate::gateway::response::{ApiResponse, Paginated, Pagination};
use crate::orders::models::{
    CreateOrderRequest, Order, OrderStats, OrderStatus, ServiceTypeStat, UpdateOrderRequest,
    UpdateStatusRequest,
};
use crate::pricing::models::{
    CreatePricingRuleRequest, CreateServiceTypeRequest, PricingRule, Quote, QuoteRequest,
    ServiceType, UpdatePricingRuleRequest, UpdateServiceTypeRequest,
};
use crate::users::models::{CreateUserRequest, UpdateUserRequest, UserProfile};

/// JWT bearer security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "JWT issued by POST /api/auth/login; send as `Authorization: Bearer <token>`",
                        ))
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shipflow API",
        version = "1.0.0",
        description = "Role-based shipment order management: authentication, service types, weight-tiered pricing and the order lifecycle."
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::health_check,
        // Auth
        crate::auth::handlers::login,
        crate::auth::handlers::profile,
        crate::auth::handlers::change_password,
        crate::auth::handlers::logout,
        // Users (admin)
        crate::users::handlers::list_users,
        crate::users::handlers::get_user,
        crate::users::handlers::create_user,
        crate::users::handlers::update_user,
        crate::users::handlers::delete_user,
        crate::users::handlers::toggle_user_status,
        // Pricing
        crate::pricing::handlers::list_service_types,
        crate::pricing::handlers::list_service_types_admin,
        crate::pricing::handlers::create_service_type,
        crate::pricing::handlers::update_service_type,
        crate::pricing::handlers::delete_service_type,
        crate::pricing::handlers::list_rules_for_service_type,
        crate::pricing::handlers::list_rules,
        crate::pricing::handlers::create_rule,
        crate::pricing::handlers::update_rule,
        crate::pricing::handlers::delete_rule,
        crate::pricing::handlers::quote_cost,
        // Orders
        crate::orders::handlers::list_orders,
        crate::orders::handlers::get_order,
        crate::orders::handlers::create_order,
        crate::orders::handlers::update_order,
        crate::orders::handlers::update_order_status,
        crate::orders::handlers::delete_order,
        crate::orders::handlers::order_stats,
    ),
    components(
        schemas(
            ApiResponse<serde_json::Value>,
            Pagination,
            Paginated<serde_json::Value>,
            LoginRequest,
            LoginResponse,
            ChangePasswordRequest,
            UserProfile,
            CreateUserRequest,
            UpdateUserRequest,
            ServiceType,
            CreateServiceTypeRequest,
            UpdateServiceTypeRequest,
            PricingRule,
            CreatePricingRuleRequest,
            UpdatePricingRuleRequest,
            QuoteRequest,
            Quote,
            Order,
            OrderStatus,
            CreateOrderRequest,
            UpdateOrderRequest,
            UpdateStatusRequest,
            OrderStats,
            ServiceTypeStat,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Auth", description = "Login, profile and password management"),
        (name = "Users", description = "User administration"),
        (name = "Pricing", description = "Service types, pricing rules and quotes"),
        (name = "Orders", description = "Shipment order lifecycle")
    )
)]
pub struct ApiDoc;
