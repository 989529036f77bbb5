//! Order endpoints.
//!
//! Every handler first checks the capability for the verb, then narrows
//! persistence to the actor's order scope; admins see everything, staff
//! and shippers only what they created.

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};

use crate::access::{self, Capability};
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::gateway::response::{ApiResult, Paginated, created, ok, ok_message};
use crate::gateway::state::AppState;
use crate::orders::filter::OrderFilter;
use crate::orders::models::{
    CreateOrderRequest, Order, OrderListQuery, OrderStats, OrderStatsQuery, OrderStatus,
    UpdateOrderRequest, UpdateStatusRequest,
};
use crate::orders::store::OrderStore;
use crate::validation::validate_request;

/// List visible orders
///
/// GET /api/orders
#[utoipa::path(
    get,
    path = "/api/orders",
    params(
        ("page" = Option<i64>, Query, description = "Page number (1-based)"),
        ("limit" = Option<i64>, Query, description = "Page size"),
        ("status" = Option<String>, Query, description = "Filter by status"),
        ("serviceTypeId" = Option<i64>, Query, description = "Filter by service type"),
        ("search" = Option<String>, Query, description = "Search order code and party names/phones"),
        ("sortBy" = Option<String>, Query, description = "Sort field"),
        ("sortDir" = Option<String>, Query, description = "asc or desc"),
        ("dateFrom" = Option<String>, Query, description = "Created-at lower bound"),
        ("dateTo" = Option<String>, Query, description = "Created-at upper bound")
    ),
    responses(
        (status = 200, description = "Page of orders"),
        (status = 400, description = "Invalid filter or sort parameter")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<AuthUser>,
    Query(query): Query<OrderListQuery>,
) -> ApiResult<Paginated<Order>> {
    access::require(actor.role, Capability::ViewOrders)?;
    let filter = OrderFilter::from_query(&query)?;
    let scope = actor.role.order_scope(actor.id);

    let (orders, total) = OrderStore::list(&state.db, scope, &filter).await?;
    ok(Paginated::new(orders, total, filter.page, filter.limit))
}

/// Get a visible order by id
///
/// GET /api/orders/{id}
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order detail"),
        (status = 404, description = "Unknown or out-of-scope order")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> ApiResult<Order> {
    access::require(actor.role, Capability::ViewOrders)?;
    let scope = actor.role.order_scope(actor.id);

    let order = OrderStore::get(&state.db, scope, id).await?;
    ok(order)
}

/// Create an order (admin and staff)
///
/// POST /api/orders
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created and priced"),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Role cannot create orders"),
        (status = 404, description = "Unknown service type or uncovered weight")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<AuthUser>,
    Json(req): Json<CreateOrderRequest>,
) -> ApiResult<Order> {
    access::require(actor.role, Capability::CreateOrder)?;
    validate_request(&req)?;

    let order = OrderStore::create(&state.db, actor.id, &req).await?;
    tracing::info!(
        order_id = order.id,
        order_code = %order.order_code,
        created_by = actor.id,
        "Order created"
    );
    created(order, "Order created successfully")
}

/// Edit a pending order's fields (admin and staff)
///
/// PUT /api/orders/{id}
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated and re-priced if needed"),
        (status = 400, description = "Validation failed or order not pending"),
        (status = 403, description = "Role cannot edit orders"),
        (status = 404, description = "Unknown or out-of-scope order")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateOrderRequest>,
) -> ApiResult<Order> {
    access::require(actor.role, Capability::UpdateOrderFields)?;
    validate_request(&req)?;
    let scope = actor.role.order_scope(actor.id);

    let order = OrderStore::update_fields(&state.db, scope, id, &req).await?;
    ok_message(order, "Order updated successfully")
}

/// Set an order's status
///
/// PATCH /api/orders/{id}/status
#[utoipa::path(
    patch,
    path = "/api/orders/{id}/status",
    params(("id" = i64, Path, description = "Order id")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated"),
        (status = 400, description = "Unknown status value"),
        (status = 404, description = "Unknown or out-of-scope order")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateStatusRequest>,
) -> ApiResult<Order> {
    access::require(actor.role, Capability::UpdateOrderStatus)?;
    let status: OrderStatus = req
        .status
        .parse()
        .map_err(|_| ApiError::validation("Invalid status"))?;
    let scope = actor.role.order_scope(actor.id);

    let order = OrderStore::update_status(&state.db, scope, id, status).await?;
    tracing::info!(order_id = id, status = %status, by = actor.id, "Order status updated");
    ok_message(order, "Order status updated successfully")
}

/// Delete a pending order (admin only)
///
/// DELETE /api/orders/{id}
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order deleted"),
        (status = 400, description = "Order not pending"),
        (status = 403, description = "Role cannot delete orders"),
        (status = 404, description = "Unknown or out-of-scope order")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> ApiResult<()> {
    access::require(actor.role, Capability::DeleteOrder)?;
    let scope = actor.role.order_scope(actor.id);

    OrderStore::delete(&state.db, scope, id).await?;
    ok_message((), "Order deleted successfully")
}

/// Aggregate order stats over the visible scope (admin only)
///
/// GET /api/orders/stats/overview
#[utoipa::path(
    get,
    path = "/api/orders/stats/overview",
    params(
        ("dateFrom" = Option<String>, Query, description = "Created-at lower bound"),
        ("dateTo" = Option<String>, Query, description = "Created-at upper bound")
    ),
    responses(
        (status = 200, description = "Counts per status and delivered revenue"),
        (status = 403, description = "Not an admin")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn order_stats(
    State(state): State<Arc<AppState>>,
    Extension(actor): Extension<AuthUser>,
    Query(query): Query<OrderStatsQuery>,
) -> ApiResult<OrderStats> {
    access::require(actor.role, Capability::ViewStats)?;
    let scope = actor.role.order_scope(actor.id);

    let date_from = query
        .date_from
        .as_deref()
        .map(|raw| crate::orders::filter::parse_window_date(raw, false))
        .transpose()?;
    let date_to = query
        .date_to
        .as_deref()
        .map(|raw| crate::orders::filter::parse_window_date(raw, true))
        .transpose()?;

    let stats = OrderStore::stats(&state.db, scope, date_from, date_to).await?;
    ok(stats)
}
