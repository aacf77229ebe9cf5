//! HTTP handlers for the order API
//!
//! All routes sit behind the JWT middleware, which injects [`Claims`]
//! as a request extension. Handlers stay thin: resolve the caller,
//! call [`OrderService`], shape the response.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::error::OrderError;
use super::service::OrderService;
use super::types::{
    CreateOrderRequest, CreateOrderResponse, MessageResponse, OrderData, OrderEnvelope,
    OrdersEnvelope, UpdateOrderRequest,
};
use crate::auth::Claims;
use crate::gateway::state::AppState;

/// Create an order
///
/// POST /api/v1/orders/create
#[utoipa::path(
    post,
    path = "/api/v1/orders/create",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = CreateOrderResponse),
        (status = 400, description = "Car ID missing"),
        (status = 404, description = "Car not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_jwt" = [])),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<CreateOrderResponse>), OrderError> {
    let user_id = claims.user_id().unwrap_or_default();

    let service = OrderService::new(state.db.clone());
    let order_id = service.create(user_id, req.car_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse {
            message: "Order created successfully".to_string(),
            order_id,
        }),
    ))
}

/// Get a single order
///
/// GET /api/v1/orders/{order_id}
#[utoipa::path(
    get,
    path = "/api/v1/orders/{order_id}",
    params(
        ("order_id" = i64, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "The order", body = OrderEnvelope),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_jwt" = [])),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Extension(_claims): Extension<Claims>,
    Path(order_id): Path<i64>,
) -> Result<Json<OrderEnvelope>, OrderError> {
    let service = OrderService::new(state.db.clone());
    let order = service.get(order_id).await?;

    Ok(Json(OrderEnvelope {
        order: OrderData::from(order),
    }))
}

/// List all orders
///
/// GET /api/v1/orders/
#[utoipa::path(
    get,
    path = "/api/v1/orders/",
    responses(
        (status = 200, description = "All orders", body = OrdersEnvelope),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_jwt" = [])),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Extension(_claims): Extension<Claims>,
) -> Result<Json<OrdersEnvelope>, OrderError> {
    let service = OrderService::new(state.db.clone());
    let orders = service.list().await?;

    Ok(Json(OrdersEnvelope {
        orders: orders.into_iter().map(OrderData::from).collect(),
    }))
}

/// List the caller's own orders
///
/// GET /api/v1/orders/my
#[utoipa::path(
    get,
    path = "/api/v1/orders/my",
    responses(
        (status = 200, description = "Caller's orders, newest first", body = OrdersEnvelope),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_jwt" = [])),
    tag = "Orders"
)]
pub async fn list_my_orders(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<OrdersEnvelope>, OrderError> {
    let user_id = claims.user_id().unwrap_or_default();

    let service = OrderService::new(state.db.clone());
    let orders = service.list_for_user(user_id).await?;

    Ok(Json(OrdersEnvelope {
        orders: orders.into_iter().map(OrderData::from).collect(),
    }))
}

/// Update an order (owner only, merge-on-present)
///
/// PUT /api/v1/orders/update/{order_id}
#[utoipa::path(
    put,
    path = "/api/v1/orders/update/{order_id}",
    params(
        ("order_id" = i64, Path, description = "Order ID")
    ),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = MessageResponse),
        (status = 400, description = "Malformed payment date"),
        (status = 403, description = "Caller does not own the order"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_jwt" = [])),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(order_id): Path<i64>,
    Json(req): Json<UpdateOrderRequest>,
) -> Result<Json<MessageResponse>, OrderError> {
    let user_id = claims.user_id().unwrap_or_default();

    let service = OrderService::new(state.db.clone());
    service.update(user_id, order_id, req).await?;

    Ok(Json(MessageResponse::new("Order updated successfully")))
}

/// Delete an order (owner only)
///
/// DELETE /api/v1/orders/delete/{order_id}
#[utoipa::path(
    delete,
    path = "/api/v1/orders/delete/{order_id}",
    params(
        ("order_id" = i64, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order deleted", body = MessageResponse),
        (status = 403, description = "Caller does not own the order"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_jwt" = [])),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(order_id): Path<i64>,
) -> Result<Json<MessageResponse>, OrderError> {
    let user_id = claims.user_id().unwrap_or_default();

    let service = OrderService::new(state.db.clone());
    service.delete(user_id, order_id).await?;

    Ok(Json(MessageResponse::new("Order deleted successfully")))
}
