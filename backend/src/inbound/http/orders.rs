//! Orders API handlers under `/orders`.

use actix_web::{HttpResponse, delete, get, post, put, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NewOrder, OrderFields, OrderId, OrderResponse};
use crate::inbound::http::ApiResult;
use crate::inbound::http::message::MessageResponse;
use crate::inbound::http::schemas::{ErrorSchema, OrderResponseSchema};
use crate::inbound::http::state::OrdersState;

/// Request body for creating or replacing an order.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Client-chosen id; ignored on update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    /// Number of units.
    #[schema(example = 2)]
    pub quantity: i32,
    /// Order total, as a decimal string such as `"49.98"`.
    #[schema(value_type = String, example = "49.98")]
    pub total_price: Decimal,
}

impl OrderRequest {
    fn into_parts(self) -> (Option<OrderId>, OrderFields) {
        let Self {
            id,
            quantity,
            total_price,
        } = self;
        (
            id.map(OrderId::new),
            OrderFields {
                quantity,
                total_price,
            },
        )
    }
}

#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "Orders", body = [OrderResponseSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "listOrders"
)]
#[get("/orders")]
/// Lists all orders.
pub async fn list_orders(
    state: web::Data<OrdersState>,
) -> ApiResult<web::Json<Vec<OrderResponse>>> {
    Ok(web::Json(state.query.list_orders().await?))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order", body = OrderResponseSchema),
        (status = 400, description = "Id is not an integer", body = ErrorSchema),
        (status = 404, description = "No such order", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "getOrderById"
)]
#[get("/orders/{id}")]
/// Returns the order with the given id.
pub async fn get_order(
    state: web::Data<OrdersState>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<OrderResponse>> {
    let order = state.query.get_order(OrderId::new(id.into_inner())).await?;
    Ok(web::Json(order))
}

#[utoipa::path(
    post,
    path = "/orders",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order created", body = MessageResponse),
        (status = 400, description = "Malformed body", body = ErrorSchema),
        (status = 409, description = "Id already taken", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "createOrder"
)]
#[post("/orders")]
/// Creates an order.
pub async fn create_order(
    state: web::Data<OrdersState>,
    payload: web::Json<OrderRequest>,
) -> ApiResult<HttpResponse> {
    let (id, fields) = payload.into_inner().into_parts();
    let created = state
        .command
        .create_order(NewOrder { id, fields })
        .await?;
    Ok(HttpResponse::Created().json(MessageResponse::new("Order created", created.id)))
}

#[utoipa::path(
    put,
    path = "/orders/{id}",
    params(("id" = i32, Path, description = "Order id")),
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order updated", body = MessageResponse),
        (status = 400, description = "Malformed body or id", body = ErrorSchema),
        (status = 404, description = "No such order", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "updateOrderById"
)]
#[put("/orders/{id}")]
/// Updates the order with the given id.
pub async fn update_order(
    state: web::Data<OrdersState>,
    id: web::Path<i32>,
    payload: web::Json<OrderRequest>,
) -> ApiResult<HttpResponse> {
    let (_, fields) = payload.into_inner().into_parts();
    let updated = state
        .command
        .update_order(OrderId::new(id.into_inner()), fields)
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Order updated", updated.id)))
}

#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 400, description = "Id is not an integer", body = ErrorSchema),
        (status = 404, description = "No such order", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "deleteOrderById"
)]
#[delete("/orders/{id}")]
/// Deletes the order with the given id.
pub async fn delete_order(
    state: web::Data<OrdersState>,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state
        .command
        .delete_order(OrderId::new(id.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Mount the order routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_orders)
        .service(create_order)
        .service(get_order)
        .service(update_order)
        .service(delete_order);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::OrderService;
    use crate::inbound::http::payload::{json_config, path_config};
    use crate::outbound::memory::MemoryOrderRepository;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    fn state() -> OrdersState {
        OrdersState::from_service(OrderService::new(Arc::new(MemoryOrderRepository::new())))
    }

    #[rstest]
    #[actix_web::test]
    async fn order_total_uses_camel_case_and_exact_decimal() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .app_data(json_config())
                .app_data(path_config())
                .configure(configure),
        )
        .await;

        let create = actix_test::TestRequest::post()
            .uri("/orders")
            .set_json(json!({"id": 3, "quantity": 2, "totalPrice": "49.98"}))
            .to_request();
        let res = actix_test::call_service(&app, create).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let get = actix_test::TestRequest::get().uri("/orders/3").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, get).await;
        assert_eq!(body, json!({"id": 3, "quantity": 2, "totalPrice": "49.98"}));
    }

    #[rstest]
    #[actix_web::test]
    async fn update_of_absent_order_is_not_found() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = actix_test::TestRequest::put()
            .uri("/orders/5")
            .set_json(json!({"quantity": 1, "totalPrice": "1.00"}))
            .to_request();
        let res = actix_test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
