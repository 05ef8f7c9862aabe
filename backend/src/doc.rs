//! OpenAPI documentation for the REST API.
//!
//! [`ApiDoc`] lists every endpoint of all three resources even though one
//! process serves only one of them. Swagger UI serves it in debug builds and
//! `openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::message::MessageResponse;
use crate::inbound::http::orders::OrderRequest;
use crate::inbound::http::products::ProductRequest;
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, OrderResponseSchema, ProductResponseSchema, UserResponseSchema,
};
use crate::inbound::http::users::UserRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Virtual Market API",
        description = "CRUD endpoints for users, products, and orders, plus health checks."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::products::list_products,
        crate::inbound::http::products::get_product,
        crate::inbound::http::products::create_product,
        crate::inbound::http::products::update_product,
        crate::inbound::http::products::delete_product,
        crate::inbound::http::orders::list_orders,
        crate::inbound::http::orders::get_order,
        crate::inbound::http::orders::create_order,
        crate::inbound::http::orders::update_order,
        crate::inbound::http::orders::delete_order,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        UserResponseSchema,
        ProductResponseSchema,
        OrderResponseSchema,
        UserRequest,
        ProductRequest,
        OrderRequest,
        MessageResponse,
    )),
    tags(
        (name = "users", description = "User records"),
        (name = "products", description = "Product catalogue"),
        (name = "orders", description = "Orders"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
