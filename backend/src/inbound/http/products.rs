//! Products API handlers, mirroring the users endpoints under `/products`.

use actix_web::{HttpResponse, delete, get, post, put, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NewProduct, ProductFields, ProductId, ProductResponse};
use crate::inbound::http::ApiResult;
use crate::inbound::http::message::MessageResponse;
use crate::inbound::http::schemas::{ErrorSchema, ProductResponseSchema};
use crate::inbound::http::state::ProductsState;

/// Request body for creating or replacing a product.
///
/// `price` is a decimal string such as `"24.99"`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ProductRequest {
    /// Client-chosen id; ignored on update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    /// Product name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Unit price.
    #[schema(value_type = String, example = "24.99")]
    pub price: Decimal,
    /// Whether the product can be ordered.
    pub availability: bool,
}

impl ProductRequest {
    fn into_parts(self) -> (Option<ProductId>, ProductFields) {
        let Self {
            id,
            name,
            description,
            price,
            availability,
        } = self;
        (
            id.map(ProductId::new),
            ProductFields {
                name,
                description,
                price,
                availability,
            },
        )
    }
}

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "Products", body = [ProductResponseSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "listProducts"
)]
#[get("/products")]
/// Lists all products.
pub async fn list_products(
    state: web::Data<ProductsState>,
) -> ApiResult<web::Json<Vec<ProductResponse>>> {
    Ok(web::Json(state.query.list_products().await?))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product", body = ProductResponseSchema),
        (status = 400, description = "Id is not an integer", body = ErrorSchema),
        (status = 404, description = "No such product", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "getProductById"
)]
#[get("/products/{id}")]
/// Returns the product with the given id.
pub async fn get_product(
    state: web::Data<ProductsState>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<ProductResponse>> {
    let product = state
        .query
        .get_product(ProductId::new(id.into_inner()))
        .await?;
    Ok(web::Json(product))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = MessageResponse),
        (status = 400, description = "Malformed body", body = ErrorSchema),
        (status = 409, description = "Id already taken", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "createProduct"
)]
#[post("/products")]
/// Creates a product.
pub async fn create_product(
    state: web::Data<ProductsState>,
    payload: web::Json<ProductRequest>,
) -> ApiResult<HttpResponse> {
    let (id, fields) = payload.into_inner().into_parts();
    let created = state
        .command
        .create_product(NewProduct { id, fields })
        .await?;
    Ok(HttpResponse::Created().json(MessageResponse::new("Product created", created.id)))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = MessageResponse),
        (status = 400, description = "Malformed body or id", body = ErrorSchema),
        (status = 404, description = "No such product", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "updateProductById"
)]
#[put("/products/{id}")]
/// Updates the product with the given id.
pub async fn update_product(
    state: web::Data<ProductsState>,
    id: web::Path<i32>,
    payload: web::Json<ProductRequest>,
) -> ApiResult<HttpResponse> {
    let (_, fields) = payload.into_inner().into_parts();
    let updated = state
        .command
        .update_product(ProductId::new(id.into_inner()), fields)
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Product updated", updated.id)))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Id is not an integer", body = ErrorSchema),
        (status = 404, description = "No such product", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "deleteProductById"
)]
#[delete("/products/{id}")]
/// Deletes the product with the given id.
pub async fn delete_product(
    state: web::Data<ProductsState>,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state
        .command
        .delete_product(ProductId::new(id.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Mount the product routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_products)
        .service(create_product)
        .service(get_product)
        .service(update_product)
        .service(delete_product);
}
