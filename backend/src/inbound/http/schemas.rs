//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers here mirror their JSON shape so the generated document matches
//! what handlers actually serialise.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request body or path could not be decoded.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No record has the requested id.
    #[schema(rename = "not_found")]
    NotFound,
    /// A record with the supplied id already exists.
    #[schema(rename = "conflict")]
    Conflict,
    /// The store failed; details are withheld.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::DomainError`].
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    #[schema(example = "User not found")]
    message: String,
    /// Matches the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::UserResponse`].
#[derive(ToSchema)]
#[schema(as = UserResponse)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserResponseSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "john")]
    name: String,
    #[schema(example = "j@x.com")]
    email: String,
    /// Free text; not parsed as a number.
    #[schema(example = "20")]
    age: String,
}

/// OpenAPI schema for [`crate::domain::ProductResponse`].
#[derive(ToSchema)]
#[schema(as = ProductResponse)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ProductResponseSchema {
    id: i32,
    #[schema(example = "kettle")]
    name: String,
    description: String,
    /// Exact decimal rendered as a string.
    #[schema(example = "24.99")]
    price: String,
    availability: bool,
}

/// OpenAPI schema for [`crate::domain::OrderResponse`].
#[derive(ToSchema)]
#[schema(as = OrderResponse, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct OrderResponseSchema {
    id: i32,
    #[schema(example = 2)]
    quantity: i32,
    #[schema(example = "49.98")]
    total_price: String,
}
