//! Domain entities, services, and ports.
//!
//! Purpose: define the user, product, and order records, the mappers that
//! project them into response shapes, and the services that translate
//! persistence failures into the API error taxonomy.
//!
//! Public surface:
//! - DomainError / ErrorCode: API error payload and its stable identifier.
//! - TraceId: per-request correlation id, scoped by the trace middleware.
//! - `*Record`, `*Fields`, `New*`, `*Response`: entity types per resource.
//! - `*Service`: driving-port implementations over a repository port.

pub mod error;
pub mod mapper;
pub mod order;
pub mod order_service;
pub mod ports;
pub mod product;
pub mod product_service;
pub(crate) mod record_id;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{DomainError, ErrorCode, ErrorValidationError};
pub use self::mapper::{OrderMapper, ProductMapper, RecordMapper, UserMapper};
pub use self::order::{NewOrder, OrderFields, OrderId, OrderRecord, OrderResponse};
pub use self::order_service::OrderService;
pub use self::product::{NewProduct, ProductFields, ProductId, ProductRecord, ProductResponse};
pub use self::product_service::ProductService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, UserFields, UserId, UserRecord, UserResponse};
pub use self::user_service::UserService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use virtual_market::domain::{ApiResult, DomainError};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(DomainError::not_found("User not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, DomainError>;
