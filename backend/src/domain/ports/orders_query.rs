//! Driving port for order reads.

use async_trait::async_trait;

use crate::domain::{DomainError, OrderId, OrderResponse};

/// Read-side use cases for orders.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrdersQuery: Send + Sync {
    /// Fetches the order with `id`.
    async fn get_order(&self, id: OrderId) -> Result<OrderResponse, DomainError>;

    /// Lists every order.
    async fn list_orders(&self) -> Result<Vec<OrderResponse>, DomainError>;
}
