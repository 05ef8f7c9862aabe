//! Driving port for order mutations.

use async_trait::async_trait;

use crate::domain::{DomainError, NewOrder, OrderFields, OrderId, OrderResponse};

/// Write-side use cases for orders.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrdersCommand: Send + Sync {
    /// Creates an order.
    async fn create_order(&self, order: NewOrder) -> Result<OrderResponse, DomainError>;

    /// Replaces the fields of the order with `id`.
    async fn update_order(
        &self,
        id: OrderId,
        fields: OrderFields,
    ) -> Result<OrderResponse, DomainError>;

    /// Deletes the order with `id`.
    async fn delete_order(&self, id: OrderId) -> Result<(), DomainError>;
}
