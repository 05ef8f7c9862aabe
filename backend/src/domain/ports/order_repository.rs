//! Port abstraction for order persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewOrder, OrderId, OrderRecord};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by order repository adapters.
    pub enum OrderPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "order repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "order repository query failed: {message}",
        /// The store rejected an insert because the id is taken.
        Duplicate { message: String } => "order repository rejected duplicate: {message}",
    }
}

/// Entity store for [`OrderRecord`] values keyed by [`OrderId`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Looks up the order with `id`, if any.
    async fn find_by_id(&self, id: OrderId) -> Result<Option<OrderRecord>, OrderPersistenceError>;

    /// Whether an order with `id` is stored.
    async fn exists_by_id(&self, id: OrderId) -> Result<bool, OrderPersistenceError>;

    /// Every stored order, ordered by id.
    async fn find_all(&self) -> Result<Vec<OrderRecord>, OrderPersistenceError>;

    /// Stores a new order and returns the persisted record.
    async fn insert(&self, order: &NewOrder) -> Result<OrderRecord, OrderPersistenceError>;

    /// Returns `false` when no row has `order.id()`.
    async fn update(&self, order: &OrderRecord) -> Result<bool, OrderPersistenceError>;

    /// Returns `false` when nothing was deleted.
    async fn delete_by_id(&self, id: OrderId) -> Result<bool, OrderPersistenceError>;
}
