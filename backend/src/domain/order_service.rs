//! Order domain service over [`OrderRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{OrderPersistenceError, OrderRepository, OrdersCommand, OrdersQuery};
use crate::domain::{
    DomainError, NewOrder, OrderFields, OrderId, OrderMapper, OrderResponse, RecordMapper,
};

const NOT_FOUND: &str = "Order not found";
const ALREADY_EXISTS: &str = "Order already exists";

/// Order service implementing [`OrdersQuery`] and [`OrdersCommand`].
#[derive(Clone)]
pub struct OrderService<R> {
    repository: Arc<R>,
    mapper: OrderMapper,
}

impl<R> OrderService<R> {
    /// Create a new service over the given order repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            mapper: OrderMapper,
        }
    }
}

impl<R> OrderService<R>
where
    R: OrderRepository,
{
    fn map_persistence_error(err: OrderPersistenceError) -> DomainError {
        match err {
            OrderPersistenceError::Duplicate { message } => {
                debug!(%message, "order insert rejected as duplicate");
                DomainError::conflict(ALREADY_EXISTS)
            }
            OrderPersistenceError::Connection { message } => {
                error!(%message, "order repository unavailable");
                DomainError::internal(format!("order repository unavailable: {message}"))
            }
            OrderPersistenceError::Query { message } => {
                error!(%message, "order repository error");
                DomainError::internal(format!("order repository error: {message}"))
            }
        }
    }

    async fn exists(&self, id: OrderId) -> Result<bool, DomainError> {
        self.repository
            .exists_by_id(id)
            .await
            .map_err(Self::map_persistence_error)
    }
}

#[async_trait]
impl<R> OrdersQuery for OrderService<R>
where
    R: OrderRepository,
{
    async fn get_order(&self, id: OrderId) -> Result<OrderResponse, DomainError> {
        let record = self
            .repository
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| DomainError::not_found(NOT_FOUND))?;
        Ok(self.mapper.map(&record))
    }

    async fn list_orders(&self) -> Result<Vec<OrderResponse>, DomainError> {
        let records = self
            .repository
            .find_all()
            .await
            .map_err(Self::map_persistence_error)?;
        Ok(self.mapper.map_all(&records))
    }
}

#[async_trait]
impl<R> OrdersCommand for OrderService<R>
where
    R: OrderRepository,
{
    async fn create_order(&self, order: NewOrder) -> Result<OrderResponse, DomainError> {
        if let Some(id) = order.id {
            if self.exists(id).await? {
                return Err(DomainError::conflict(ALREADY_EXISTS));
            }
        }

        let record = self
            .repository
            .insert(&order)
            .await
            .map_err(Self::map_persistence_error)?;
        Ok(self.mapper.map(&record))
    }

    async fn update_order(
        &self,
        id: OrderId,
        fields: OrderFields,
    ) -> Result<OrderResponse, DomainError> {
        let mut record = self
            .repository
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| DomainError::not_found(NOT_FOUND))?;

        record.apply(fields);

        if !self
            .repository
            .update(&record)
            .await
            .map_err(Self::map_persistence_error)?
        {
            return Err(DomainError::not_found(NOT_FOUND));
        }
        Ok(self.mapper.map(&record))
    }

    async fn delete_order(&self, id: OrderId) -> Result<(), DomainError> {
        if !self.exists(id).await? {
            return Err(DomainError::not_found(NOT_FOUND));
        }
        let deleted = self
            .repository
            .delete_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?;
        deleted.then_some(()).ok_or_else(|| DomainError::not_found(NOT_FOUND))
    }
}
