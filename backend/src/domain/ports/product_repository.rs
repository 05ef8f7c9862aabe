//! Port abstraction for product persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewProduct, ProductId, ProductRecord};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by product repository adapters.
    pub enum ProductPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "product repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "product repository query failed: {message}",
        /// The store rejected an insert because the id is taken.
        Duplicate { message: String } => "product repository rejected duplicate: {message}",
    }
}

/// Entity store for [`ProductRecord`] values keyed by [`ProductId`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Looks up the product with `id`, if any.
    async fn find_by_id(
        &self,
        id: ProductId,
    ) -> Result<Option<ProductRecord>, ProductPersistenceError>;

    /// Whether a product with `id` is stored.
    async fn exists_by_id(&self, id: ProductId) -> Result<bool, ProductPersistenceError>;

    /// Every stored product, ordered by id.
    async fn find_all(&self) -> Result<Vec<ProductRecord>, ProductPersistenceError>;

    /// Stores a new product and returns the persisted record.
    async fn insert(&self, product: &NewProduct) -> Result<ProductRecord, ProductPersistenceError>;

    /// Returns `false` when no row has `product.id()`.
    async fn update(&self, product: &ProductRecord) -> Result<bool, ProductPersistenceError>;

    /// Returns `false` when nothing was deleted.
    async fn delete_by_id(&self, id: ProductId) -> Result<bool, ProductPersistenceError>;
}
