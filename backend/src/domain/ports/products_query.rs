//! Driving port for product reads.

use async_trait::async_trait;

use crate::domain::{DomainError, ProductId, ProductResponse};

/// Read-side use cases for products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductsQuery: Send + Sync {
    /// Fetches the product with `id`.
    async fn get_product(&self, id: ProductId) -> Result<ProductResponse, DomainError>;

    /// Lists every product.
    async fn list_products(&self) -> Result<Vec<ProductResponse>, DomainError>;
}
