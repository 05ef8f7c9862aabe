//! Driving port for product mutations.

use async_trait::async_trait;

use crate::domain::{DomainError, NewProduct, ProductFields, ProductId, ProductResponse};

/// Write-side use cases for products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductsCommand: Send + Sync {
    /// Creates a product.
    async fn create_product(&self, product: NewProduct) -> Result<ProductResponse, DomainError>;

    /// Replaces the fields of the product with `id`.
    async fn update_product(
        &self,
        id: ProductId,
        fields: ProductFields,
    ) -> Result<ProductResponse, DomainError>;

    /// Deletes the product with `id`.
    async fn delete_product(&self, id: ProductId) -> Result<(), DomainError>;
}
