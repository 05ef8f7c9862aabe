//! Product domain service.
//!
//! Same contract as the user service, over [`ProductRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{
    ProductPersistenceError, ProductRepository, ProductsCommand, ProductsQuery,
};
use crate::domain::{
    DomainError, NewProduct, ProductFields, ProductId, ProductMapper, ProductResponse, RecordMapper,
};

const NOT_FOUND: &str = "Product not found";
const ALREADY_EXISTS: &str = "Product already exists";

/// Product service implementing [`ProductsQuery`] and [`ProductsCommand`].
#[derive(Clone)]
pub struct ProductService<R> {
    repository: Arc<R>,
    mapper: ProductMapper,
}

impl<R> ProductService<R> {
    /// Create a new service over the given product repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            mapper: ProductMapper,
        }
    }
}

impl<R> ProductService<R>
where
    R: ProductRepository,
{
    fn map_persistence_error(err: ProductPersistenceError) -> DomainError {
        match err {
            ProductPersistenceError::Duplicate { message } => {
                debug!(%message, "product insert rejected as duplicate");
                DomainError::conflict(ALREADY_EXISTS)
            }
            ProductPersistenceError::Connection { message } => {
                error!(%message, "product repository unavailable");
                DomainError::internal(format!("product repository unavailable: {message}"))
            }
            ProductPersistenceError::Query { message } => {
                error!(%message, "product repository error");
                DomainError::internal(format!("product repository error: {message}"))
            }
        }
    }

    async fn exists(&self, id: ProductId) -> Result<bool, DomainError> {
        self.repository
            .exists_by_id(id)
            .await
            .map_err(Self::map_persistence_error)
    }
}

#[async_trait]
impl<R> ProductsQuery for ProductService<R>
where
    R: ProductRepository,
{
    async fn get_product(&self, id: ProductId) -> Result<ProductResponse, DomainError> {
        let record = self
            .repository
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| DomainError::not_found(NOT_FOUND))?;
        Ok(self.mapper.map(&record))
    }

    async fn list_products(&self) -> Result<Vec<ProductResponse>, DomainError> {
        let records = self
            .repository
            .find_all()
            .await
            .map_err(Self::map_persistence_error)?;
        Ok(self.mapper.map_all(&records))
    }
}

#[async_trait]
impl<R> ProductsCommand for ProductService<R>
where
    R: ProductRepository,
{
    async fn create_product(&self, product: NewProduct) -> Result<ProductResponse, DomainError> {
        if let Some(id) = product.id {
            if self.exists(id).await? {
                return Err(DomainError::conflict(ALREADY_EXISTS));
            }
        }

        let record = self
            .repository
            .insert(&product)
            .await
            .map_err(Self::map_persistence_error)?;
        Ok(self.mapper.map(&record))
    }

    async fn update_product(
        &self,
        id: ProductId,
        fields: ProductFields,
    ) -> Result<ProductResponse, DomainError> {
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

    async fn delete_product(&self, id: ProductId) -> Result<(), DomainError> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ProductRecord;
    use crate::domain::ports::MockProductRepository;
    use rstest::{fixture, rstest};
    use rust_decimal::Decimal;

    fn make_service(repo: MockProductRepository) -> ProductService<MockProductRepository> {
        ProductService::new(Arc::new(repo))
    }

    #[fixture]
    fn kettle() -> ProductFields {
        ProductFields {
            name: "kettle".into(),
            description: "1.7 litre".into(),
            price: Decimal::new(2499, 2),
            availability: true,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn get_product_keeps_exact_price(kettle: ProductFields) {
        let stored = ProductRecord::new(ProductId::new(1), kettle);
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .return_once(move |_| Ok(Some(stored)));

        let product = make_service(repo)
            .get_product(ProductId::new(1))
            .await
            .expect("product found");

        assert_eq!(product.price.to_string(), "24.99");
        assert!(product.availability);
    }

    #[rstest]
    #[tokio::test]
    async fn create_product_with_taken_id_conflicts(kettle: ProductFields) {
        let mut repo = MockProductRepository::new();
        repo.expect_exists_by_id().times(1).return_once(|_| Ok(true));
        repo.expect_insert().never();

        let err = make_service(repo)
            .create_product(NewProduct {
                id: Some(ProductId::new(1)),
                fields: kettle,
            })
            .await
            .expect_err("conflict");

        assert_eq!(err.code(), ErrorCode::Conflict);
    }

    #[rstest]
    #[tokio::test]
    async fn update_product_reports_not_found(kettle: ProductFields) {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().times(1).return_once(|_| Ok(None));
        repo.expect_update().never();

        let err = make_service(repo)
            .update_product(ProductId::new(9), kettle)
            .await
            .expect_err("missing product");

        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "Product not found");
    }

    #[rstest]
    #[tokio::test]
    async fn delete_product_reports_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_exists_by_id().times(1).return_once(|_| Ok(false));
        repo.expect_delete_by_id().never();

        let err = make_service(repo)
            .delete_product(ProductId::new(9))
            .await
            .expect_err("missing product");

        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn list_products_maps_query_failure_to_internal() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_all()
            .times(1)
            .return_once(|| Err(ProductPersistenceError::query("relation missing")));

        let err = make_service(repo)
            .list_products()
            .await
            .expect_err("internal");

        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
