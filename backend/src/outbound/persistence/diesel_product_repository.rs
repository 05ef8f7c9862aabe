//! PostgreSQL-backed `ProductRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{ProductPersistenceError, ProductRepository};
use crate::domain::{NewProduct, ProductId, ProductRecord};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::diesel_helpers::resync_identity;
use super::models::{NewProductRow, ProductRow, ProductUpdate};
use super::pool::DbPool;
use super::schema::products;

/// Diesel-backed implementation of the [`ProductRepository`] port.
#[derive(Clone)]
pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Insert one row and, for explicit ids, resync the identity in the same
/// transaction so a failed resync leaves nothing behind.
async fn insert_product_row(
    conn: &mut AsyncPgConnection,
    row: NewProductRow<'_>,
    resync: Option<&'static str>,
) -> Result<ProductRow, diesel::result::Error> {
    conn.transaction(|conn| {
        async move {
            let inserted: ProductRow = diesel::insert_into(products::table)
                .values(row)
                .returning(ProductRow::as_returning())
                .get_result(conn)
                .await?;
            if let Some(table) = resync {
                resync_identity(conn, table).await?;
            }
            Ok(inserted)
        }
        .scope_boxed()
    })
    .await
}

#[async_trait]
impl ProductRepository for DieselProductRepository {
    async fn find_by_id(
        &self,
        id: ProductId,
    ) -> Result<Option<ProductRecord>, ProductPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ProductRow> = products::table
            .find(id.get())
            .select(ProductRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(ProductRecord::from))
    }

    async fn exists_by_id(&self, id: ProductId) -> Result<bool, ProductPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(products::table.find(id.get())))
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn find_all(&self) -> Result<Vec<ProductRecord>, ProductPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ProductRow> = products::table
            .order(products::id.asc())
            .select(ProductRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(ProductRecord::from).collect())
    }

    async fn insert(&self, product: &NewProduct) -> Result<ProductRecord, ProductPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let resync = product.id.map(|_| "products");
        let row = insert_product_row(&mut conn, NewProductRow::from(product), resync)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn update(&self, product: &ProductRecord) -> Result<bool, ProductPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(products::table.find(product.id().get()))
            .set(ProductUpdate::from(product))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(updated > 0)
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<bool, ProductPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(products::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
