//! PostgreSQL-backed `OrderRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{OrderPersistenceError, OrderRepository};
use crate::domain::{NewOrder, OrderId, OrderRecord};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::diesel_helpers::resync_identity;
use super::models::{NewOrderRow, OrderRow, OrderUpdate};
use super::pool::DbPool;
use super::schema::orders;

/// Diesel-backed implementation of the [`OrderRepository`] port.
#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Insert one row and, for explicit ids, resync the identity in the same
/// transaction so a failed resync leaves nothing behind.
async fn insert_order_row(
    conn: &mut AsyncPgConnection,
    row: NewOrderRow,
    resync: Option<&'static str>,
) -> Result<OrderRow, diesel::result::Error> {
    conn.transaction(|conn| {
        async move {
            let inserted: OrderRow = diesel::insert_into(orders::table)
                .values(row)
                .returning(OrderRow::as_returning())
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
impl OrderRepository for DieselOrderRepository {
    async fn find_by_id(&self, id: OrderId) -> Result<Option<OrderRecord>, OrderPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<OrderRow> = orders::table
            .find(id.get())
            .select(OrderRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(OrderRecord::from))
    }

    async fn exists_by_id(&self, id: OrderId) -> Result<bool, OrderPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(orders::table.find(id.get())))
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn find_all(&self) -> Result<Vec<OrderRecord>, OrderPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<OrderRow> = orders::table
            .order(orders::id.asc())
            .select(OrderRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(OrderRecord::from).collect())
    }

    async fn insert(&self, order: &NewOrder) -> Result<OrderRecord, OrderPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let resync = order.id.map(|_| "orders");
        let row = insert_order_row(&mut conn, NewOrderRow::from(order), resync)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn update(&self, order: &OrderRecord) -> Result<bool, OrderPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(orders::table.find(order.id().get()))
            .set(OrderUpdate::from(order))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(updated > 0)
    }

    async fn delete_by_id(&self, id: OrderId) -> Result<bool, OrderPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(orders::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
