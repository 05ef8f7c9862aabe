//! In-process repositories used when no database is configured.
//!
//! Each repository keeps its rows in a [`MemoryTable`] guarded by a mutex,
//! so every call is a single serialized read-modify-write. Data lives as
//! long as the process.

mod table;

use async_trait::async_trait;

use crate::domain::ports::{
    OrderPersistenceError, OrderRepository, ProductPersistenceError, ProductRepository,
    UserPersistenceError, UserRepository,
};
use crate::domain::{
    NewOrder, NewProduct, NewUser, OrderId, OrderRecord, ProductId, ProductRecord, UserId,
    UserRecord,
};

use table::{MemoryTable, TableError};

macro_rules! memory_repository {
    (
        $(#[$meta:meta])*
        $name:ident: $port:ident<$record:ty, $new:ty, $id:ty, $error:ty>
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $name {
            table: MemoryTable<$record>,
        }

        impl $name {
            /// An empty store.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            fn map_table_error(err: TableError) -> $error {
                match err {
                    TableError::Poisoned => <$error>::query("memory store lock poisoned"),
                    TableError::Duplicate(id) => <$error>::duplicate(format!("id {id}")),
                    TableError::Exhausted => <$error>::query("memory store has no free ids"),
                }
            }
        }

        #[async_trait]
        impl $port for $name {
            async fn find_by_id(&self, id: $id) -> Result<Option<$record>, $error> {
                self.table.get(id.get()).map_err(Self::map_table_error)
            }

            async fn exists_by_id(&self, id: $id) -> Result<bool, $error> {
                self.table.contains(id.get()).map_err(Self::map_table_error)
            }

            async fn find_all(&self) -> Result<Vec<$record>, $error> {
                self.table.all().map_err(Self::map_table_error)
            }

            async fn insert(&self, new: &$new) -> Result<$record, $error> {
                self.table
                    .insert_with(new.id.map(<$id>::get), |id| {
                        <$record>::new(<$id>::new(id), new.fields.clone())
                    })
                    .map_err(Self::map_table_error)
            }

            async fn update(&self, record: &$record) -> Result<bool, $error> {
                self.table
                    .replace(record.id().get(), record.clone())
                    .map_err(Self::map_table_error)
            }

            async fn delete_by_id(&self, id: $id) -> Result<bool, $error> {
                self.table.remove(id.get()).map_err(Self::map_table_error)
            }
        }
    };
}

memory_repository! {
    /// Memory-backed [`UserRepository`].
    MemoryUserRepository: UserRepository<UserRecord, NewUser, UserId, UserPersistenceError>
}

memory_repository! {
    /// Memory-backed [`ProductRepository`].
    MemoryProductRepository:
        ProductRepository<ProductRecord, NewProduct, ProductId, ProductPersistenceError>
}

memory_repository! {
    /// Memory-backed [`OrderRepository`].
    MemoryOrderRepository: OrderRepository<OrderRecord, NewOrder, OrderId, OrderPersistenceError>
}
