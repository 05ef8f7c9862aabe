//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer. Insert rows carry an
//! optional id: `None` lets the identity column assign one.

use diesel::prelude::*;
use rust_decimal::Decimal;

use crate::domain::{
    NewOrder, NewProduct, NewUser, OrderFields, OrderId, OrderRecord, ProductFields, ProductId,
    ProductRecord, UserFields, UserId, UserRecord,
};

use super::schema::{orders, products, users};

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Option<i32>,
    pub name: &'a str,
    pub email: &'a str,
    pub age: &'a str,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserUpdate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub age: &'a str,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        Self::new(
            UserId::new(row.id),
            UserFields {
                name: row.name,
                email: row.email,
                age: row.age,
            },
        )
    }
}

impl<'a> From<&'a NewUser> for NewUserRow<'a> {
    fn from(user: &'a NewUser) -> Self {
        Self {
            id: user.id.map(UserId::get),
            name: &user.fields.name,
            email: &user.fields.email,
            age: &user.fields.age,
        }
    }
}

impl<'a> From<&'a UserRecord> for UserUpdate<'a> {
    fn from(user: &'a UserRecord) -> Self {
        Self {
            name: user.name(),
            email: user.email(),
            age: user.age(),
        }
    }
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProductRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub availability: bool,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = products)]
pub(crate) struct NewProductRow<'a> {
    pub id: Option<i32>,
    pub name: &'a str,
    pub description: &'a str,
    pub price: Decimal,
    pub availability: bool,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = products)]
pub(crate) struct ProductUpdate<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: Decimal,
    pub availability: bool,
}

impl From<ProductRow> for ProductRecord {
    fn from(row: ProductRow) -> Self {
        Self::new(
            ProductId::new(row.id),
            ProductFields {
                name: row.name,
                description: row.description,
                price: row.price,
                availability: row.availability,
            },
        )
    }
}

impl<'a> From<&'a NewProduct> for NewProductRow<'a> {
    fn from(product: &'a NewProduct) -> Self {
        Self {
            id: product.id.map(ProductId::get),
            name: &product.fields.name,
            description: &product.fields.description,
            price: product.fields.price,
            availability: product.fields.availability,
        }
    }
}

impl<'a> From<&'a ProductRecord> for ProductUpdate<'a> {
    fn from(product: &'a ProductRecord) -> Self {
        Self {
            name: product.name(),
            description: product.description(),
            price: product.price(),
            availability: product.is_available(),
        }
    }
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct OrderRow {
    pub id: i32,
    pub quantity: i32,
    pub total_price: Decimal,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = orders)]
pub(crate) struct NewOrderRow {
    pub id: Option<i32>,
    pub quantity: i32,
    pub total_price: Decimal,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = orders)]
pub(crate) struct OrderUpdate {
    pub quantity: i32,
    pub total_price: Decimal,
}

impl From<OrderRow> for OrderRecord {
    fn from(row: OrderRow) -> Self {
        Self::new(
            OrderId::new(row.id),
            OrderFields {
                quantity: row.quantity,
                total_price: row.total_price,
            },
        )
    }
}

impl From<&NewOrder> for NewOrderRow {
    fn from(order: &NewOrder) -> Self {
        Self {
            id: order.id.map(OrderId::get),
            quantity: order.fields.quantity,
            total_price: order.fields.total_price,
        }
    }
}

impl From<&OrderRecord> for OrderUpdate {
    fn from(order: &OrderRecord) -> Self {
        Self {
            quantity: order.quantity(),
            total_price: order.total_price(),
        }
    }
}
