//! Order entity and its response projection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::record_id::define_record_id;

define_record_id! {
    /// Identifier of a persisted order.
    OrderId
}

/// The mutable part of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFields {
    /// Number of units ordered.
    pub quantity: i32,
    /// Price of the whole order.
    pub total_price: Decimal,
}

/// An order about to be created; `id` is store-assigned when `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    /// Caller-chosen id, if any.
    pub id: Option<OrderId>,
    /// Values to store.
    pub fields: OrderFields,
}

/// Persisted order row as seen by the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    id: OrderId,
    quantity: i32,
    total_price: Decimal,
}

impl OrderRecord {
    /// Build a record from its id and field values.
    #[must_use]
    pub const fn new(id: OrderId, fields: OrderFields) -> Self {
        Self {
            id,
            quantity: fields.quantity,
            total_price: fields.total_price,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    /// Units ordered.
    #[must_use]
    pub const fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Order total.
    #[must_use]
    pub const fn total_price(&self) -> Decimal {
        self.total_price
    }

    /// Replace quantity and total, keeping the id.
    pub const fn apply(&mut self, fields: OrderFields) {
        self.quantity = fields.quantity;
        self.total_price = fields.total_price;
    }
}

/// Outward-facing representation of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    /// Store-assigned identifier.
    pub id: i32,
    /// Number of units ordered.
    pub quantity: i32,
    /// Price of the whole order, serialised as `totalPrice`.
    pub total_price: Decimal,
}
