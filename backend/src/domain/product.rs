//! Product entity and its response projection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::record_id::define_record_id;

define_record_id! {
    /// Identifier of a persisted product.
    ProductId
}

/// The mutable part of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Unit price.
    pub price: Decimal,
    /// Whether the product can currently be ordered.
    pub availability: bool,
}

/// A product about to be created; `id` is store-assigned when `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    /// Caller-chosen id, if any.
    pub id: Option<ProductId>,
    /// Values to store.
    pub fields: ProductFields,
}

/// Persisted product row as seen by the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    id: ProductId,
    name: String,
    description: String,
    price: Decimal,
    availability: bool,
}

impl ProductRecord {
    /// Build a record from its id and field values.
    #[must_use]
    pub fn new(id: ProductId, fields: ProductFields) -> Self {
        let ProductFields {
            name,
            description,
            price,
            availability,
        } = fields;
        Self {
            id,
            name,
            description,
            price,
            availability,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Unit price.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// Whether the product can be ordered.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.availability
    }

    /// Replace every mutable field, keeping the id.
    pub fn apply(&mut self, fields: ProductFields) {
        let ProductFields {
            name,
            description,
            price,
            availability,
        } = fields;
        self.name = name;
        self.description = description;
        self.price = price;
        self.availability = availability;
    }
}

/// Outward-facing representation of a product. Prices serialise as decimal
/// strings so no precision is lost in transit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Store-assigned identifier.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Unit price as a decimal string.
    pub price: Decimal,
    /// Whether the product can currently be ordered.
    pub availability: bool,
}
