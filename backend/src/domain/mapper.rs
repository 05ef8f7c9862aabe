//! Entity-to-projection mappers.
//!
//! Each mapper is an explicit field-by-field copy. Adding a field to a record
//! without handling it here is a compile error because the projections are
//! built with struct literals.

use super::{
    OrderRecord, OrderResponse, ProductRecord, ProductResponse, UserRecord, UserResponse,
};

/// Pure, total conversion from a persisted record to its projection.
pub trait RecordMapper: Send + Sync {
    /// Persisted value consumed by the mapper.
    type Record;
    /// Outward-facing value produced by the mapper.
    type Projection;

    /// Copy every field of `record` into a new projection.
    fn map(&self, record: &Self::Record) -> Self::Projection;

    /// Map a sequence of records, preserving order.
    fn map_all(&self, records: &[Self::Record]) -> Vec<Self::Projection> {
        records.iter().map(|record| self.map(record)).collect()
    }
}

/// Maps [`UserRecord`] to [`UserResponse`].
///
/// # Examples
/// ```
/// use virtual_market::domain::{RecordMapper, UserFields, UserId, UserMapper, UserRecord};
///
/// let record = UserRecord::new(
///     UserId::new(1),
///     UserFields { name: "john".into(), email: "j@x.com".into(), age: "20".into() },
/// );
/// let response = UserMapper.map(&record);
/// assert_eq!(response.id, 1);
/// assert_eq!(response.name, "john");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct UserMapper;

impl RecordMapper for UserMapper {
    type Record = UserRecord;
    type Projection = UserResponse;

    fn map(&self, record: &UserRecord) -> UserResponse {
        UserResponse {
            id: record.id().get(),
            name: record.name().to_owned(),
            email: record.email().to_owned(),
            age: record.age().to_owned(),
        }
    }
}

/// Maps [`ProductRecord`] to [`ProductResponse`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductMapper;

impl RecordMapper for ProductMapper {
    type Record = ProductRecord;
    type Projection = ProductResponse;

    fn map(&self, record: &ProductRecord) -> ProductResponse {
        ProductResponse {
            id: record.id().get(),
            name: record.name().to_owned(),
            description: record.description().to_owned(),
            price: record.price(),
            availability: record.is_available(),
        }
    }
}

/// Maps [`OrderRecord`] to [`OrderResponse`].
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderMapper;

impl RecordMapper for OrderMapper {
    type Record = OrderRecord;
    type Projection = OrderResponse;

    fn map(&self, record: &OrderRecord) -> OrderResponse {
        OrderResponse {
            id: record.id().get(),
            quantity: record.quantity(),
            total_price: record.total_price(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderFields, OrderId, ProductFields, ProductId, UserFields, UserId};
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    fn user_mapper_copies_every_field() {
        let record = UserRecord::new(
            UserId::new(1),
            UserFields {
                name: "john".into(),
                email: "j@x.com".into(),
                age: "20".into(),
            },
        );

        assert_eq!(
            UserMapper.map(&record),
            UserResponse {
                id: 1,
                name: "john".into(),
                email: "j@x.com".into(),
                age: "20".into(),
            }
        );
    }

    #[rstest]
    fn product_mapper_copies_every_field() {
        let record = ProductRecord::new(
            ProductId::new(3),
            ProductFields {
                name: "kettle".into(),
                description: "1.7 litre".into(),
                price: Decimal::new(2499, 2),
                availability: false,
            },
        );

        let response = ProductMapper.map(&record);

        assert_eq!(response.id, 3);
        assert_eq!(response.name, "kettle");
        assert_eq!(response.description, "1.7 litre");
        assert_eq!(response.price, Decimal::new(2499, 2));
        assert!(!response.availability);
    }

    #[rstest]
    fn order_mapper_copies_every_field() {
        let record = OrderRecord::new(
            OrderId::new(8),
            OrderFields {
                quantity: 4,
                total_price: Decimal::new(1000, 2),
            },
        );

        assert_eq!(
            OrderMapper.map(&record),
            OrderResponse {
                id: 8,
                quantity: 4,
                total_price: Decimal::new(1000, 2),
            }
        );
    }

    #[rstest]
    fn map_all_preserves_order() {
        let records: Vec<UserRecord> = [5, 1, 3]
            .into_iter()
            .map(|id| {
                UserRecord::new(
                    UserId::new(id),
                    UserFields {
                        name: format!("user-{id}"),
                        email: String::new(),
                        age: String::new(),
                    },
                )
            })
            .collect();

        let ids: Vec<i32> = UserMapper.map_all(&records).into_iter().map(|u| u.id).collect();

        assert_eq!(ids, vec![5, 1, 3]);
    }
}
