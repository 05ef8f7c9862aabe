//! Shared mapping from pool and Diesel failures to repository port errors.
//!
//! The three repository error enums share the same shape, so each adapter
//! maps through [`RepositoryError`] instead of carrying its own copy.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{OrderPersistenceError, ProductPersistenceError, UserPersistenceError};

use super::pool::PoolError;

/// Port error enums with connection, query, and duplicate-key variants.
pub(crate) trait RepositoryError: Sized {
    fn from_connection(message: String) -> Self;
    fn from_query(message: String) -> Self;
    fn from_duplicate(message: String) -> Self;
}

macro_rules! impl_repository_error {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl RepositoryError for $ty {
                fn from_connection(message: String) -> Self {
                    Self::connection(message)
                }

                fn from_query(message: String) -> Self {
                    Self::query(message)
                }

                fn from_duplicate(message: String) -> Self {
                    Self::duplicate(message)
                }
            }
        )+
    };
}

impl_repository_error!(UserPersistenceError, ProductPersistenceError, OrderPersistenceError);

/// Map pool checkout and build failures to a connection error.
pub(crate) fn map_pool_error<E: RepositoryError>(error: PoolError) -> E {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            E::from_connection(message)
        }
    }
}

/// Map a Diesel error, logging the raw cause at debug.
///
/// Unique violations become duplicates so the service can answer with a
/// conflict. Driver messages are not forwarded; only the constraint name is.
pub(crate) fn map_diesel_error<E: RepositoryError>(error: DieselError) -> E {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            let constraint = info.constraint_name().unwrap_or("primary key");
            E::from_duplicate(format!("unique constraint {constraint}"))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            E::from_connection("database connection error".to_owned())
        }
        DieselError::QueryBuilderError(_) => E::from_query("database query error".to_owned()),
        _ => E::from_query("database error".to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn database_error(kind: DatabaseErrorKind) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(String::from("driver detail")))
    }

    #[rstest]
    fn unique_violation_maps_to_duplicate() {
        let err: UserPersistenceError =
            map_diesel_error(database_error(DatabaseErrorKind::UniqueViolation));

        assert!(matches!(err, UserPersistenceError::Duplicate { .. }));
        assert!(!err.to_string().contains("driver detail"));
    }

    #[rstest]
    fn closed_connection_maps_to_connection() {
        let err: ProductPersistenceError =
            map_diesel_error(database_error(DatabaseErrorKind::ClosedConnection));

        assert_eq!(
            err,
            ProductPersistenceError::connection("database connection error")
        );
    }

    #[rstest]
    #[case::not_found(DieselError::NotFound)]
    #[case::serialization(database_error(DatabaseErrorKind::SerializationFailure))]
    fn other_failures_map_to_query(#[case] error: DieselError) {
        let err: OrderPersistenceError = map_diesel_error(error);

        assert_eq!(err, OrderPersistenceError::query("database error"));
    }

    #[rstest]
    fn pool_checkout_maps_to_connection() {
        let err: UserPersistenceError = map_pool_error(PoolError::checkout("timed out"));

        assert_eq!(err, UserPersistenceError::connection("timed out"));
    }
}
