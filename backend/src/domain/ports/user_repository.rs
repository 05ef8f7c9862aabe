//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewUser, UserId, UserRecord};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The store rejected an insert because the id is taken.
        Duplicate { message: String } => "user repository rejected duplicate: {message}",
    }
}

/// Entity store for [`UserRecord`] values keyed by [`UserId`].
///
/// Implementations own record lifetime and provide their own isolation;
/// callers never lock around these calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, UserPersistenceError>;

    /// Report whether a row with this identifier exists.
    async fn exists_by_id(&self, id: UserId) -> Result<bool, UserPersistenceError>;

    /// Every stored user, ordered by id.
    async fn find_all(&self) -> Result<Vec<UserRecord>, UserPersistenceError>;

    /// Insert a new row and return it with its assigned id.
    ///
    /// Returns [`UserPersistenceError::Duplicate`] when an explicit id is
    /// already taken.
    async fn insert(&self, user: &NewUser) -> Result<UserRecord, UserPersistenceError>;

    /// Overwrite name, email, and age of the row with `user.id()`.
    ///
    /// Returns `false` when no such row exists.
    async fn update(&self, user: &UserRecord) -> Result<bool, UserPersistenceError>;

    /// Remove a row. Returns `false` when nothing was deleted.
    async fn delete_by_id(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}
