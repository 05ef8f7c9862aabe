//! Driving port for user reads.
//!
//! HTTP handlers call this port without knowing which store sits behind it.

use async_trait::async_trait;

use crate::domain::{DomainError, UserId, UserResponse};

/// Read-side use cases for users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Fetch one user; fails with `NotFound` when the id is unknown.
    async fn get_user(&self, id: UserId) -> Result<UserResponse, DomainError>;

    /// Every user in store order. An empty store is not an error.
    async fn list_users(&self) -> Result<Vec<UserResponse>, DomainError>;
}
