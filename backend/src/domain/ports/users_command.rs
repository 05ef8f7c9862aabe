//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{DomainError, NewUser, UserFields, UserId, UserResponse};

/// Write-side use cases for users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Persist a new user; fails with `Conflict` when its id is taken.
    async fn create_user(&self, user: NewUser) -> Result<UserResponse, DomainError>;

    /// Replace name, email, and age; fails with `NotFound` for unknown ids.
    async fn update_user(
        &self,
        id: UserId,
        fields: UserFields,
    ) -> Result<UserResponse, DomainError>;

    /// Remove a user; fails with `NotFound` for unknown ids, including a
    /// repeated delete.
    async fn delete_user(&self, id: UserId) -> Result<(), DomainError>;
}
