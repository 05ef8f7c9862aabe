//! User domain service.
//!
//! Implements the user driving ports over a [`UserRepository`]. This is the
//! only place where store failures become API error kinds: absent rows turn
//! into `NotFound`, id collisions into `Conflict`, and everything else into
//! `Internal`, with the raw cause logged and kept out of the response.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{
    DomainError, NewUser, RecordMapper, UserFields, UserId, UserMapper, UserResponse,
};

const NOT_FOUND: &str = "User not found";
const ALREADY_EXISTS: &str = "User already exists";

/// User service implementing [`UsersQuery`] and [`UsersCommand`].
#[derive(Clone)]
pub struct UserService<R> {
    repository: Arc<R>,
    mapper: UserMapper,
}

impl<R> UserService<R> {
    /// Create a new service over the given repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            mapper: UserMapper,
        }
    }
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    fn map_persistence_error(err: UserPersistenceError) -> DomainError {
        match err {
            UserPersistenceError::Duplicate { message } => {
                debug!(%message, "user insert rejected as duplicate");
                DomainError::conflict(ALREADY_EXISTS)
            }
            UserPersistenceError::Connection { message } => {
                error!(%message, "user repository unavailable");
                DomainError::internal(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                error!(%message, "user repository error");
                DomainError::internal(format!("user repository error: {message}"))
            }
        }
    }

    async fn ensure_exists(&self, id: UserId) -> Result<(), DomainError> {
        let exists = self
            .repository
            .exists_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?;
        if exists {
            Ok(())
        } else {
            Err(DomainError::not_found(NOT_FOUND))
        }
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn get_user(&self, id: UserId) -> Result<UserResponse, DomainError> {
        let record = self
            .repository
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| DomainError::not_found(NOT_FOUND))?;
        Ok(self.mapper.map(&record))
    }

    async fn list_users(&self) -> Result<Vec<UserResponse>, DomainError> {
        let records = self
            .repository
            .find_all()
            .await
            .map_err(Self::map_persistence_error)?;
        Ok(self.mapper.map_all(&records))
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, user: NewUser) -> Result<UserResponse, DomainError> {
        if let Some(id) = user.id {
            let taken = self
                .repository
                .exists_by_id(id)
                .await
                .map_err(Self::map_persistence_error)?;
            if taken {
                return Err(DomainError::conflict(ALREADY_EXISTS));
            }
        }

        let record = self
            .repository
            .insert(&user)
            .await
            .map_err(Self::map_persistence_error)?;
        Ok(self.mapper.map(&record))
    }

    async fn update_user(
        &self,
        id: UserId,
        fields: UserFields,
    ) -> Result<UserResponse, DomainError> {
        let mut record = self
            .repository
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| DomainError::not_found(NOT_FOUND))?;

        record.apply(fields);

        let updated = self
            .repository
            .update(&record)
            .await
            .map_err(Self::map_persistence_error)?;
        if !updated {
            // Deleted between the lookup and the write.
            return Err(DomainError::not_found(NOT_FOUND));
        }
        Ok(self.mapper.map(&record))
    }

    async fn delete_user(&self, id: UserId) -> Result<(), DomainError> {
        self.ensure_exists(id).await?;

        let deleted = self
            .repository
            .delete_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?;
        if deleted {
            Ok(())
        } else {
            Err(DomainError::not_found(NOT_FOUND))
        }
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
