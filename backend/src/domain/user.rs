//! User entity and its response projection.

use serde::{Deserialize, Serialize};

use super::record_id::define_record_id;

define_record_id! {
    /// Identifier of a persisted user.
    UserId
}

/// The mutable part of a user: everything except the id.
///
/// `age` is free text; nothing in the service parses or validates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    /// Display name.
    pub name: String,
    /// Contact address, stored verbatim.
    pub email: String,
    /// Age as the client sent it.
    pub age: String,
}

/// A user about to be created.
///
/// When `id` is `None` the store assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Caller-chosen id, if any.
    pub id: Option<UserId>,
    /// Values to store.
    pub fields: UserFields,
}

impl NewUser {
    /// A user whose id will be assigned by the store.
    #[must_use]
    pub const fn new(fields: UserFields) -> Self {
        Self { id: None, fields }
    }

    /// A user created under a caller-chosen id.
    #[must_use]
    pub const fn with_id(id: UserId, fields: UserFields) -> Self {
        Self {
            id: Some(id),
            fields,
        }
    }
}

/// Persisted user row as seen by the domain.
///
/// ## Invariants
/// - `id` never changes once assigned; [`UserRecord::apply`] only touches
///   the mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    id: UserId,
    name: String,
    email: String,
    age: String,
}

impl UserRecord {
    /// Build a record from its id and field values.
    #[must_use]
    pub fn new(id: UserId, fields: UserFields) -> Self {
        let UserFields { name, email, age } = fields;
        Self {
            id,
            name,
            email,
            age,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Age as free text.
    #[must_use]
    pub fn age(&self) -> &str {
        &self.age
    }

    /// Replace name, email, and age in one step.
    pub fn apply(&mut self, fields: UserFields) {
        let UserFields { name, email, age } = fields;
        self.name = name;
        self.email = email;
        self.age = age;
    }
}

/// Outward-facing representation of a user.
///
/// # Examples
/// ```
/// use virtual_market::domain::UserResponse;
///
/// let response = UserResponse {
///     id: 1,
///     name: "john".into(),
///     email: "j@x.com".into(),
///     age: "20".into(),
/// };
/// let json = serde_json::to_value(&response).expect("serialise");
/// assert_eq!(json["age"], "20");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Store-assigned identifier.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Age as free text.
    pub age: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn fields() -> UserFields {
        UserFields {
            name: "john".into(),
            email: "j@x.com".into(),
            age: "20".into(),
        }
    }

    #[rstest]
    fn apply_replaces_mutable_fields_and_keeps_id(fields: UserFields) {
        let mut record = UserRecord::new(UserId::new(2), fields);

        record.apply(UserFields {
            name: "jane".into(),
            email: "jn@x.com".into(),
            age: "25".into(),
        });

        assert_eq!(record.id(), UserId::new(2));
        assert_eq!(record.name(), "jane");
        assert_eq!(record.email(), "jn@x.com");
        assert_eq!(record.age(), "25");
    }

    #[rstest]
    fn new_user_without_id_defers_to_store(fields: UserFields) {
        assert!(NewUser::new(fields.clone()).id.is_none());
        assert_eq!(NewUser::with_id(UserId::new(9), fields).id, Some(UserId::new(9)));
    }
}
