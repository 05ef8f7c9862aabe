//! Acknowledgement body returned by create and update endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{"message": "User created", "id": 1}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Outcome, such as `User created`.
    #[schema(example = "User created")]
    pub message: String,
    /// Id of the record the message refers to.
    #[schema(example = 1)]
    pub id: i32,
}

impl MessageResponse {
    /// Acknowledge `message` for the record `id`.
    #[must_use]
    pub fn new(message: impl Into<String>, id: i32) -> Self {
        Self {
            message: message.into(),
            id,
        }
    }
}
