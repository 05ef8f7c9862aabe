//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod message;
pub mod orders;
pub mod payload;
pub mod products;
pub mod schemas;
pub mod state;
pub mod users;

pub use error::ApiResult;
