//! Virtual Market backend: user, product, and order CRUD services.
//!
//! The crate is laid out hexagonally: [`domain`] holds records, services,
//! and ports; [`inbound`] adapts HTTP onto the driving ports; [`outbound`]
//! implements the repository ports over PostgreSQL or memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
