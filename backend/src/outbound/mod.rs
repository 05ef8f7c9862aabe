//! Outbound adapters implementing the domain repository ports.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM.
//! - **memory**: mutex-guarded in-process repositories for runs without a
//!   database and for behaviour tests.
//!
//! Adapters translate between domain records and storage representations.
//! They contain no business logic.

pub mod memory;
pub mod persistence;
