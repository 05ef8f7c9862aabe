//! Shared HTTP adapter state.
//!
//! Handlers receive these bundles through `web::Data` and only see the
//! driving ports, so tests can swap in mocks or memory-backed services.
//! A process registers the bundle for the one resource it serves.

use std::sync::Arc;

use crate::domain::ports::{
    OrdersCommand, OrdersQuery, ProductsCommand, ProductsQuery, UsersCommand, UsersQuery,
};

/// Ports behind the `/users` endpoints.
#[derive(Clone)]
pub struct UsersState {
    /// Read-side port.
    pub query: Arc<dyn UsersQuery>,
    /// Write-side port.
    pub command: Arc<dyn UsersCommand>,
}

impl UsersState {
    /// Bundle separately supplied ports.
    #[must_use]
    pub const fn new(query: Arc<dyn UsersQuery>, command: Arc<dyn UsersCommand>) -> Self {
        Self { query, command }
    }

    /// Build from one service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use virtual_market::domain::UserService;
    /// use virtual_market::inbound::http::state::UsersState;
    /// use virtual_market::outbound::memory::MemoryUserRepository;
    ///
    /// let service = UserService::new(Arc::new(MemoryUserRepository::new()));
    /// let _state = UsersState::from_service(service);
    /// ```
    pub fn from_service<S>(service: S) -> Self
    where
        S: UsersQuery + UsersCommand + 'static,
    {
        let shared = Arc::new(service);
        Self {
            query: shared.clone(),
            command: shared,
        }
    }
}

/// Ports behind the `/products` endpoints.
#[derive(Clone)]
pub struct ProductsState {
    /// Read-side port.
    pub query: Arc<dyn ProductsQuery>,
    /// Write-side port.
    pub command: Arc<dyn ProductsCommand>,
}

impl ProductsState {
    /// Build from one service implementing both ports.
    pub fn from_service<S>(service: S) -> Self
    where
        S: ProductsQuery + ProductsCommand + 'static,
    {
        let shared = Arc::new(service);
        Self {
            query: shared.clone(),
            command: shared,
        }
    }
}

/// Ports behind the `/orders` endpoints.
#[derive(Clone)]
pub struct OrdersState {
    /// Read-side port.
    pub query: Arc<dyn OrdersQuery>,
    /// Write-side port.
    pub command: Arc<dyn OrdersCommand>,
}

impl OrdersState {
    /// Build from one service implementing both ports.
    pub fn from_service<S>(service: S) -> Self
    where
        S: OrdersQuery + OrdersCommand + 'static,
    {
        let shared = Arc::new(service);
        Self {
            query: shared.clone(),
            command: shared,
        }
    }
}
