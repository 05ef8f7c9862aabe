//! HTTP server configuration object.

use std::net::SocketAddr;

use virtual_market::outbound::persistence::DbPool;
use virtual_market::settings::ServiceKind;

/// Everything `create_server` needs beyond the health state.
///
/// Without a pool the selected service runs over the memory store.
pub struct ServerConfig {
    pub(crate) service: ServiceKind,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Serve `service` on `bind_addr` over the memory store.
    #[must_use]
    pub const fn new(service: ServiceKind, bind_addr: SocketAddr) -> Self {
        Self {
            service,
            bind_addr,
            db_pool: None,
        }
    }

    /// Persist through `pool` instead of memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
