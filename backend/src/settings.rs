//! Process configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `MARKET_*` environment variables, and config
//! files, in OrthoConfig's usual precedence. Everything is optional; getters
//! apply defaults and validate.

use std::net::SocketAddr;
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Configuration errors surfaced at start-up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `service` named no known resource.
    #[error("unknown service `{value}`; expected one of user, product, order")]
    UnknownService {
        /// The rejected value.
        value: String,
    },
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address `{value}`: {message}")]
    InvalidBindAddr {
        /// The rejected value.
        value: String,
        /// Parser diagnostic.
        message: String,
    },
    /// A pool needs at least one connection.
    #[error("db_max_connections must be at least 1")]
    ZeroConnections,
}

/// Which resource this process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceKind {
    /// `/users`.
    #[default]
    User,
    /// `/products`.
    Product,
    /// `/orders`.
    Order,
}

impl ServiceKind {
    /// Lower-case name used in configuration and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Product => "product",
            Self::Order => "order",
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = SettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" | "users" => Ok(Self::User),
            "product" | "products" => Ok(Self::Product),
            "order" | "orders" => Ok(Self::Order),
            _ => Err(SettingsError::UnknownService {
                value: value.to_owned(),
            }),
        }
    }
}

/// Settings for one service process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MARKET")]
pub struct AppSettings {
    /// Resource to serve: `user`, `product`, or `order`.
    pub service: Option<String>,
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Without one the process keeps data in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl AppSettings {
    /// The selected resource, `user` when unset.
    ///
    /// # Errors
    /// Returns [`SettingsError::UnknownService`] for unrecognised names.
    pub fn service(&self) -> Result<ServiceKind, SettingsError> {
        self.service
            .as_deref()
            .map_or(Ok(ServiceKind::default()), ServiceKind::from_str)
    }

    /// The listening address, `0.0.0.0:8080` when unset.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidBindAddr`] when parsing fails.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                message: err.to_string(),
            })
    }

    /// The configured database URL, treating a blank value as absent.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size, 10 when unset.
    ///
    /// # Errors
    /// Returns [`SettingsError::ZeroConnections`] for zero.
    pub fn db_max_connections(&self) -> Result<u32, SettingsError> {
        match self.db_max_connections.unwrap_or(DEFAULT_DB_MAX_CONNECTIONS) {
            0 => Err(SettingsError::ZeroConnections),
            n => Ok(n),
        }
    }
}
