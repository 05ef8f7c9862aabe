//! Service entry point: loads settings, prepares the store, and serves the
//! selected resource over HTTP.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use virtual_market::inbound::http::health::HealthState;
use virtual_market::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use virtual_market::settings::AppSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let service = settings.service().map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(service, bind_addr);
    match settings.database_url() {
        Some(url) => {
            let max_connections = settings
                .db_max_connections()
                .map_err(std::io::Error::other)?;
            let pool = prepare_database(url, max_connections).await?;
            config = config.with_db_pool(pool);
        }
        None => warn!(%service, "no database URL configured; records are kept in memory"),
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome
}

async fn prepare_database(url: &str, max_connections: u32) -> std::io::Result<DbPool> {
    let migration_url = url.to_owned();
    let applied = web::block(move || run_migrations(&migration_url))
        .await
        .map_err(|e| std::io::Error::other(format!("migration task failed: {e}")))?
        .map_err(std::io::Error::other)?;
    info!(applied, "database schema up to date");

    DbPool::new(PoolConfig::new(url).with_max_size(max_connections))
        .await
        .map_err(std::io::Error::other)
}
