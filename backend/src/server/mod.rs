//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::{ResourceState, build_resource_state};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use virtual_market::Trace;
#[cfg(debug_assertions)]
use virtual_market::doc::ApiDoc;
use virtual_market::inbound::http::health::{HealthState, live, ready};
use virtual_market::inbound::http::payload::{json_config, path_config};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    resource: ResourceState,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        resource,
    } = deps;

    App::new()
        .app_data(health_state)
        .app_data(json_config())
        .app_data(path_config())
        .wrap(Trace)
        .configure(|cfg| resource.configure(cfg))
        .service(ready)
        .service(live)
        .configure(mount_docs)
}

/// Swagger UI and the OpenAPI document, served in debug builds only.
#[cfg(debug_assertions)]
fn mount_docs(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

#[cfg(not(debug_assertions))]
const fn mount_docs(_cfg: &mut web::ServiceConfig) {}

/// Construct an Actix HTTP server for the configured service.
///
/// Readiness flips once the socket is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        service,
        bind_addr,
        db_pool,
    } = config;
    let resource = build_resource_state(service, db_pool.as_ref());
    let store = if db_pool.is_some() { "postgres" } else { "memory" };

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            resource: resource.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    info!(%service, %bind_addr, store, "server listening");
    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests;
