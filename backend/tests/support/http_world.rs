//! Shared plumbing for HTTP behaviour scenarios.
//!
//! Every request runs inside its own actix system against a fresh `App`
//! built over long-lived resource state, so records persist across steps.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test, web};
use serde_json::Value;
use virtual_market::Trace;
use virtual_market::inbound::http::payload::{json_config, path_config};

/// Status and decoded body of one response.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub status: u16,
    pub body: Value,
}

/// Build the app around `state` and dispatch a single request.
pub fn dispatch<S, F>(state: web::Data<S>, configure: F, request: test::TestRequest) -> Exchange
where
    S: 'static,
    F: FnOnce(&mut web::ServiceConfig) + 'static,
{
    actix_rt::System::new().block_on(async move {
        let app = test::init_service(app(state).configure(configure)).await;
        let response = test::call_service(&app, request.to_request()).await;
        let status = response.status().as_u16();
        let bytes = test::read_body(response).await;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        Exchange { status, body }
    })
}

fn app<S: 'static>(
    state: web::Data<S>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(json_config())
        .app_data(path_config())
        .wrap(Trace)
}
