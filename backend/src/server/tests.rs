//! Tests for server wiring.

use super::*;
use actix_web::http::StatusCode;
use actix_web::test;
use rstest::rstest;
use virtual_market::settings::ServiceKind;

fn deps(service: ServiceKind) -> AppDependencies {
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    AppDependencies {
        health_state,
        resource: build_resource_state(service, None),
    }
}

#[rstest]
#[case::users(ServiceKind::User, "/users", "/products")]
#[case::products(ServiceKind::Product, "/products", "/orders")]
#[case::orders(ServiceKind::Order, "/orders", "/users")]
#[actix_web::test]
async fn only_the_selected_resource_is_routed(
    #[case] service: ServiceKind,
    #[case] served: &str,
    #[case] absent: &str,
) {
    let app = test::init_service(build_app(deps(service))).await;

    let res = test::call_service(&app, test::TestRequest::get().uri(served).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("trace-id"));

    let res = test::call_service(&app, test::TestRequest::get().uri(absent).to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn health_checks_are_always_mounted() {
    let app = test::init_service(build_app(deps(ServiceKind::Order))).await;

    for uri in ["/health/ready", "/health/live"] {
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(res.status(), StatusCode::OK, "{uri}");
    }
}

#[rstest]
#[actix_web::test]
async fn malformed_bodies_use_the_shared_error_shape() {
    let app = test::init_service(build_app(deps(ServiceKind::User))).await;

    let req = test::TestRequest::post()
        .uri("/users")
        .insert_header(("content-type", "application/json"))
        .set_payload("{")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert!(body["traceId"].is_string());
}

#[rstest]
#[actix_web::test]
async fn path_errors_carry_the_header_trace_id() {
    let app = test::init_service(build_app(deps(ServiceKind::User))).await;

    let req = test::TestRequest::get().uri("/users/abc").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let header = res
        .headers()
        .get("trace-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace-id header");
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["traceId"], header.as_str());
}

#[rstest]
#[actix_web::test]
async fn readiness_flips_once_the_socket_is_bound() {
    let health_state = web::Data::new(HealthState::new());
    assert!(!health_state.is_ready());
    let config = ServerConfig::new(ServiceKind::User, ([127, 0, 0, 1], 0).into());

    let server = create_server(health_state.clone(), config).expect("bind ephemeral port");

    assert!(health_state.is_ready());
    server.handle().stop(false).await;
}
