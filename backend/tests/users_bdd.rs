//! Behaviour tests for the user endpoints over the in-memory store.
//!
//! These scenarios drive `/users` through the full actix stack and check the
//! status translation of not-found and conflict outcomes.

#![allow(
    non_snake_case,
    reason = "rstest-bdd generates guard variables with double underscores"
)]

#[path = "support/http_world.rs"]
mod http_world;

use std::sync::Arc;

use actix_web::{test::TestRequest, web};
use http_world::{Exchange, dispatch};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::json;
use virtual_market::domain::UserService;
use virtual_market::inbound::http::state::UsersState;
use virtual_market::inbound::http::users;
use virtual_market::outbound::memory::MemoryUserRepository;

/// Test world holding the user store and the latest response.
#[derive(Default, ScenarioState)]
struct UsersWorld {
    state: Slot<web::Data<UsersState>>,
    last: Slot<Exchange>,
}

impl UsersWorld {
    fn send(&self, request: TestRequest) -> Exchange {
        let state = self.state.get().expect("user store should be set up");
        dispatch(state, users::configure, request)
    }

    fn record(&self, request: TestRequest) {
        let exchange = self.send(request);
        self.last.set(exchange);
    }

    fn last(&self) -> Exchange {
        self.last.get().expect("a request should have been sent")
    }
}

fn user_body(id: Option<i32>, name: &str) -> serde_json::Value {
    let mut body = json!({
        "name": name,
        "email": format!("{name}@example.com"),
        "age": "30",
    });
    if let Some(id) = id {
        body["id"] = json!(id);
    }
    body
}

#[fixture]
fn world() -> UsersWorld {
    UsersWorld::default()
}

// -----------------------------------------------------------------------------
// Given Steps
// -----------------------------------------------------------------------------

#[given("an empty user store")]
fn an_empty_user_store(world: &UsersWorld) {
    let service = UserService::new(Arc::new(MemoryUserRepository::new()));
    world
        .state
        .set(web::Data::new(UsersState::from_service(service)));
}

#[given("a store holding user {id} named {name}")]
fn a_store_holding_user(world: &UsersWorld, id: i32, name: String) {
    an_empty_user_store(world);
    let seeded = world.send(
        TestRequest::post()
            .uri("/users")
            .set_json(user_body(Some(id), &name)),
    );
    assert_eq!(seeded.status, 201, "seeding failed: {}", seeded.body);
}

// -----------------------------------------------------------------------------
// When Steps
// -----------------------------------------------------------------------------

#[when("a user named {name} is created")]
fn a_user_is_created(world: &UsersWorld, name: String) {
    world.record(
        TestRequest::post()
            .uri("/users")
            .set_json(user_body(None, &name)),
    );
}

#[when("a user with id {id} named {name} is created")]
fn a_user_with_id_is_created(world: &UsersWorld, id: i32, name: String) {
    world.record(
        TestRequest::post()
            .uri("/users")
            .set_json(user_body(Some(id), &name)),
    );
}

#[when("the users are listed")]
fn the_users_are_listed(world: &UsersWorld) {
    world.record(TestRequest::get().uri("/users"));
}

#[when("user {id} is renamed to {name}")]
fn user_is_renamed(world: &UsersWorld, id: i32, name: String) {
    world.record(
        TestRequest::put()
            .uri(&format!("/users/{id}"))
            .set_json(user_body(None, &name)),
    );
}

#[when("user {id} is deleted")]
fn user_is_deleted(world: &UsersWorld, id: i32) {
    world.record(TestRequest::delete().uri(&format!("/users/{id}")));
}

#[when("user {id} is deleted again")]
fn user_is_deleted_again(world: &UsersWorld, id: i32) {
    let first = world.last();
    assert_eq!(first.status, 204, "first delete should succeed");
    user_is_deleted(world, id);
}

// -----------------------------------------------------------------------------
// Then Steps
// -----------------------------------------------------------------------------

#[then("the response status is {status}")]
fn the_response_status_is(world: &UsersWorld, status: u16) {
    let last = world.last();
    assert_eq!(last.status, status, "unexpected body: {}", last.body);
}

#[then("the error code is {code}")]
fn the_error_code_is(world: &UsersWorld, code: String) {
    let last = world.last();
    assert_eq!(last.body["code"], code.as_str());
    assert!(last.body["traceId"].is_string(), "errors carry a trace id");
}

#[then("fetching user {id} returns the name {name}")]
fn fetching_user_returns_name(world: &UsersWorld, id: i32, name: String) {
    let fetched = world.send(TestRequest::get().uri(&format!("/users/{id}")));
    assert_eq!(fetched.status, 200);
    assert_eq!(fetched.body["id"], id);
    assert_eq!(fetched.body["name"], name.as_str());
}

#[then("the listing holds {count} users")]
fn the_listing_holds(world: &UsersWorld, count: usize) {
    let last = world.last();
    let users = last.body.as_array().expect("listing is an array");
    assert_eq!(users.len(), count);
}

// -----------------------------------------------------------------------------
// Scenario Bindings
// -----------------------------------------------------------------------------

#[scenario(
    path = "tests/features/users.feature",
    name = "A created user can be fetched"
)]
fn a_created_user_can_be_fetched(world: UsersWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/users.feature", name = "Listing an empty store")]
fn listing_an_empty_store(world: UsersWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/users.feature", name = "Deleting an absent user")]
fn deleting_an_absent_user(world: UsersWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/users.feature", name = "Updating a stored user")]
fn updating_a_stored_user(world: UsersWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/users.feature", name = "Updating an absent user")]
fn updating_an_absent_user(world: UsersWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/users.feature",
    name = "Creating a user with a taken id"
)]
fn creating_a_user_with_a_taken_id(world: UsersWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/users.feature",
    name = "A second delete reports not found"
)]
fn a_second_delete_reports_not_found(world: UsersWorld) {
    let _ = world;
}
