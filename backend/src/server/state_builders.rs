//! Builders wiring the selected service onto its repository.

use std::sync::Arc;

use actix_web::web;

use virtual_market::domain::{OrderService, ProductService, UserService};
use virtual_market::inbound::http::state::{OrdersState, ProductsState, UsersState};
use virtual_market::outbound::memory::{
    MemoryOrderRepository, MemoryProductRepository, MemoryUserRepository,
};
use virtual_market::outbound::persistence::{
    DbPool, DieselOrderRepository, DieselProductRepository, DieselUserRepository,
};
use virtual_market::settings::ServiceKind;

/// Handler state for the one resource a process serves.
#[derive(Clone)]
pub(crate) enum ResourceState {
    Users(web::Data<UsersState>),
    Products(web::Data<ProductsState>),
    Orders(web::Data<OrdersState>),
}

impl ResourceState {
    /// Register the state and the matching endpoints.
    pub(crate) fn configure(self, cfg: &mut web::ServiceConfig) {
        use virtual_market::inbound::http::{orders, products, users};

        match self {
            Self::Users(state) => {
                cfg.app_data(state).configure(users::configure);
            }
            Self::Products(state) => {
                cfg.app_data(state).configure(products::configure);
            }
            Self::Orders(state) => {
                cfg.app_data(state).configure(orders::configure);
            }
        }
    }
}

/// Build the selected service over Diesel when a pool is available,
/// otherwise over the memory store.
pub(crate) fn build_resource_state(service: ServiceKind, pool: Option<&DbPool>) -> ResourceState {
    match (service, pool) {
        (ServiceKind::User, Some(pool)) => ResourceState::Users(web::Data::new(
            UsersState::from_service(UserService::new(Arc::new(DieselUserRepository::new(
                pool.clone(),
            )))),
        )),
        (ServiceKind::User, None) => ResourceState::Users(web::Data::new(
            UsersState::from_service(UserService::new(Arc::new(MemoryUserRepository::new()))),
        )),
        (ServiceKind::Product, Some(pool)) => ResourceState::Products(web::Data::new(
            ProductsState::from_service(ProductService::new(Arc::new(
                DieselProductRepository::new(pool.clone()),
            ))),
        )),
        (ServiceKind::Product, None) => ResourceState::Products(web::Data::new(
            ProductsState::from_service(ProductService::new(Arc::new(
                MemoryProductRepository::new(),
            ))),
        )),
        (ServiceKind::Order, Some(pool)) => ResourceState::Orders(web::Data::new(
            OrdersState::from_service(OrderService::new(Arc::new(DieselOrderRepository::new(
                pool.clone(),
            )))),
        )),
        (ServiceKind::Order, None) => ResourceState::Orders(web::Data::new(
            OrdersState::from_service(OrderService::new(Arc::new(MemoryOrderRepository::new()))),
        )),
    }
}
