#![allow(non_snake_case)]

pub mod error;
pub mod routes;

use axum::Router;
use plan_providers::SampleStore;

#[derive(Clone)]
pub struct AppState {
    pub store: SampleStore,
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes(state.clone()))
        .with_state(state)
}
