pub mod graph;
pub mod players;
pub mod servers;

use axum::Router;

use crate::AppState;

pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(graph::routes(state.clone()))
        .merge(players::routes(state.clone()))
        .merge(servers::routes(state))
}
