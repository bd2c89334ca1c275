use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use plan_types::{PlayersOnlineGraph, ServerIdentifier};
use serde::Deserialize;
use tracing::warn;

use crate::{error::ApiError, AppState};

const PLAYERS_ONLINE: &str = "playersOnline";

#[derive(Deserialize)]
pub struct GraphQuery {
    #[serde(rename = "type")]
    pub graph_type: String,
    pub server: String,
}

pub fn routes(_state: AppState) -> Router<AppState> {
    Router::new().route("/api/v1/graph", get(get_graph))
}

async fn get_graph(
    State(state): State<AppState>,
    query: Result<Query<GraphQuery>, QueryRejection>,
) -> Result<Json<PlayersOnlineGraph>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    if query.graph_type != PLAYERS_ONLINE {
        return Err(ApiError::bad_request(format!(
            "unsupported graph type: {}",
            query.graph_type
        )));
    }

    let identifier = ServerIdentifier::from(query.server);
    match state.store.players_online_graph(&identifier).await {
        Ok(graph) => Ok(Json(graph)),
        Err(e) => {
            warn!("players online graph for {identifier} failed: {e}");
            Err(e.into())
        }
    }
}
