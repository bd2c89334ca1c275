use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use plan_types::{ServerIdentifier, TablePlayer, DEFAULT_PLAYER_LIMIT};
use serde::Deserialize;
use tracing::warn;

use crate::{error::ApiError, AppState};

#[derive(Deserialize)]
pub struct PlayersQuery {
    pub server: String,
    pub limit: Option<usize>,
}

pub fn routes(_state: AppState) -> Router<AppState> {
    Router::new().route("/api/v1/players", get(get_players))
}

async fn get_players(
    State(state): State<AppState>,
    query: Result<Query<PlayersQuery>, QueryRejection>,
) -> Result<Json<Vec<TablePlayer>>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let identifier = ServerIdentifier::from(query.server);
    let limit = query.limit.unwrap_or(DEFAULT_PLAYER_LIMIT);
    match state.store.server_players(&identifier, limit).await {
        Ok(players) => Ok(Json(players)),
        Err(e) => {
            warn!("players table for {identifier} failed: {e}");
            Err(e.into())
        }
    }
}
