use axum::{extract::State, routing::get, Json, Router};
use tracing::warn;

use crate::{error::ApiError, AppState};

pub fn routes(_state: AppState) -> Router<AppState> {
    Router::new().route("/api/v1/servers", get(get_servers))
}

async fn get_servers(
    State(state): State<AppState>,
) -> Result<Json<Vec<plan_types::ServerSummary>>, ApiError> {
    match state.store.servers().await {
        Ok(servers) => Ok(Json(servers)),
        Err(e) => {
            warn!("failed to list servers: {e}");
            Err(e.into())
        }
    }
}
