//! Server functions backing the dashboard cards, plus client-side wrappers
//! that turn transport failures into [`LoadingError`]s.

use leptos::prelude::*;
use plan_types::{LoadingError, PlayersOnlineGraph, ServerSummary, TablePlayer};

#[cfg(feature = "ssr")]
fn sample_store() -> Result<plan_providers::SampleStore, ServerFnError> {
    use_context::<plan_providers::SampleStore>()
        .ok_or_else(|| ServerFnError::new("sample store unavailable"))
}

#[server]
pub async fn get_players_online_graph(
    identifier: String,
) -> Result<PlayersOnlineGraph, ServerFnError> {
    use plan_types::ServerIdentifier;

    let identifier = ServerIdentifier::from(identifier);
    sample_store()?
        .players_online_graph(&identifier)
        .await
        .map_err(|e| {
            tracing::warn!("players online graph for {identifier} failed: {e}");
            ServerFnError::new(e.to_string())
        })
}

#[server]
pub async fn get_servers() -> Result<Vec<ServerSummary>, ServerFnError> {
    sample_store()?.servers().await.map_err(|e| {
        tracing::warn!("failed to list servers: {e}");
        ServerFnError::new(e.to_string())
    })
}

#[server]
pub async fn get_server_players(
    identifier: String,
    limit: usize,
) -> Result<Vec<TablePlayer>, ServerFnError> {
    use plan_types::ServerIdentifier;

    let identifier = ServerIdentifier::from(identifier);
    sample_store()?
        .server_players(&identifier, limit)
        .await
        .map_err(|e| {
            tracing::warn!("players table for {identifier} failed: {e}");
            ServerFnError::new(e.to_string())
        })
}

/// Keeps the server-side message as is; other failures use their display form.
pub fn loading_error(e: ServerFnError) -> LoadingError {
    match e {
        ServerFnError::ServerError(message) => LoadingError::new(message),
        other => LoadingError::new(other.to_string()),
    }
}

pub async fn fetch_players_online_graph(
    identifier: String,
) -> Result<PlayersOnlineGraph, LoadingError> {
    get_players_online_graph(identifier)
        .await
        .map_err(loading_error)
}

pub async fn fetch_server_players(identifier: String) -> Result<Vec<TablePlayer>, LoadingError> {
    get_server_players(identifier, plan_types::DEFAULT_PLAYER_LIMIT)
        .await
        .map_err(loading_error)
}

pub async fn fetch_servers(_: ()) -> Result<Vec<ServerSummary>, LoadingError> {
    get_servers().await.map_err(loading_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_message_is_kept_verbatim() {
        let error = loading_error(ServerFnError::new("unknown server: server-42"));
        assert_eq!(error.message, "unknown server: server-42");
    }

    #[test]
    fn transport_errors_keep_their_description() {
        let error = loading_error(ServerFnError::Request("network timeout".into()));
        assert!(error.message.contains("network timeout"));
    }
}
