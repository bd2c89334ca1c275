use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("invalid server identifier: {0:?}")]
    InvalidIdentifier(String),
    #[error("unknown server: {0}")]
    UnknownServer(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}
