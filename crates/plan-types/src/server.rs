use std::fmt;

use serde::{Deserialize, Serialize};

/// Longest identifier accepted as a sample store key.
pub const MAX_IDENTIFIER_LEN: usize = 64;

/// Opaque name of a monitored server, taken from the `/server/:identifier` route.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ServerIdentifier(pub String);

impl ServerIdentifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier can name a file in the sample store.
    ///
    /// Only ASCII alphanumerics, `-` and `_` are allowed, which keeps path
    /// separators and `..` out of lookups.
    pub fn is_store_key(&self) -> bool {
        !self.0.is_empty()
            && self.0.len() <= MAX_IDENTIFIER_LEN
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }
}

impl fmt::Display for ServerIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ServerIdentifier {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ServerIdentifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ServerSummary {
    pub identifier: ServerIdentifier,
    pub name: String,
    pub sample_count: usize,
    pub last_seen_ms: Option<i64>,
}
