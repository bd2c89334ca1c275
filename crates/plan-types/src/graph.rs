use std::fmt;

use serde::{Deserialize, Serialize};

/// Series color used when the configuration does not name one.
pub const DEFAULT_GRAPH_COLOR: &str = "#368F17";

/// One sample of the players online series.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OnlinePoint {
    /// Epoch milliseconds.
    pub t: i64,
    /// Players online at `t`.
    pub v: u32,
}

impl OnlinePoint {
    pub fn new(t: i64, v: u32) -> Self {
        Self { t, v }
    }
}

/// Payload of the players online graph for one server.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayersOnlineGraph {
    pub points: Vec<OnlinePoint>,
    pub color: String,
}

impl PlayersOnlineGraph {
    pub fn new(points: Vec<OnlinePoint>) -> Self {
        Self {
            points,
            color: DEFAULT_GRAPH_COLOR.into(),
        }
    }

    pub fn peak(&self) -> Option<OnlinePoint> {
        self.points.iter().copied().max_by_key(|p| p.v)
    }

    pub fn latest(&self) -> Option<OnlinePoint> {
        self.points.iter().copied().max_by_key(|p| p.t)
    }
}

impl Default for PlayersOnlineGraph {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Failure surfaced by a data request, shown verbatim by the error view.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadingError {
    pub message: String,
}

impl LoadingError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for LoadingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_use_short_field_names() {
        let graph = PlayersOnlineGraph::new(vec![OnlinePoint::new(0, 5), OnlinePoint::new(1, 7)]);
        let value = serde_json::to_value(&graph).unwrap();
        assert_eq!(
            value["points"],
            serde_json::json!([{ "t": 0, "v": 5 }, { "t": 1, "v": 7 }])
        );
        assert_eq!(value["color"], DEFAULT_GRAPH_COLOR);
    }

    #[test]
    fn peak_and_latest() {
        let graph = PlayersOnlineGraph::new(vec![
            OnlinePoint::new(10, 3),
            OnlinePoint::new(20, 9),
            OnlinePoint::new(30, 4),
        ]);
        assert_eq!(graph.peak(), Some(OnlinePoint::new(20, 9)));
        assert_eq!(graph.latest(), Some(OnlinePoint::new(30, 4)));
        assert_eq!(PlayersOnlineGraph::default().peak(), None);
    }

    #[test]
    fn loading_error_displays_message_only() {
        assert_eq!(LoadingError::new("network timeout").to_string(), "network timeout");
    }
}
