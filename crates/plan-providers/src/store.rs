use std::path::{Path, PathBuf};

use plan_types::{
    OnlinePoint, PlayersOnlineGraph, ServerIdentifier, ServerSummary, TablePlayer,
    DEFAULT_GRAPH_COLOR,
};
use serde::Deserialize;
use tokio::fs;
use tracing::{debug, warn};

use crate::error::ProviderError;

/// On-disk layout of `<data_dir>/<identifier>.json`.
#[derive(Deserialize)]
struct ServerFile {
    #[serde(default)]
    name: Option<String>,
    /// `[epoch_ms, players_online]` pairs, in any order.
    samples: Vec<(i64, u32)>,
    #[serde(default)]
    players: Vec<PlayerRecord>,
}

#[derive(Deserialize)]
struct PlayerRecord {
    uuid: String,
    name: String,
    registered: i64,
    #[serde(default)]
    banned: bool,
    #[serde(default)]
    geolocation: Option<String>,
    #[serde(default)]
    sessions: Vec<SessionRecord>,
}

/// Epoch millisecond bounds of one session on this server.
#[derive(Deserialize)]
struct SessionRecord {
    start: i64,
    end: i64,
    #[serde(default)]
    afk: i64,
}

impl SessionRecord {
    fn active_ms(&self) -> i64 {
        self.end
            .saturating_sub(self.start)
            .saturating_sub(self.afk)
            .max(0)
    }
}

const WEEK_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Weekly active playtime that counts as "regular" in the activity index.
pub const DEFAULT_ACTIVITY_THRESHOLD_MS: i64 = 30 * 60 * 1000;

/// Read-only lookup of player count samples, one JSON file per server.
#[derive(Clone, Debug)]
pub struct SampleStore {
    data_dir: PathBuf,
    graph_color: String,
    activity_threshold_ms: i64,
}

impl SampleStore {
    pub fn new(dataDir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: dataDir.into(),
            graph_color: DEFAULT_GRAPH_COLOR.into(),
            activity_threshold_ms: DEFAULT_ACTIVITY_THRESHOLD_MS,
        }
    }

    pub fn with_graph_color(mut self, color: impl Into<String>) -> Self {
        self.graph_color = color.into();
        self
    }

    pub fn with_activity_threshold(mut self, thresholdMs: i64) -> Self {
        self.activity_threshold_ms = thresholdMs.max(1);
        self
    }

    pub async fn players_online_graph(
        &self,
        identifier: &ServerIdentifier,
    ) -> Result<PlayersOnlineGraph, ProviderError> {
        let file = self.read_server_file(identifier).await?;
        let points = normalize_samples(file.samples);
        debug!("loaded {} players online points for {identifier}", points.len());

        Ok(PlayersOnlineGraph {
            points,
            color: self.graph_color.clone(),
        })
    }

    /// Players of a server, most recently seen first, at most `limit` rows.
    pub async fn server_players(
        &self,
        identifier: &ServerIdentifier,
        limit: usize,
    ) -> Result<Vec<TablePlayer>, ProviderError> {
        self.server_players_at(identifier, limit, now_ms()).await
    }

    /// As [`SampleStore::server_players`], with the activity index computed at `nowMs`.
    pub async fn server_players_at(
        &self,
        identifier: &ServerIdentifier,
        limit: usize,
        nowMs: i64,
    ) -> Result<Vec<TablePlayer>, ProviderError> {
        let file = self.read_server_file(identifier).await?;

        let mut players: Vec<TablePlayer> = file
            .players
            .into_iter()
            .map(|record| self.table_player(record, nowMs))
            .collect();

        // Never-seen players sort last, like NULLs in a descending SQL order.
        players.sort_by(|a, b| {
            b.last_seen_ms
                .cmp(&a.last_seen_ms)
                .then_with(|| a.name.cmp(&b.name))
        });
        players.truncate(limit);
        debug!("loaded {} players for {identifier}", players.len());
        Ok(players)
    }

    fn table_player(&self, record: PlayerRecord, nowMs: i64) -> TablePlayer {
        let sessions: Vec<&SessionRecord> = record
            .sessions
            .iter()
            .filter(|s| s.end >= s.start)
            .collect();

        TablePlayer {
            last_seen_ms: sessions.iter().map(|s| s.end).max(),
            session_count: sessions.len() as u32,
            active_playtime_ms: sessions
                .iter()
                .fold(0i64, |sum, s| sum.saturating_add(s.active_ms())),
            activity_index: activity_index(&sessions, nowMs, self.activity_threshold_ms),
            uuid: record.uuid,
            name: record.name,
            registered_ms: record.registered,
            geolocation: record.geolocation,
            banned: record.banned,
        }
    }

    /// Every server with a readable sample file, sorted by display name.
    pub async fn servers(&self) -> Result<Vec<ServerSummary>, ProviderError> {
        let mut readDir = fs::read_dir(&self.data_dir)
            .await
            .map_err(|e| io_error(&self.data_dir, e))?;

        let mut summaries = Vec::new();
        while let Some(entry) = readDir
            .next_entry()
            .await
            .map_err(|e| io_error(&self.data_dir, e))?
        {
            let entryPath = entry.path();
            if entryPath.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let Some(stem) = entryPath.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let identifier = ServerIdentifier::from(stem);
            if !identifier.is_store_key() {
                warn!("skipping sample file with unusable name: {}", entryPath.display());
                continue;
            }

            match self.read_server_file(&identifier).await {
                Ok(file) => {
                    let points = normalize_samples(file.samples);
                    summaries.push(ServerSummary {
                        name: file.name.unwrap_or_else(|| identifier.to_string()),
                        sample_count: points.len(),
                        last_seen_ms: points.last().map(|p| p.t),
                        identifier,
                    });
                }
                Err(e) => warn!("skipping {}: {e}", entryPath.display()),
            }
        }

        summaries.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.identifier.cmp(&b.identifier))
        });
        Ok(summaries)
    }

    async fn read_server_file(
        &self,
        identifier: &ServerIdentifier,
    ) -> Result<ServerFile, ProviderError> {
        if !identifier.is_store_key() {
            return Err(ProviderError::InvalidIdentifier(identifier.to_string()));
        }

        let path = self.data_dir.join(format!("{identifier}.json"));
        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ProviderError::UnknownServer(identifier.to_string()));
            }
            Err(e) => return Err(io_error(&path, e)),
        };

        serde_json::from_str(&contents).map_err(|e| ProviderError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ProviderError {
    ProviderError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

/// 0.0 to 5.0 from active playtime in each of the three weeks before `nowMs`.
///
/// Three weeks at `thresholdMs` of play score about 3, more play approaches 5.
/// Only sessions that lie entirely inside a week count towards it.
fn activity_index(sessions: &[&SessionRecord], nowMs: i64, thresholdMs: i64) -> f64 {
    let threshold = thresholdMs.max(1) as f64;
    let mut total = 0.0;
    for week in 0..3 {
        let to = nowMs.saturating_sub(WEEK_MS * week);
        let from = to.saturating_sub(WEEK_MS);
        let playtime = sessions
            .iter()
            .filter(|s| s.start >= from && s.end <= to)
            .fold(0i64, |sum, s| sum.saturating_add(s.active_ms())) as f64;
        total += 1.0 / (std::f64::consts::FRAC_PI_2 * (playtime / threshold) + 1.0);
    }
    5.0 - 5.0 * total / 3.0
}

/// Sorts samples by time and keeps the last value seen for a repeated timestamp.
fn normalize_samples(mut samples: Vec<(i64, u32)>) -> Vec<OnlinePoint> {
    samples.sort_by_key(|(t, _)| *t);

    let mut points: Vec<OnlinePoint> = Vec::with_capacity(samples.len());
    for (t, v) in samples {
        match points.last_mut() {
            Some(last) if last.t == t => last.v = v,
            _ => points.push(OnlinePoint::new(t, v)),
        }
    }
    points
}
