//! Score events and leaderboard entries.
//!
//! A [`ScoreEvent`] is the immutable record of a single check run against one image for one
//! team. A [`LeaderboardEntry`] is the event currently chosen to represent a [`ScoreKey`] slot
//! in the materialized scoreboard.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::server::util::time::format_duration;

/// Identifies one leaderboard slot: a single team on a single image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScoreKey {
    pub image_name: String,
    pub team_id: String,
}

impl ScoreKey {
    pub fn new(team_id: impl Into<String>, image_name: impl Into<String>) -> Self {
        Self {
            image_name: image_name.into(),
            team_id: team_id.into(),
        }
    }
}

/// Snapshot of the team identity at the time a check ran.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamSnapshot {
    pub id: String,
    pub alias: String,
    pub email: String,
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub image_count: i32,
    /// Last time the team was seen, as reported by the registry
    #[serde(default)]
    pub time: String,
}

/// Snapshot of the scored image a check ran against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSnapshot {
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub index: u32,
    /// Prior records embedded by some reporting paths, empty for ledger writes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub records: Vec<ScoreEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VulnItem {
    pub text: String,
    pub points: i32,
}

/// Vulnerabilities found by a check run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VulnWrapper {
    pub scored: u32,
    pub total: u32,
    #[serde(default)]
    pub items: Vec<VulnItem>,
}

/// One immutable ledger entry produced by a completed check run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub time: DateTime<Utc>,
    pub team: TeamSnapshot,
    pub image: ImageSnapshot,
    #[serde(default)]
    pub vulns: VulnWrapper,
    pub points: i32,
    #[serde(default)]
    pub penalties: i32,
    /// Time actually spent on the image
    pub playtime: Duration,
    pub playtime_str: String,
    /// Total time since the team started
    pub elapsed_time: Duration,
    pub elapsed_time_str: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

impl ScoreEvent {
    /// Creates an event with zero points, no findings and zero durations.
    ///
    /// Use the `with_*` methods to fill in the check results; they keep the precomputed
    /// duration strings in sync with the durations.
    pub fn new(time: DateTime<Utc>, team: TeamSnapshot, image: ImageSnapshot) -> Self {
        Self {
            time,
            team,
            image,
            vulns: VulnWrapper::default(),
            points: 0,
            penalties: 0,
            playtime: Duration::ZERO,
            playtime_str: format_duration(Duration::ZERO),
            elapsed_time: Duration::ZERO,
            elapsed_time_str: format_duration(Duration::ZERO),
            debug: None,
        }
    }

    pub fn with_points(mut self, points: i32, penalties: i32) -> Self {
        self.points = points;
        self.penalties = penalties;
        self
    }

    pub fn with_vulns(mut self, vulns: VulnWrapper) -> Self {
        self.vulns = vulns;
        self
    }

    /// Sets both durations and re-renders their string forms.
    pub fn with_times(mut self, playtime: Duration, elapsed_time: Duration) -> Self {
        self.playtime = playtime;
        self.playtime_str = format_duration(playtime);
        self.elapsed_time = elapsed_time;
        self.elapsed_time_str = format_duration(elapsed_time);
        self
    }

    pub fn with_debug(mut self, debug: impl Into<String>) -> Self {
        self.debug = Some(debug.into());
        self
    }

    pub fn key(&self) -> ScoreKey {
        ScoreKey::new(self.team.id.clone(), self.image.name.clone())
    }
}

/// The event currently representing one leaderboard slot.
///
/// Carries the fields of the winning [`ScoreEvent`] verbatim except `penalties`, which the
/// leaderboard does not track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub time: DateTime<Utc>,
    pub team: TeamSnapshot,
    pub image: ImageSnapshot,
    pub points: i32,
    pub playtime: Duration,
    pub elapsed_time: Duration,
    pub playtime_str: String,
    pub elapsed_time_str: String,
    #[serde(default)]
    pub vulns: VulnWrapper,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

impl LeaderboardEntry {
    pub fn key(&self) -> ScoreKey {
        ScoreKey::new(self.team.id.clone(), self.image.name.clone())
    }
}

impl From<ScoreEvent> for LeaderboardEntry {
    fn from(event: ScoreEvent) -> Self {
        Self {
            time: event.time,
            team: event.team,
            image: event.image,
            points: event.points,
            playtime: event.playtime,
            elapsed_time: event.elapsed_time,
            playtime_str: event.playtime_str,
            elapsed_time_str: event.elapsed_time_str,
            vulns: event.vulns,
            debug: event.debug,
        }
    }
}
