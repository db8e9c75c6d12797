use serde::{Deserialize, Serialize};

/// A scored image as configured for the competition.
///
/// The position of an image in the configured list is its `index`, and that order is the
/// order per-team leaderboard listings are returned in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredImage {
    pub name: String,
    pub color: String,
    pub index: u32,
}
