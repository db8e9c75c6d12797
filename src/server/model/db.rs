//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so that signatures don't need to reach into the generated
//! `entity` crate directly.

/// Type alias for a ledger row.
///
/// # Fields (from `entity::results::Model`)
/// - `id` - Primary key, also the insertion order of the ledger
/// - `team_id` - Stable team identifier copied out of the event document
/// - `image_name` - Scored image name copied out of the event document
/// - `time` - Time of the check run that produced the event
/// - `document` - The full serialized [`ScoreEvent`](crate::server::model::score::ScoreEvent)
pub type ResultModel = entity::results::Model;

/// Type alias for a materialized scoreboard row.
///
/// # Fields (from `entity::scoreboard::Model`)
/// - `image_name`, `team_id` - Composite primary key, one row per leaderboard slot
/// - `time` - Time of the event currently held by the slot
/// - `document` - The full serialized [`LeaderboardEntry`](crate::server::model::score::LeaderboardEntry)
pub type ScoreboardModel = entity::scoreboard::Model;

/// Type alias for a team registry row.
pub type TeamModel = entity::team::Model;
