//! Score ledger and leaderboard materialization for image-based security competitions.
//!
//! Check runs against scored images produce [`ScoreEvent`](server::model::score::ScoreEvent)s
//! which are appended to an immutable ledger. The leaderboard is a derived view holding the
//! latest event per `(team, image)` slot; it can always be rebuilt from the ledger.

pub mod server;
