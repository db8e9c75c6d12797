//! Service layer for the scoring core.
//!
//! Services obtain a store handle from the shared [`StoreSession`] on every call and coordinate
//! the repositories in [`crate::server::data`]. The ledger records check results, the
//! materializer reduces the ledger into the scoreboard, the leaderboard service reads and
//! exports that scoreboard and the recorder ties appending and promoting together for the
//! check-completion path.

pub mod leaderboard;
pub mod ledger;
pub mod materializer;
pub mod recorder;

use sea_orm::ConnectionTrait;

use crate::server::{
    data::team::TeamRepository,
    error::Error,
    model::team::TeamRecord,
};

/// Resolves a human-entered team name through the team registry
///
/// # Returns
/// - `Ok(TeamRecord)` - The team registered under that alias or ID
/// - `Err(Error::TeamNotFound)` - The registry has no such team
/// - `Err(Error::StoreError)` - The registry lookup failed
pub(crate) async fn resolve_team<C: ConnectionTrait>(
    db: &C,
    team_name: &str,
) -> Result<TeamRecord, Error> {
    TeamRepository::new(db)
        .get_by_name(team_name)
        .await?
        .map(TeamRecord::from)
        .ok_or_else(|| Error::TeamNotFound(team_name.to_string()))
}
