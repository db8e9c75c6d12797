use crate::server::{
    data::{results::ResultRepository, session::StoreSession},
    error::{store::StoreError, Error},
    model::score::ScoreEvent,
    service::resolve_team,
};

/// The append-only record of every check run.
pub struct ScoreLedger<'a> {
    session: &'a StoreSession,
}

impl<'a> ScoreLedger<'a> {
    /// Creates a new instance of [`ScoreLedger`]
    pub fn new(session: &'a StoreSession) -> Self {
        Self { session }
    }

    /// Appends one event to the ledger
    ///
    /// Nothing is deduplicated here; an identical event appended twice is stored twice and
    /// collapses into one slot only when the scoreboard is materialized.
    pub async fn append(&self, event: &ScoreEvent) -> Result<(), StoreError> {
        let db = self.session.ensure_connection().await?;

        let row = ResultRepository::new(&db).create(event).await?;

        tracing::debug!(
            "Appended result {} for team {} on image {}",
            row.id,
            row.team_id,
            row.image_name
        );

        Ok(())
    }

    /// Gets a team's event history, oldest first
    ///
    /// # Arguments
    /// - `team_name` - Alias or ID of the team, resolved through the team registry
    /// - `image_name` - Restrict the history to one image
    ///
    /// # Returns
    /// - `Ok(Vec<ScoreEvent>)` - Every matching event sorted by time, possibly empty
    /// - `Err(Error::TeamNotFound)` - The team name is not registered
    /// - `Err(Error::StoreError)` - The store could not be reached or queried
    pub async fn query_history(
        &self,
        team_name: &str,
        image_name: Option<&str>,
    ) -> Result<Vec<ScoreEvent>, Error> {
        let db = self.session.ensure_connection().await?;

        let team = resolve_team(&db, team_name).await?;
        let events = ResultRepository::new(&db)
            .get_by_team(&team.id, image_name)
            .await?;

        Ok(events)
    }
}
