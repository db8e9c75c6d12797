use crate::server::{
    data::session::StoreSession,
    error::store::StoreError,
    model::score::{LeaderboardEntry, ScoreEvent},
    service::{ledger::ScoreLedger, materializer::LeaderboardMaterializer},
};

/// What recording an event did to the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The event now represents its slot.
    Promoted {
        /// Points the slot held before, `None` if the slot was empty
        previous: Option<i32>,
    },
    /// The slot already holds a later event; the event was only appended to the ledger.
    Stale,
}

/// Records completed check runs.
///
/// Appends every event to the ledger and promotes it onto the scoreboard when it is at least
/// as recent as what the slot currently holds.
pub struct ScoreRecorder<'a> {
    session: &'a StoreSession,
}

impl<'a> ScoreRecorder<'a> {
    /// Creates a new instance of [`ScoreRecorder`]
    pub fn new(session: &'a StoreSession) -> Self {
        Self { session }
    }

    /// Records one check run
    ///
    /// The ledger append always happens first. If the scoreboard step fails afterwards the
    /// event is still in the ledger and the next full rebuild picks it up.
    ///
    /// # Returns
    /// - `Ok(RecordOutcome::Promoted)` - The event was appended and now holds its slot
    /// - `Ok(RecordOutcome::Stale)` - The event was appended but its slot holds a later event
    /// - `Err(StoreError)` - The append or the scoreboard update failed
    pub async fn record(&self, event: ScoreEvent) -> Result<RecordOutcome, StoreError> {
        ScoreLedger::new(self.session).append(&event).await?;

        let materializer = LeaderboardMaterializer::new(self.session);
        let current = materializer.current_latest(&event.key()).await?;

        if let Some(current) = &current {
            if event.time < current.time {
                tracing::debug!(
                    "Result for team {} on image {} is older than the scoreboard entry",
                    event.team.id,
                    event.image.name
                );

                return Ok(RecordOutcome::Stale);
            }
        }

        materializer
            .upsert_one(&LeaderboardEntry::from(event))
            .await?;

        Ok(RecordOutcome::Promoted {
            previous: current.map(|entry| entry.points),
        })
    }
}
