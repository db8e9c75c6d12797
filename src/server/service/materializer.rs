//! Leaderboard materialization.
//!
//! The scoreboard holds exactly one [`LeaderboardEntry`] per [`ScoreKey`]: the latest event the
//! ledger holds for that team on that image. [`reduce_latest`] computes that view in memory,
//! [`LeaderboardMaterializer::rebuild_all`] persists it wholesale and
//! [`LeaderboardMaterializer::upsert_one`] patches a single slot.

use std::collections::{hash_map::Entry, HashMap};

use sea_orm::TransactionTrait;

use crate::server::{
    data::{results::ResultRepository, scoreboard::ScoreboardRepository, session::StoreSession},
    error::store::StoreError,
    model::score::{LeaderboardEntry, ScoreEvent, ScoreKey},
};

/// Reduces a ledger scan to the latest event per slot.
///
/// `events` must be in ledger insertion order. An event replaces the one held for its slot
/// when its time is greater than or equal to the held time, so among events sharing the
/// maximal time the one inserted last wins.
///
/// Entries are returned in the order their slot first appears in `events`, which makes the
/// output identical for identical input.
pub fn reduce_latest<I>(events: I) -> Vec<LeaderboardEntry>
where
    I: IntoIterator<Item = ScoreEvent>,
{
    let mut slots: HashMap<ScoreKey, usize> = HashMap::new();
    let mut latest: Vec<ScoreEvent> = Vec::new();

    for event in events {
        match slots.entry(event.key()) {
            Entry::Occupied(slot) => {
                let held = &mut latest[*slot.get()];
                if event.time >= held.time {
                    *held = event;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(latest.len());
                latest.push(event);
            }
        }
    }

    latest.into_iter().map(LeaderboardEntry::from).collect()
}

pub struct LeaderboardMaterializer<'a> {
    session: &'a StoreSession,
}

impl<'a> LeaderboardMaterializer<'a> {
    /// Creates a new instance of [`LeaderboardMaterializer`]
    pub fn new(session: &'a StoreSession) -> Self {
        Self { session }
    }

    /// Recomputes the whole scoreboard from the ledger
    ///
    /// The ledger scan, the delete and every insert batch run in one transaction. Readers keep
    /// seeing the previous scoreboard until the commit, and any failure rolls the rebuild back
    /// as a whole. An empty ledger yields an empty scoreboard.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of entries in the rebuilt scoreboard
    /// - `Err(StoreError)` - Nothing was changed
    pub async fn rebuild_all(&self) -> Result<usize, StoreError> {
        let db = self.session.ensure_connection().await?;
        let txn = db.begin().await?;

        let events = ResultRepository::new(&txn).get_all().await?;
        let scanned = events.len();
        let entries = reduce_latest(events);

        ScoreboardRepository::new(&txn)
            .replace_all(&entries)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Rebuilt scoreboard with {} entries from {} results",
            entries.len(),
            scanned
        );

        Ok(entries.len())
    }

    /// Replaces the entry for one slot, inserting it if the slot is empty
    ///
    /// Runs as a single atomic statement, so concurrent upserts for the same slot leave exactly
    /// one entry behind: whichever statement the store applied last.
    pub async fn upsert_one(&self, entry: &LeaderboardEntry) -> Result<(), StoreError> {
        let db = self.session.ensure_connection().await?;

        ScoreboardRepository::new(&db).upsert(entry).await?;

        tracing::debug!(
            "Upserted scoreboard entry for team {} on image {}",
            entry.team.id,
            entry.image.name
        );

        Ok(())
    }

    /// Gets the entry currently held by a slot
    ///
    /// # Returns
    /// - `Ok(Some(entry))` - The slot's current entry
    /// - `Ok(None)` - Nothing has been materialized for the slot yet
    /// - `Err(StoreError)` - The store could not be reached or queried
    pub async fn current_latest(
        &self,
        key: &ScoreKey,
    ) -> Result<Option<LeaderboardEntry>, StoreError> {
        let db = self.session.ensure_connection().await?;

        ScoreboardRepository::new(&db).get_by_key(key).await
    }
}
