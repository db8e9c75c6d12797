use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
};

use crate::server::{
    error::store::StoreError,
    model::{
        db::ScoreboardModel,
        score::{LeaderboardEntry, ScoreKey},
    },
};

const COLLECTION: &str = "scoreboard";

/// Rows inserted per statement when repopulating the scoreboard
const BATCH_SIZE: usize = 100;

/// Access to the materialized scoreboard.
///
/// Every row is keyed by `(image_name, team_id)`, so the table itself enforces a single
/// entry per leaderboard slot.
pub struct ScoreboardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ScoreboardRepository<'a, C> {
    /// Creates a new instance of [`ScoreboardRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every scoreboard entry, in no particular order
    pub async fn get_all(&self) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let rows = entity::prelude::Scoreboard::find().all(self.db).await?;

        rows.into_iter().map(decode).collect()
    }

    /// Gets every scoreboard entry belonging to one team
    pub async fn get_by_team(&self, team_id: &str) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let rows = entity::prelude::Scoreboard::find()
            .filter(entity::scoreboard::Column::TeamId.eq(team_id))
            .all(self.db)
            .await?;

        rows.into_iter().map(decode).collect()
    }

    /// Gets the entry for one slot
    ///
    /// # Returns
    /// - `Ok(Some(entry))` - The slot has an entry
    /// - `Ok(None)` - Nothing has been materialized for the slot yet
    /// - `Err(StoreError)` - The lookup itself failed
    pub async fn get_by_key(&self, key: &ScoreKey) -> Result<Option<LeaderboardEntry>, StoreError> {
        let row = entity::prelude::Scoreboard::find()
            .filter(entity::scoreboard::Column::ImageName.eq(key.image_name.as_str()))
            .filter(entity::scoreboard::Column::TeamId.eq(key.team_id.as_str()))
            .one(self.db)
            .await?;

        row.map(decode).transpose()
    }

    /// Inserts the entry for its slot or replaces whatever the slot currently holds
    ///
    /// This is a single `INSERT .. ON CONFLICT DO UPDATE` statement, so concurrent upserts for
    /// the same slot can never leave more than one row behind.
    pub async fn upsert(&self, entry: &LeaderboardEntry) -> Result<(), StoreError> {
        entity::prelude::Scoreboard::insert(to_active_model(entry)?)
            .on_conflict(replace_on_conflict())
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Deletes every entry and inserts `entries` in their place
    ///
    /// Inserts carry the same conflict clause as [`Self::upsert`], so a slot written by a
    /// concurrent upsert after the delete is overwritten instead of failing the batch.
    ///
    /// # Notes
    /// - Not atomic on its own: pass a transaction as the connection so readers never observe
    ///   the emptied table and a failed batch leaves the previous contents in place
    /// - A slot should appear at most once per batch, Postgres rejects a statement that
    ///   updates the same row twice
    pub async fn replace_all(&self, entries: &[LeaderboardEntry]) -> Result<(), StoreError> {
        entity::prelude::Scoreboard::delete_many()
            .exec(self.db)
            .await?;

        for batch in entries.chunks(BATCH_SIZE) {
            let rows = batch
                .iter()
                .map(to_active_model)
                .collect::<Result<Vec<_>, _>>()?;

            entity::prelude::Scoreboard::insert_many(rows)
                .on_conflict(replace_on_conflict())
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(())
    }
}

/// Conflict on the slot key overwrites the held event
fn replace_on_conflict() -> OnConflict {
    OnConflict::columns([
        entity::scoreboard::Column::ImageName,
        entity::scoreboard::Column::TeamId,
    ])
    .update_columns([
        entity::scoreboard::Column::Time,
        entity::scoreboard::Column::Document,
    ])
    .to_owned()
}

fn to_active_model(
    entry: &LeaderboardEntry,
) -> Result<entity::scoreboard::ActiveModel, StoreError> {
    let document = serde_json::to_value(entry).map_err(StoreError::document(COLLECTION))?;

    Ok(entity::scoreboard::ActiveModel {
        image_name: ActiveValue::Set(entry.image.name.clone()),
        team_id: ActiveValue::Set(entry.team.id.clone()),
        time: ActiveValue::Set(entry.time.naive_utc()),
        document: ActiveValue::Set(document),
    })
}

fn decode(row: ScoreboardModel) -> Result<LeaderboardEntry, StoreError> {
    serde_json::from_value(row.document).map_err(StoreError::document(COLLECTION))
}
