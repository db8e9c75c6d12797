use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::store::StoreError,
    model::{db::ResultModel, score::ScoreEvent},
};

const COLLECTION: &str = "results";

/// Append-only access to the score ledger.
///
/// There is no update or delete: events are written once and never touched
/// again. Duplicate `(team, image, time)` events are accepted as is.
pub struct ResultRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ResultRepository<'a, C> {
    /// Creates a new instance of [`ResultRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a score event to the ledger
    pub async fn create(&self, event: &ScoreEvent) -> Result<ResultModel, StoreError> {
        let document = serde_json::to_value(event).map_err(StoreError::document(COLLECTION))?;

        let result = entity::results::ActiveModel {
            team_id: ActiveValue::Set(event.team.id.clone()),
            image_name: ActiveValue::Set(event.image.name.clone()),
            time: ActiveValue::Set(event.time.naive_utc()),
            document: ActiveValue::Set(document),
            ..Default::default()
        };

        Ok(result.insert(self.db).await?)
    }

    /// Gets every event for a team, optionally only for one image, oldest first
    ///
    /// Events sharing a timestamp are returned in insertion order.
    pub async fn get_by_team(
        &self,
        team_id: &str,
        image_name: Option<&str>,
    ) -> Result<Vec<ScoreEvent>, StoreError> {
        let mut query = entity::prelude::Results::find()
            .filter(entity::results::Column::TeamId.eq(team_id));

        if let Some(image_name) = image_name {
            query = query.filter(entity::results::Column::ImageName.eq(image_name));
        }

        let rows = query
            .order_by_asc(entity::results::Column::Time)
            .order_by_asc(entity::results::Column::Id)
            .all(self.db)
            .await?;

        rows.into_iter().map(decode).collect()
    }

    /// Gets the entire ledger in insertion order
    pub async fn get_all(&self) -> Result<Vec<ScoreEvent>, StoreError> {
        let rows = entity::prelude::Results::find()
            .order_by_asc(entity::results::Column::Id)
            .all(self.db)
            .await?;

        rows.into_iter().map(decode).collect()
    }
}

fn decode(row: ResultModel) -> Result<ScoreEvent, StoreError> {
    serde_json::from_value(row.document).map_err(StoreError::document(COLLECTION))
}
