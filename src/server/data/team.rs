use sea_orm::{ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter};

use crate::server::{error::store::StoreError, model::db::TeamModel};

/// Read-only access to the team registry.
pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Resolves a human-entered team name to its registry record
    ///
    /// The name is matched against the alias first and the stable team ID second, so both
    /// `"Alpha"` and `"t1"` resolve the same team.
    ///
    /// # Returns
    /// - `Ok(Some(team))` - A team with that alias or ID exists
    /// - `Ok(None)` - No team matches
    /// - `Err(StoreError)` - The lookup itself failed
    pub async fn get_by_name(&self, name: &str) -> Result<Option<TeamModel>, StoreError> {
        let mut teams = entity::prelude::Team::find()
            .filter(
                Condition::any()
                    .add(entity::team::Column::Alias.eq(name))
                    .add(entity::team::Column::TeamId.eq(name)),
            )
            .all(self.db)
            .await?;

        // An alias can equal another team's ID, prefer the alias match
        let position = teams
            .iter()
            .position(|team| team.alias == name)
            .or(if teams.is_empty() { None } else { Some(0) });

        Ok(position.map(|index| teams.swap_remove(index)))
    }
}
