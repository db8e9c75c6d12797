//! Team registry fixture utilities.

pub mod factory;

use sea_orm::{ActiveValue, EntityTrait};

use crate::{context::TestContext, error::TestError};

impl TestContext {
    pub fn team(&mut self) -> TeamFixtures<'_> {
        TeamFixtures { context: self }
    }
}

pub struct TeamFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> TeamFixtures<'a> {
    /// Insert a team into the registry using [`factory::team`] values.
    pub async fn insert_team(
        &self,
        team_id: &str,
        alias: &str,
    ) -> Result<entity::team::Model, TestError> {
        let team = factory::team(team_id, alias);

        Ok(
            entity::prelude::Team::insert(entity::team::ActiveModel {
                team_id: ActiveValue::Set(team.team_id),
                alias: ActiveValue::Set(team.alias),
                email: ActiveValue::Set(team.email),
                score: ActiveValue::Set(team.score),
                image_count: ActiveValue::Set(team.image_count),
                updated_at: ActiveValue::Set(team.updated_at),
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
