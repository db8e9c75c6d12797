//! Raw ledger row fixtures.
//!
//! The application only writes well-formed documents, so these helpers are the way to get
//! rows into the ledger that the application would refuse to produce.

use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue};
use serde_json::Value;

use crate::{context::TestContext, error::TestError};

impl TestContext {
    pub fn results(&mut self) -> ResultFixtures<'_> {
        ResultFixtures { context: self }
    }
}

pub struct ResultFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> ResultFixtures<'a> {
    /// Insert a ledger row with an arbitrary document.
    pub async fn insert_raw(
        &self,
        team_id: &str,
        image_name: &str,
        time: NaiveDateTime,
        document: Value,
    ) -> Result<entity::results::Model, TestError> {
        let row = entity::results::ActiveModel {
            team_id: ActiveValue::Set(team_id.to_string()),
            image_name: ActiveValue::Set(image_name.to_string()),
            time: ActiveValue::Set(time),
            document: ActiveValue::Set(document),
            ..Default::default()
        };

        Ok(row.insert(&self.context.db).await?)
    }
}
