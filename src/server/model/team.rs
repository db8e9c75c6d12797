use chrono::NaiveDateTime;
use serde::Serialize;

use crate::server::model::db::TeamModel;

/// Authoritative team identity from the team registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRecord {
    /// Stable key referenced by every score event
    pub id: String,
    /// Human-entered display name, also accepted for lookups
    pub alias: String,
    pub email: String,
    pub score: i32,
    pub image_count: i32,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<TeamModel> for TeamRecord {
    fn from(model: TeamModel) -> Self {
        Self {
            id: model.team_id,
            alias: model.alias,
            email: model.email,
            score: model.score,
            image_count: model.image_count,
            updated_at: model.updated_at,
        }
    }
}
