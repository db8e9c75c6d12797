use sea_orm::entity::prelude::*;

/// The current leaderboard entry for one `(image_name, team_id)` slot.
///
/// The composite primary key is what guarantees a single row per slot.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "scoreboard")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub image_name: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub team_id: String,
    pub time: DateTime,
    pub document: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
