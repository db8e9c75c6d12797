use sea_orm::entity::prelude::*;

/// One immutable score event in the append-only ledger.
///
/// `team_id`, `image_name` and `time` are copied out of `document` so the ledger can be
/// filtered and sorted without decoding every row. `id` doubles as the insertion order.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub team_id: String,
    pub image_name: String,
    pub time: DateTime,
    pub document: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
