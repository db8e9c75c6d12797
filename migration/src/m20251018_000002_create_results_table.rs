use sea_orm_migration::{prelude::*, schema::*};

static IDX_RESULTS_TEAM_IMAGE_TIME: &str = "idx_results_team_id_image_name_time";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Results::Table)
                    .if_not_exists()
                    .col(pk_auto(Results::Id))
                    .col(string(Results::TeamId))
                    .col(string(Results::ImageName))
                    .col(timestamp(Results::Time))
                    .col(json(Results::Document))
                    .to_owned(),
            )
            .await?;

        // History queries filter by team (and optionally image) and sort by time
        manager
            .create_index(
                Index::create()
                    .name(IDX_RESULTS_TEAM_IMAGE_TIME)
                    .table(Results::Table)
                    .col(Results::TeamId)
                    .col(Results::ImageName)
                    .col(Results::Time)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RESULTS_TEAM_IMAGE_TIME)
                    .table(Results::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Results::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Results {
    Table,
    Id,
    TeamId,
    ImageName,
    Time,
    Document,
}
