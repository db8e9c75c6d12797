use sea_orm_migration::{prelude::*, schema::*};

static PK_SCOREBOARD: &str = "pk_scoreboard_image_name_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scoreboard::Table)
                    .if_not_exists()
                    .col(string(Scoreboard::ImageName))
                    .col(string(Scoreboard::TeamId))
                    .col(timestamp(Scoreboard::Time))
                    .col(json(Scoreboard::Document))
                    .primary_key(
                        Index::create()
                            .name(PK_SCOREBOARD)
                            .col(Scoreboard::ImageName)
                            .col(Scoreboard::TeamId),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scoreboard::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Scoreboard {
    Table,
    ImageName,
    TeamId,
    Time,
    Document,
}
