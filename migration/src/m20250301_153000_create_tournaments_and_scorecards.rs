use sea_orm_migration::prelude::*;

use crate::enums::*;
use crate::macros::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tournament::Table)
                    .col(
                        ColumnDef::new(Tournament::TournamentId)
                            .integer()
                            .primary_key()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Tournament::TourId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tournament::Table, Tournament::TourId)
                            .to(Tour::Table, Tour::TourId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .col(ColumnDef::new(Tournament::Name).string().not_null())
                    .col(ColumnDef::new(Tournament::CourseName).string())
                    .col(ColumnDef::new(Tournament::Status).string())
                    .col(ColumnDef::new(Tournament::StartDate).date())
                    .col(ColumnDef::new(Tournament::EndDate).date())
                    .col(
                        ColumnDef::new(Tournament::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Scorecard::Table)
                    .col(
                        ColumnDef::new(Scorecard::Id)
                            .integer()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Scorecard::TournamentId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Scorecard::Table, Scorecard::TournamentId)
                            .to(Tournament::Table, Tournament::TournamentId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .col(ColumnDef::new(Scorecard::PlayerId).integer().not_null())
                    .col(ColumnDef::new(Scorecard::PlayerName).string())
                    .col(ColumnDef::new(Scorecard::HcpIndex).double())
                    .col(
                        ColumnDef::new(Scorecard::Round)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Scorecard::CourseName).string())
                    .col(ColumnDef::new(Scorecard::Teetype).string())
                    .col(ColumnDef::new(Scorecard::Rating).double())
                    .col(ColumnDef::new(Scorecard::Slope).integer())
                    .col(ColumnDef::new(Scorecard::TotalGross).integer())
                    .col(ColumnDef::new(Scorecard::TotalNet).double())
                    .col(ColumnDef::new(Scorecard::ToParGross).integer())
                    .col(ColumnDef::new(Scorecard::ToParNet).double())
                    .col(ColumnDef::new(Scorecard::InGross).integer())
                    .col(ColumnDef::new(Scorecard::OutGross).integer())
                    .col(ColumnDef::new(Scorecard::InNet).double())
                    .col(ColumnDef::new(Scorecard::OutNet).double())
                    .col(
                        ColumnDef::new(Scorecard::HoleData)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Scorecard::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .index(
                        Index::create()
                            .name("unique_scorecard_player_round")
                            .col(Scorecard::TournamentId)
                            .col(Scorecard::PlayerId)
                            .col(Scorecard::Round)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table!(Scorecard, manager);
        drop_table!(Tournament, manager);
        Ok(())
    }
}
