use sea_orm::Iterable;
use sea_orm_migration::prelude::*;

use crate::enums::*;
use crate::extension::postgres::Type;
use crate::macros::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(StandingSide::Table)
                    .values(StandingSide::iter().skip(1))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .col(
                        ColumnDef::new(Member::UserId)
                            .integer()
                            .primary_key()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Member::UserName).string().not_null())
                    .col(ColumnDef::new(Member::Email).string())
                    .col(
                        ColumnDef::new(Member::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Member::CountryCode).string())
                    .col(ColumnDef::new(Member::HasAvatar).string())
                    .col(ColumnDef::new(Member::GameId).string())
                    .col(
                        ColumnDef::new(Member::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tour::Table)
                    .col(
                        ColumnDef::new(Tour::TourId)
                            .integer()
                            .primary_key()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Tour::Name).string().not_null())
                    .col(ColumnDef::new(Tour::StartDate).date())
                    .col(ColumnDef::new(Tour::EndDate).date())
                    .col(
                        ColumnDef::new(Tour::TeamTour)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Tour::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Tour::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TourMember::Table)
                    .col(
                        ColumnDef::new(TourMember::Id)
                            .integer()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TourMember::TourId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(TourMember::Table, TourMember::TourId)
                            .to(Tour::Table, Tour::TourId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .col(ColumnDef::new(TourMember::UserId).integer().not_null())
                    .col(ColumnDef::new(TourMember::UserName).string().not_null())
                    .col(ColumnDef::new(TourMember::HcpIndex).double())
                    .col(ColumnDef::new(TourMember::CustomHcp).double())
                    .col(
                        ColumnDef::new(TourMember::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .index(
                        Index::create()
                            .name("unique_tour_member")
                            .col(TourMember::TourId)
                            .col(TourMember::UserId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TourStanding::Table)
                    .col(
                        ColumnDef::new(TourStanding::Id)
                            .integer()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TourStanding::TourId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(TourStanding::Table, TourStanding::TourId)
                            .to(Tour::Table, Tour::TourId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .col(ColumnDef::new(TourStanding::UserName).string().not_null())
                    .col(
                        ColumnDef::new(TourStanding::Side)
                            .custom(StandingSide::Table)
                            .not_null(),
                    )
                    .col(ColumnDef::new(TourStanding::CountryCode).string())
                    .col(ColumnDef::new(TourStanding::HasAvatar).string())
                    .col(ColumnDef::new(TourStanding::Hcp).double())
                    .col(
                        ColumnDef::new(TourStanding::Events)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TourStanding::Wins)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TourStanding::Top5)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TourStanding::Top10)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TourStanding::Points)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(TourStanding::Position).integer())
                    .col(
                        ColumnDef::new(TourStanding::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .index(
                        Index::create()
                            .name("unique_tour_standing_side")
                            .col(TourStanding::TourId)
                            .col(TourStanding::UserName)
                            .col(TourStanding::Side)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table!(TourStanding, manager);
        drop_table!(TourMember, manager);
        drop_table!(Tour, manager);
        drop_table!(Member, manager);
        drop_type!(StandingSide, manager);
        Ok(())
    }
}
