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
                    .as_enum(SyncStatus::Table)
                    .values(SyncStatus::iter().skip(1))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SyncLog::Table)
                    .col(
                        ColumnDef::new(SyncLog::Id)
                            .integer()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SyncLog::SyncType).string().not_null())
                    .col(
                        ColumnDef::new(SyncLog::Status)
                            .custom(SyncStatus::Table)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SyncLog::StartedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SyncLog::CompletedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(SyncLog::RecordsSynced).integer())
                    .col(ColumnDef::new(SyncLog::ErrorMessage).string())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table!(SyncLog, manager);
        drop_type!(SyncStatus, manager);
        Ok(())
    }
}
