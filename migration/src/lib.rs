pub use sea_orm_migration::prelude::*;
mod enums;
mod m20250301_101200_create_members_and_tours;
mod m20250301_153000_create_tournaments_and_scorecards;
mod m20250322_140100_create_sync_log;
mod macros;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_101200_create_members_and_tours::Migration),
            Box::new(m20250301_153000_create_tournaments_and_scorecards::Migration),
            Box::new(m20250322_140100_create_sync_log::Migration),
        ]
    }
}
