use std::time::Duration;

use api::launch;
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use rocket::{error, info};
use service::SgtClient;

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    dotenv().ok();

    let db =
        sea_orm::Database::connect(std::env::var("DATABASE_URL").expect("DATABASE_URL not set"))
            .await
            .expect("database must be reachable");
    Migrator::up(&db, None).await.expect("migrations must apply");

    let sgt = SgtClient::from_env().expect("SGT credentials not configured");
    let sync_interval = std::env::var("SYNC_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(900);

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(sync_interval));
        loop {
            interval.tick().await;
            match service::run_full_sync(&db, &sgt).await {
                Ok(summary) => info!("periodic sync done, {} records", summary.records),
                Err(e) => error!("periodic sync failed: {:?}", e),
            }
        }
    });

    launch().await.launch().await?;
    Ok(())
}
