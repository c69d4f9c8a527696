use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;
use sea_orm::DatabaseConnection;

use service::dto::{SyncLogEntry, SyncOutcome};
use service::error::GenericError;
use service::SgtClient;

/// Run a full mirror of the SGT club data right now. The periodic worker does
/// the same on its own schedule.
#[openapi(tag = "Sync")]
#[post("/sync")]
pub(crate) async fn trigger_sync(
    db: &State<DatabaseConnection>,
    sgt: &State<SgtClient>,
) -> Result<Json<SyncOutcome>, GenericError> {
    let summary = service::run_full_sync(db.inner(), sgt.inner()).await?;
    Ok(Json(SyncOutcome {
        success: true,
        records: summary.records as i64,
    }))
}

#[openapi(tag = "Sync")]
#[get("/sync/log?<limit>")]
pub(crate) async fn sync_history(
    db: &State<DatabaseConnection>,
    limit: Option<u64>,
) -> Result<Json<Vec<SyncLogEntry>>, GenericError> {
    let entries = service::get_sync_log(db.inner(), limit.unwrap_or(20)).await?;
    Ok(Json(entries))
}
