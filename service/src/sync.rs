use log::{info, warn};
use sea_orm::DatabaseConnection;

use entity::sea_orm_active_enums::SyncStatus;

use crate::dto::sgt::{ApiTour, SgtClient};
use crate::dto::StandingSide;
use crate::error::GenericError;
use crate::mutation;

/// Only the most recent tournaments of each tour are mirrored; older ones
/// never change and the scorecard fetch per tournament is the expensive part.
pub const RECENT_TOURNAMENTS_PER_TOUR: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSummary {
    pub records: usize,
}

/// Mirror the whole club: members, tours, and for every active tour its
/// standings, roster, recent tournaments and their scorecards.
///
/// Failures below the tour level are logged and skipped so one broken
/// tournament cannot stall the rest of the run; a failed members or tours
/// fetch aborts and marks the run failed. Either way the sync log row opened
/// at the start is closed.
pub async fn run_full_sync(
    db: &DatabaseConnection,
    sgt: &SgtClient,
) -> Result<SyncSummary, GenericError> {
    let log_id = mutation::open_sync_log(db, "full").await?;
    let mut records = 0;

    let result = sync_all(db, sgt, &mut records).await;
    match &result {
        Ok(()) => {
            mutation::close_sync_log(db, log_id, SyncStatus::Completed, records, None).await?;
            info!("sync completed, {records} records upserted");
        }
        Err(e) => {
            warn!("sync failed: {:?}", e);
            mutation::close_sync_log(
                db,
                log_id,
                SyncStatus::Failed,
                records,
                Some(e.message().to_string()),
            )
            .await?;
        }
    }
    result.map(|()| SyncSummary { records })
}

async fn sync_all(
    db: &DatabaseConnection,
    sgt: &SgtClient,
    records: &mut usize,
) -> Result<(), GenericError> {
    let members = sgt.fetch_members().await?;
    *records += mutation::upsert_members(db, &members).await?;
    info!("synced {} members", members.len());

    let tours = sgt.fetch_tours().await?;
    *records += mutation::upsert_tours(db, &tours).await?;
    info!("synced {} tours", tours.len());

    for tour in tours.iter().filter(|t| t.is_active()) {
        sync_tour(db, sgt, tour, records).await;
    }
    Ok(())
}

async fn sync_tour(db: &DatabaseConnection, sgt: &SgtClient, tour: &ApiTour, records: &mut usize) {
    info!("syncing tour {} ({})", tour.tour_id, tour.name);

    for side in [StandingSide::Gross, StandingSide::Net] {
        match sgt.fetch_tour_standings(tour.tour_id, side).await {
            Ok(standings) => {
                match mutation::upsert_standings(db, tour.tour_id, side, &standings).await {
                    Ok(count) => *records += count,
                    Err(e) => warn!("unable to store {side} standings for tour {}: {:?}", tour.tour_id, e),
                }
            }
            Err(e) => warn!("unable to fetch {side} standings for tour {}: {:?}", tour.tour_id, e),
        }
    }

    match sgt.fetch_tour_members(tour.tour_id).await {
        Ok(roster) => match mutation::upsert_tour_members(db, tour.tour_id, &roster).await {
            Ok(count) => *records += count,
            Err(e) => warn!("unable to store roster for tour {}: {:?}", tour.tour_id, e),
        },
        Err(e) => warn!("unable to fetch roster for tour {}: {:?}", tour.tour_id, e),
    }

    let mut tournaments = match sgt.fetch_tournaments(tour.tour_id).await {
        Ok(tournaments) => tournaments,
        Err(e) => {
            warn!("unable to fetch tournaments for tour {}: {:?}", tour.tour_id, e);
            return;
        }
    };
    tournaments.truncate(RECENT_TOURNAMENTS_PER_TOUR);

    match mutation::upsert_tournaments(db, tour.tour_id, &tournaments).await {
        Ok(count) => *records += count,
        Err(e) => {
            warn!("unable to store tournaments for tour {}: {:?}", tour.tour_id, e);
            return;
        }
    }

    for tournament in &tournaments {
        match sgt.fetch_scorecards(tournament.tournament_id).await {
            Ok(scorecards) => {
                match mutation::upsert_scorecards(db, tournament.tournament_id, &scorecards).await {
                    Ok(count) => *records += count,
                    Err(e) => warn!(
                        "unable to store scorecards for tournament {}: {:?}",
                        tournament.tournament_id, e
                    ),
                }
            }
            Err(e) => warn!(
                "unable to fetch scorecards for tournament {}: {:?}",
                tournament.tournament_id, e
            ),
        }
    }
}
