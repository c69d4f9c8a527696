use chrono::Utc;
use itertools::Itertools;
use log::error;
use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait};

use entity::sea_orm_active_enums::SyncStatus;
use entity::*;

use crate::dto::sgt::{ApiMember, ApiScorecard, ApiStanding, ApiTour, ApiTourMember, ApiTournament};
use crate::dto::StandingSide;
use crate::error::GenericError;

pub async fn upsert_members(
    db: &impl ConnectionTrait,
    members: &[ApiMember],
) -> Result<usize, GenericError> {
    let members = members.iter().unique_by(|m| m.user_id).collect_vec();
    if members.is_empty() {
        return Ok(0);
    }
    member::Entity::insert_many(members.iter().map(|m| m.active_model()))
        .on_conflict(
            OnConflict::column(member::Column::UserId)
                .update_columns([
                    member::Column::UserName,
                    member::Column::Email,
                    member::Column::Active,
                    member::Column::CountryCode,
                    member::Column::HasAvatar,
                    member::Column::GameId,
                    member::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(db)
        .await
        .map_err(|e| {
            error!("unable to upsert members: {e}");
            GenericError::UnknownError("Unable to store members")
        })?;
    Ok(members.len())
}

pub async fn upsert_tours(db: &impl ConnectionTrait, tours: &[ApiTour]) -> Result<usize, GenericError> {
    let tours = tours.iter().unique_by(|t| t.tour_id).collect_vec();
    if tours.is_empty() {
        return Ok(0);
    }
    tour::Entity::insert_many(tours.iter().map(|t| t.active_model()))
        .on_conflict(
            OnConflict::column(tour::Column::TourId)
                .update_columns([
                    tour::Column::Name,
                    tour::Column::StartDate,
                    tour::Column::EndDate,
                    tour::Column::TeamTour,
                    tour::Column::Active,
                    tour::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(db)
        .await
        .map_err(|e| {
            error!("unable to upsert tours: {e}");
            GenericError::UnknownError("Unable to store tours")
        })?;
    Ok(tours.len())
}

pub async fn upsert_standings(
    db: &impl ConnectionTrait,
    tour_id: i32,
    side: StandingSide,
    standings: &[ApiStanding],
) -> Result<usize, GenericError> {
    let standings = standings.iter().unique_by(|s| s.user_name.clone()).collect_vec();
    if standings.is_empty() {
        return Ok(0);
    }
    tour_standing::Entity::insert_many(standings.iter().map(|s| s.active_model(tour_id, side)))
        .on_conflict(
            OnConflict::columns([
                tour_standing::Column::TourId,
                tour_standing::Column::UserName,
                tour_standing::Column::Side,
            ])
            .update_columns([
                tour_standing::Column::CountryCode,
                tour_standing::Column::HasAvatar,
                tour_standing::Column::Hcp,
                tour_standing::Column::Events,
                tour_standing::Column::Wins,
                tour_standing::Column::Top5,
                tour_standing::Column::Top10,
                tour_standing::Column::Points,
                tour_standing::Column::Position,
                tour_standing::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec(db)
        .await
        .map_err(|e| {
            error!("unable to upsert standings for tour {tour_id}: {e}");
            GenericError::UnknownError("Unable to store standings")
        })?;
    Ok(standings.len())
}

pub async fn upsert_tour_members(
    db: &impl ConnectionTrait,
    tour_id: i32,
    members: &[ApiTourMember],
) -> Result<usize, GenericError> {
    let members = members.iter().unique_by(|m| m.user_id).collect_vec();
    if members.is_empty() {
        return Ok(0);
    }
    tour_member::Entity::insert_many(members.iter().map(|m| m.active_model(tour_id)))
        .on_conflict(
            OnConflict::columns([tour_member::Column::TourId, tour_member::Column::UserId])
                .update_columns([
                    tour_member::Column::UserName,
                    tour_member::Column::HcpIndex,
                    tour_member::Column::CustomHcp,
                    tour_member::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(db)
        .await
        .map_err(|e| {
            error!("unable to upsert roster for tour {tour_id}: {e}");
            GenericError::UnknownError("Unable to store tour roster")
        })?;
    Ok(members.len())
}

pub async fn upsert_tournaments(
    db: &impl ConnectionTrait,
    tour_id: i32,
    tournaments: &[ApiTournament],
) -> Result<usize, GenericError> {
    let tournaments = tournaments.iter().unique_by(|t| t.tournament_id).collect_vec();
    if tournaments.is_empty() {
        return Ok(0);
    }
    tournament::Entity::insert_many(tournaments.iter().map(|t| t.active_model(tour_id)))
        .on_conflict(
            OnConflict::column(tournament::Column::TournamentId)
                .update_columns([
                    tournament::Column::TourId,
                    tournament::Column::Name,
                    tournament::Column::CourseName,
                    tournament::Column::Status,
                    tournament::Column::StartDate,
                    tournament::Column::EndDate,
                    tournament::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(db)
        .await
        .map_err(|e| {
            error!("unable to upsert tournaments for tour {tour_id}: {e}");
            GenericError::UnknownError("Unable to store tournaments")
        })?;
    Ok(tournaments.len())
}

pub async fn upsert_scorecards(
    db: &impl ConnectionTrait,
    tournament_id: i32,
    scorecards: &[ApiScorecard],
) -> Result<usize, GenericError> {
    let scorecards = scorecards
        .iter()
        .unique_by(|s| (s.player_id, s.round.unwrap_or(1)))
        .collect_vec();
    if scorecards.is_empty() {
        return Ok(0);
    }
    scorecard::Entity::insert_many(scorecards.iter().map(|s| s.active_model(tournament_id)))
        .on_conflict(
            OnConflict::columns([
                scorecard::Column::TournamentId,
                scorecard::Column::PlayerId,
                scorecard::Column::Round,
            ])
            .update_columns([
                scorecard::Column::PlayerName,
                scorecard::Column::HcpIndex,
                scorecard::Column::CourseName,
                scorecard::Column::Teetype,
                scorecard::Column::Rating,
                scorecard::Column::Slope,
                scorecard::Column::TotalGross,
                scorecard::Column::TotalNet,
                scorecard::Column::ToParGross,
                scorecard::Column::ToParNet,
                scorecard::Column::InGross,
                scorecard::Column::OutGross,
                scorecard::Column::InNet,
                scorecard::Column::OutNet,
                scorecard::Column::HoleData,
                scorecard::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec(db)
        .await
        .map_err(|e| {
            error!("unable to upsert scorecards for tournament {tournament_id}: {e}");
            GenericError::UnknownError("Unable to store scorecards")
        })?;
    Ok(scorecards.len())
}

pub async fn open_sync_log(db: &impl ConnectionTrait, sync_type: &str) -> Result<i32, GenericError> {
    let log = sync_log::ActiveModel {
        id: NotSet,
        sync_type: Set(sync_type.to_string()),
        status: Set(SyncStatus::Running),
        started_at: Set(Utc::now().fixed_offset()),
        completed_at: Set(None),
        records_synced: Set(None),
        error_message: Set(None),
    };
    let result = sync_log::Entity::insert(log).exec(db).await.map_err(|e| {
        error!("unable to open sync log entry: {e}");
        GenericError::UnknownError("Unable to record sync start")
    })?;
    Ok(result.last_insert_id)
}

pub async fn close_sync_log(
    db: &impl ConnectionTrait,
    id: i32,
    status: SyncStatus,
    records: usize,
    error_message: Option<String>,
) -> Result<(), GenericError> {
    let log = sync_log::ActiveModel {
        id: Set(id),
        status: Set(status),
        completed_at: Set(Some(Utc::now().fixed_offset())),
        records_synced: Set(Some(records as i32)),
        error_message: Set(error_message),
        ..Default::default()
    };
    log.update(db).await.map_err(|e| {
        error!("unable to close sync log entry {id}: {e}");
        GenericError::UnknownError("Unable to record sync result")
    })?;
    Ok(())
}
