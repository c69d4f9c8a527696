use std::collections::HashMap;

use itertools::Itertools;
use log::error;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use entity::prelude::*;
use entity::*;

use crate::dto;
use crate::error::GenericError;

pub async fn get_members(db: &impl ConnectionTrait) -> Result<Vec<dto::Member>, GenericError> {
    Member::find()
        .order_by_asc(member::Column::UserName)
        .all(db)
        .await
        .map(|rows| rows.into_iter().map(dto::Member::from).collect())
        .map_err(|e| {
            error!("unable to list members: {e}");
            GenericError::UnknownError("Unable to list members")
        })
}

pub async fn get_tours(db: &impl ConnectionTrait) -> Result<Vec<dto::Tour>, GenericError> {
    Tour::find()
        .order_by_asc(tour::Column::TourId)
        .all(db)
        .await
        .map(|rows| rows.into_iter().map(dto::Tour::from).collect())
        .map_err(|e| {
            error!("unable to list tours: {e}");
            GenericError::UnknownError("Unable to list tours")
        })
}

pub async fn get_tour_standings(
    db: &impl ConnectionTrait,
    tour_id: i32,
    side: dto::StandingSide,
) -> Result<Vec<dto::TourStanding>, GenericError> {
    TourStanding::find()
        .filter(tour_standing::Column::TourId.eq(tour_id))
        .filter(tour_standing::Column::Side.eq(sea_orm_active_enums::StandingSide::from(side)))
        .order_by_asc(tour_standing::Column::Position)
        .all(db)
        .await
        .map(|rows| rows.into_iter().map(dto::TourStanding::from).collect())
        .map_err(|e| {
            error!("unable to list standings for tour {tour_id}: {e}");
            GenericError::UnknownError("Unable to list standings")
        })
}

pub async fn get_tour_members(
    db: &impl ConnectionTrait,
    tour_id: i32,
) -> Result<Vec<dto::TourMember>, GenericError> {
    TourMember::find()
        .filter(tour_member::Column::TourId.eq(tour_id))
        .order_by_asc(tour_member::Column::UserName)
        .all(db)
        .await
        .map(|rows| rows.into_iter().map(dto::TourMember::from).collect())
        .map_err(|e| {
            error!("unable to list roster for tour {tour_id}: {e}");
            GenericError::UnknownError("Unable to list tour roster")
        })
}

pub async fn get_tournaments(
    db: &impl ConnectionTrait,
    tour_id: i32,
) -> Result<Vec<dto::Tournament>, GenericError> {
    Tournament::find()
        .filter(tournament::Column::TourId.eq(tour_id))
        .order_by_desc(tournament::Column::StartDate)
        .all(db)
        .await
        .map(|rows| rows.into_iter().map(dto::Tournament::from).collect())
        .map_err(|e| {
            error!("unable to list tournaments for tour {tour_id}: {e}");
            GenericError::UnknownError("Unable to list tournaments")
        })
}

pub async fn get_scorecards(
    db: &impl ConnectionTrait,
    tournament_id: i32,
) -> Result<Vec<dto::Scorecard>, GenericError> {
    Scorecard::find()
        .filter(scorecard::Column::TournamentId.eq(tournament_id))
        .order_by_asc(scorecard::Column::Round)
        .order_by_asc(scorecard::Column::TotalGross)
        .all(db)
        .await
        .map(|rows| rows.into_iter().map(dto::Scorecard::from).collect())
        .map_err(|e| {
            error!("unable to list scorecards for tournament {tournament_id}: {e}");
            GenericError::UnknownError("Unable to list scorecards")
        })
}

/// Dashboard stats for one member: per-tour handicaps across the active
/// tours, total mirrored rounds, and their best gross standing.
pub async fn get_member_stats(
    db: &impl ConnectionTrait,
    user_id: i32,
) -> Result<dto::MemberStats, GenericError> {
    let member = Member::find_by_id(user_id)
        .one(db)
        .await
        .map_err(|e| {
            error!("unable to load member {user_id}: {e}");
            GenericError::UnknownError("Unable to load member")
        })?
        .ok_or(GenericError::NotFound("Member not found"))?;

    let active_tours = Tour::find()
        .filter(tour::Column::Active.eq(true))
        .order_by_asc(tour::Column::TourId)
        .all(db)
        .await
        .map_err(|e| {
            error!("unable to list active tours: {e}");
            GenericError::UnknownError("Unable to list active tours")
        })?;

    let mut tours = Vec::new();
    let mut handicap = None;
    for tour in &active_tours {
        let membership = TourMember::find()
            .filter(
                tour_member::Column::TourId
                    .eq(tour.tour_id)
                    .and(tour_member::Column::UserId.eq(user_id)),
            )
            .one(db)
            .await
            .map_err(|e| {
                error!("unable to load membership for tour {}: {e}", tour.tour_id);
                GenericError::UnknownError("Unable to load tour membership")
            })?;
        if let Some(membership) = membership {
            if handicap.is_none() {
                handicap = membership.hcp_index;
            }
            tours.push(dto::TourHandicap {
                tour_id: tour.tour_id,
                tour_name: tour.name.clone(),
                handicap: membership.hcp_index.unwrap_or(0.0),
                custom_handicap: membership.custom_hcp.unwrap_or(0.0),
            });
        }
    }

    let total_rounds = Scorecard::find()
        .filter(scorecard::Column::PlayerId.eq(user_id))
        .count(db)
        .await
        .map_err(|e| {
            error!("unable to count rounds for member {user_id}: {e}");
            GenericError::UnknownError("Unable to count rounds")
        })?;

    let standings = TourStanding::find()
        .filter(tour_standing::Column::UserName.eq(member.user_name.clone()))
        .filter(tour_standing::Column::Side.eq(sea_orm_active_enums::StandingSide::Gross))
        .filter(
            tour_standing::Column::TourId
                .is_in(active_tours.iter().map(|t| t.tour_id).collect_vec()),
        )
        .all(db)
        .await
        .map_err(|e| {
            error!("unable to load standings for member {user_id}: {e}");
            GenericError::UnknownError("Unable to load standings")
        })?;

    Ok(dto::MemberStats {
        tours,
        handicap,
        total_rounds: total_rounds as i64,
        standing: best_standing(standings),
    })
}

fn best_standing(rows: Vec<tour_standing::Model>) -> Option<dto::StandingSummary> {
    rows.into_iter()
        .filter(|row| row.position.is_some())
        .min_by_key(|row| row.position.unwrap_or(i32::MAX))
        .map(dto::StandingSummary::from)
}

/// Every mirrored round of one player, newest tournament first.
pub async fn get_player_rounds(
    db: &impl ConnectionTrait,
    user_id: i32,
) -> Result<Vec<dto::PlayerRound>, GenericError> {
    let cards = Scorecard::find()
        .filter(scorecard::Column::PlayerId.eq(user_id))
        .all(db)
        .await
        .map_err(|e| {
            error!("unable to list rounds for member {user_id}: {e}");
            GenericError::UnknownError("Unable to list rounds")
        })?;

    let tournament_ids = cards.iter().map(|c| c.tournament_id).unique().collect_vec();
    if tournament_ids.is_empty() {
        return Ok(Vec::new());
    }

    let tournaments: HashMap<i32, tournament::Model> = Tournament::find()
        .filter(tournament::Column::TournamentId.is_in(tournament_ids))
        .all(db)
        .await
        .map_err(|e| {
            error!("unable to load tournaments for member {user_id}: {e}");
            GenericError::UnknownError("Unable to load tournaments")
        })?
        .into_iter()
        .map(|t| (t.tournament_id, t))
        .collect();

    let mut rounds = cards
        .into_iter()
        .filter_map(|card| {
            let tournament = tournaments.get(&card.tournament_id)?;
            Some(dto::PlayerRound::from_parts(tournament, card))
        })
        .collect_vec();
    rounds.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(rounds)
}

pub async fn get_sync_log(
    db: &impl ConnectionTrait,
    limit: u64,
) -> Result<Vec<dto::SyncLogEntry>, GenericError> {
    SyncLog::find()
        .order_by_desc(sync_log::Column::StartedAt)
        .limit(limit)
        .all(db)
        .await
        .map(|rows| rows.into_iter().map(dto::SyncLogEntry::from).collect())
        .map_err(|e| {
            error!("unable to list sync log: {e}");
            GenericError::UnknownError("Unable to list sync log")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use entity::sea_orm_active_enums::StandingSide;

    fn standing(tour_id: i32, position: Option<i32>, points: f64) -> tour_standing::Model {
        tour_standing::Model {
            id: 0,
            tour_id,
            user_name: "Greg Norman".to_string(),
            side: StandingSide::Gross,
            country_code: None,
            has_avatar: None,
            hcp: None,
            events: 4,
            wins: 1,
            top5: 2,
            top10: 3,
            points,
            position,
            updated_at: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn best_standing_prefers_lowest_position() {
        let rows = vec![
            standing(1, Some(4), 120.0),
            standing(2, Some(2), 300.0),
            standing(3, None, 500.0),
        ];
        let best = best_standing(rows).unwrap();
        assert_eq!(best.tour_id, 2);
        assert_eq!(best.position, Some(2));
    }

    #[test]
    fn best_standing_is_none_without_positions() {
        assert!(best_standing(vec![standing(1, None, 10.0)]).is_none());
        assert!(best_standing(Vec::new()).is_none());
    }
}
