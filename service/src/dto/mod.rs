pub mod sgt;

use chrono::{DateTime, FixedOffset, NaiveDate};
use rocket_okapi::okapi::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::Display;

use entity::sea_orm_active_enums;

/// Which leaderboard a standing row belongs to. SGT keeps separate gross and
/// net leaderboards per tour and selects between them with a `grossOrNet`
/// query parameter.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StandingSide {
    Gross,
    Net,
}

impl From<StandingSide> for sea_orm_active_enums::StandingSide {
    fn from(side: StandingSide) -> Self {
        match side {
            StandingSide::Gross => sea_orm_active_enums::StandingSide::Gross,
            StandingSide::Net => sea_orm_active_enums::StandingSide::Net,
        }
    }
}

impl From<sea_orm_active_enums::StandingSide> for StandingSide {
    fn from(side: sea_orm_active_enums::StandingSide) -> Self {
        match side {
            sea_orm_active_enums::StandingSide::Gross => StandingSide::Gross,
            sea_orm_active_enums::StandingSide::Net => StandingSide::Net,
        }
    }
}

/// Club member as shown to other members. Email addresses stay private to the
/// sync store and are never serialised here.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub user_id: i32,
    pub user_name: String,
    pub active: bool,
    pub country_code: Option<String>,
    pub has_avatar: Option<String>,
    pub game_id: Option<String>,
}

impl From<entity::member::Model> for Member {
    fn from(model: entity::member::Model) -> Self {
        Self {
            user_id: model.user_id,
            user_name: model.user_name,
            active: model.active,
            country_code: model.country_code,
            has_avatar: model.has_avatar,
            game_id: model.game_id,
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub tour_id: i32,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub team_tour: bool,
    pub active: bool,
}

impl From<entity::tour::Model> for Tour {
    fn from(model: entity::tour::Model) -> Self {
        Self {
            tour_id: model.tour_id,
            name: model.name,
            start_date: model.start_date,
            end_date: model.end_date,
            team_tour: model.team_tour,
            active: model.active,
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TourStanding {
    pub position: Option<i32>,
    pub user_name: String,
    pub country_code: Option<String>,
    pub has_avatar: Option<String>,
    pub hcp: Option<f64>,
    pub events: i32,
    pub wins: i32,
    pub top5: i32,
    pub top10: i32,
    pub points: f64,
}

impl From<entity::tour_standing::Model> for TourStanding {
    fn from(model: entity::tour_standing::Model) -> Self {
        Self {
            position: model.position,
            user_name: model.user_name,
            country_code: model.country_code,
            has_avatar: model.has_avatar,
            hcp: model.hcp,
            events: model.events,
            wins: model.wins,
            top5: model.top5,
            top10: model.top10,
            points: model.points,
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TourMember {
    pub user_id: i32,
    pub user_name: String,
    pub hcp_index: Option<f64>,
    pub custom_hcp: Option<f64>,
}

impl From<entity::tour_member::Model> for TourMember {
    fn from(model: entity::tour_member::Model) -> Self {
        Self {
            user_id: model.user_id,
            user_name: model.user_name,
            hcp_index: model.hcp_index,
            custom_hcp: model.custom_hcp,
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub tournament_id: i32,
    pub tour_id: i32,
    pub name: String,
    pub course_name: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl From<entity::tournament::Model> for Tournament {
    fn from(model: entity::tournament::Model) -> Self {
        Self {
            tournament_id: model.tournament_id,
            tour_id: model.tour_id,
            name: model.name,
            course_name: model.course_name,
            status: model.status,
            start_date: model.start_date,
            end_date: model.end_date,
        }
    }
}

/// One player's card for one round, hole blob included under `holes`.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    pub tournament_id: i32,
    pub player_id: i32,
    pub player_name: Option<String>,
    pub hcp_index: Option<f64>,
    pub round: i32,
    pub course_name: Option<String>,
    pub teetype: Option<String>,
    pub rating: Option<f64>,
    pub slope: Option<i32>,
    pub total_gross: Option<i32>,
    pub total_net: Option<f64>,
    pub to_par_gross: Option<i32>,
    pub to_par_net: Option<f64>,
    pub in_gross: Option<i32>,
    pub out_gross: Option<i32>,
    pub in_net: Option<f64>,
    pub out_net: Option<f64>,
    pub holes: Map<String, Value>,
}

impl From<entity::scorecard::Model> for Scorecard {
    fn from(model: entity::scorecard::Model) -> Self {
        let holes = match model.hole_data {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            tournament_id: model.tournament_id,
            player_id: model.player_id,
            player_name: model.player_name,
            hcp_index: model.hcp_index,
            round: model.round,
            course_name: model.course_name,
            teetype: model.teetype,
            rating: model.rating,
            slope: model.slope,
            total_gross: model.total_gross,
            total_net: model.total_net,
            to_par_gross: model.to_par_gross,
            to_par_net: model.to_par_net,
            in_gross: model.in_gross,
            out_gross: model.out_gross,
            in_net: model.in_net,
            out_net: model.out_net,
            holes,
        }
    }
}

/// A round as listed on the member dashboard: the scorecard plus the
/// tournament it was played in.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRound {
    pub tournament_id: i32,
    pub tournament_name: String,
    pub course_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
    pub scorecard: Scorecard,
}

impl PlayerRound {
    pub(crate) fn from_parts(
        tournament: &entity::tournament::Model,
        card: entity::scorecard::Model,
    ) -> Self {
        let scorecard = Scorecard::from(card);
        Self {
            tournament_id: tournament.tournament_id,
            tournament_name: tournament.name.clone(),
            course_name: scorecard
                .course_name
                .clone()
                .or_else(|| tournament.course_name.clone()),
            date: tournament.end_date,
            status: tournament.status.clone(),
            scorecard,
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TourHandicap {
    pub tour_id: i32,
    pub tour_name: String,
    pub handicap: f64,
    pub custom_handicap: f64,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StandingSummary {
    pub tour_id: i32,
    pub position: Option<i32>,
    pub points: f64,
    pub wins: i32,
    pub top5: i32,
    pub top10: i32,
    pub events: i32,
}

impl From<entity::tour_standing::Model> for StandingSummary {
    fn from(model: entity::tour_standing::Model) -> Self {
        Self {
            tour_id: model.tour_id,
            position: model.position,
            points: model.points,
            wins: model.wins,
            top5: model.top5,
            top10: model.top10,
            events: model.events,
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub tours: Vec<TourHandicap>,
    pub handicap: Option<f64>,
    pub total_rounds: i64,
    pub standing: Option<StandingSummary>,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Running,
    Completed,
    Failed,
}

impl From<sea_orm_active_enums::SyncStatus> for SyncStatus {
    fn from(status: sea_orm_active_enums::SyncStatus) -> Self {
        match status {
            sea_orm_active_enums::SyncStatus::Running => SyncStatus::Running,
            sea_orm_active_enums::SyncStatus::Completed => SyncStatus::Completed,
            sea_orm_active_enums::SyncStatus::Failed => SyncStatus::Failed,
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SyncLogEntry {
    pub id: i32,
    pub sync_type: String,
    pub status: SyncStatus,
    pub started_at: DateTime<FixedOffset>,
    pub completed_at: Option<DateTime<FixedOffset>>,
    pub records_synced: Option<i32>,
    pub error_message: Option<String>,
}

impl From<entity::sync_log::Model> for SyncLogEntry {
    fn from(model: entity::sync_log::Model) -> Self {
        Self {
            id: model.id,
            sync_type: model.sync_type,
            status: model.status.into(),
            started_at: model.started_at,
            completed_at: model.completed_at,
            records_synced: model.records_synced,
            error_message: model.error_message,
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOutcome {
    pub success: bool,
    pub records: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn tournament() -> entity::tournament::Model {
        entity::tournament::Model {
            tournament_id: 301,
            tour_id: 5,
            name: "Tuesday Night Open".to_string(),
            course_name: Some("Pebble Beach".to_string()),
            status: Some("Completed".to_string()),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 4),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 4),
            updated_at: Utc::now().fixed_offset(),
        }
    }

    fn scorecard(course_name: Option<&str>) -> entity::scorecard::Model {
        entity::scorecard::Model {
            id: 1,
            tournament_id: 301,
            player_id: 42,
            player_name: Some("Sam Snead".to_string()),
            hcp_index: Some(10.2),
            round: 1,
            course_name: course_name.map(str::to_string),
            teetype: Some("white".to_string()),
            rating: Some(71.3),
            slope: Some(128),
            total_gross: Some(82),
            total_net: Some(71.8),
            to_par_gross: Some(10),
            to_par_net: Some(-0.2),
            in_gross: Some(40),
            out_gross: Some(42),
            in_net: Some(35.1),
            out_net: Some(36.7),
            hole_data: serde_json::json!({ "h1": 5, "h2": 4 }),
            updated_at: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn scorecard_serialises_camel_case_with_holes() {
        let value = serde_json::to_value(Scorecard::from(scorecard(Some("Pebble Beach")))).unwrap();
        assert_eq!(value["playerId"], 42);
        assert_eq!(value["totalGross"], 82);
        assert_eq!(value["toParNet"], -0.2);
        assert_eq!(value["holes"]["h1"], 5);
        assert!(value.get("id").is_none());
    }

    #[test]
    fn player_round_falls_back_to_tournament_course() {
        let round = PlayerRound::from_parts(&tournament(), scorecard(None));
        assert_eq!(round.course_name.as_deref(), Some("Pebble Beach"));
        assert_eq!(round.date, NaiveDate::from_ymd_opt(2025, 3, 4));

        let round = PlayerRound::from_parts(&tournament(), scorecard(Some("Old Course")));
        assert_eq!(round.course_name.as_deref(), Some("Old Course"));
    }

    #[test]
    fn member_view_has_no_email() {
        let member = entity::member::Model {
            user_id: 7,
            user_name: "kim".to_string(),
            email: Some("kim@example.com".to_string()),
            active: true,
            country_code: Some("AU".to_string()),
            has_avatar: None,
            game_id: None,
            updated_at: Utc::now().fixed_offset(),
        };
        let value = serde_json::to_value(Member::from(member)).unwrap();
        assert_eq!(value["userName"], "kim");
        assert!(value.get("email").is_none());
    }

    #[test]
    fn standing_side_round_trips_as_lowercase() {
        assert_eq!(StandingSide::Gross.to_string(), "gross");
        let side: StandingSide = serde_json::from_str("\"net\"").unwrap();
        assert_eq!(side, StandingSide::Net);
    }
}
