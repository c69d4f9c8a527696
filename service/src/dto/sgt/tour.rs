use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::Deserialize;

use crate::dto::StandingSide;

use super::de::{flexible_float, flexible_int, opt_bool};
use super::parse_date;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiTour {
    #[serde(rename = "tourId")]
    pub tour_id: i32,
    pub name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(rename = "teamTour", default, deserialize_with = "opt_bool")]
    pub team_tour: Option<bool>,
    #[serde(default, deserialize_with = "opt_bool")]
    pub active: Option<bool>,
}

impl ApiTour {
    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(true)
    }

    pub(crate) fn active_model(&self) -> entity::tour::ActiveModel {
        entity::tour::ActiveModel {
            tour_id: Set(self.tour_id),
            name: Set(self.name.clone()),
            start_date: Set(parse_date(self.start_date.as_deref())),
            end_date: Set(parse_date(self.end_date.as_deref())),
            team_tour: Set(self.team_tour.unwrap_or(false)),
            active: Set(self.is_active()),
            updated_at: Set(Utc::now().fixed_offset()),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiStanding {
    pub user_name: String,
    pub country_code: Option<String>,
    pub user_has_avatar: Option<String>,
    #[serde(default, deserialize_with = "flexible_float")]
    pub hcp: Option<f64>,
    #[serde(default, deserialize_with = "flexible_int")]
    pub events: Option<i32>,
    #[serde(default, deserialize_with = "flexible_int")]
    pub first: Option<i32>,
    #[serde(default, deserialize_with = "flexible_int")]
    pub top5: Option<i32>,
    #[serde(default, deserialize_with = "flexible_int")]
    pub top10: Option<i32>,
    #[serde(default, deserialize_with = "flexible_float")]
    pub points: Option<f64>,
    #[serde(default, deserialize_with = "flexible_int")]
    pub position: Option<i32>,
}

impl ApiStanding {
    pub(crate) fn active_model(
        &self,
        tour_id: i32,
        side: StandingSide,
    ) -> entity::tour_standing::ActiveModel {
        entity::tour_standing::ActiveModel {
            id: NotSet,
            tour_id: Set(tour_id),
            user_name: Set(self.user_name.clone()),
            side: Set(side.into()),
            country_code: Set(self.country_code.clone()),
            has_avatar: Set(self.user_has_avatar.clone()),
            hcp: Set(self.hcp),
            events: Set(self.events.unwrap_or(0)),
            wins: Set(self.first.unwrap_or(0)),
            top5: Set(self.top5.unwrap_or(0)),
            top10: Set(self.top10.unwrap_or(0)),
            points: Set(self.points.unwrap_or(0.0)),
            position: Set(self.position),
            updated_at: Set(Utc::now().fixed_offset()),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiTourMember {
    pub user_id: i32,
    pub user_name: String,
    #[serde(default, deserialize_with = "flexible_float")]
    pub hcp_index: Option<f64>,
    #[serde(default, deserialize_with = "flexible_float")]
    pub custom_hcp: Option<f64>,
}

impl ApiTourMember {
    pub(crate) fn active_model(&self, tour_id: i32) -> entity::tour_member::ActiveModel {
        entity::tour_member::ActiveModel {
            id: NotSet,
            tour_id: Set(tour_id),
            user_id: Set(self.user_id),
            user_name: Set(self.user_name.clone()),
            hcp_index: Set(self.hcp_index),
            custom_hcp: Set(self.custom_hcp),
            updated_at: Set(Utc::now().fixed_offset()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tour_and_dates() {
        let tour: ApiTour = serde_json::from_str(
            r#"{
                "tourId": 12,
                "name": "Summer Series",
                "start_date": "2025-01-06",
                "end_date": "2025-04-28",
                "teamTour": 0,
                "active": 1
            }"#,
        )
        .unwrap();
        assert!(tour.is_active());
        let model = tour.active_model();
        assert_eq!(
            model.start_date,
            Set(chrono::NaiveDate::from_ymd_opt(2025, 1, 6))
        );
        assert_eq!(model.team_tour, Set(false));
    }

    #[test]
    fn standing_counts_accept_strings_and_default_to_zero() {
        let standing: ApiStanding = serde_json::from_str(
            r#"{
                "user_name": "Greg Norman",
                "hcp": "4.1",
                "events": "7",
                "first": 2,
                "points": "310.5",
                "position": 1
            }"#,
        )
        .unwrap();
        let model = standing.active_model(12, StandingSide::Gross);
        assert_eq!(model.events, Set(7));
        assert_eq!(model.wins, Set(2));
        assert_eq!(model.top5, Set(0));
        assert_eq!(model.points, Set(310.5));
        assert_eq!(
            model.side,
            Set(entity::sea_orm_active_enums::StandingSide::Gross)
        );
    }
}
