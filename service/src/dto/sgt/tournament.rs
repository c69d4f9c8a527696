use std::collections::HashMap;

use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::de::{flexible_float, flexible_int};
use super::parse_date;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiTournament {
    #[serde(rename = "tournamentId")]
    pub tournament_id: i32,
    pub name: String,
    #[serde(rename = "courseName")]
    pub course_name: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ApiTournament {
    pub(crate) fn active_model(&self, tour_id: i32) -> entity::tournament::ActiveModel {
        entity::tournament::ActiveModel {
            tournament_id: Set(self.tournament_id),
            tour_id: Set(tour_id),
            name: Set(self.name.clone()),
            course_name: Set(self.course_name.clone()),
            status: Set(self.status.clone()),
            start_date: Set(parse_date(self.start_date.as_deref())),
            end_date: Set(parse_date(self.end_date.as_deref())),
            updated_at: Set(Utc::now().fixed_offset()),
        }
    }
}

/// A scorecard record. The typed fields are the aggregates the dashboard
/// needs; everything hole-shaped (`h1`, `h2`, ..., `h10_net`, ...) lands in
/// `extra` and is kept as an opaque JSON blob.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiScorecard {
    #[serde(rename = "playerId")]
    pub player_id: i32,
    pub player_name: Option<String>,
    #[serde(default, deserialize_with = "flexible_float")]
    pub hcp_index: Option<f64>,
    #[serde(default, deserialize_with = "flexible_int")]
    pub round: Option<i32>,
    #[serde(rename = "courseName")]
    pub course_name: Option<String>,
    pub teetype: Option<String>,
    #[serde(default, deserialize_with = "flexible_float")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "flexible_int")]
    pub slope: Option<i32>,
    #[serde(default, deserialize_with = "flexible_int")]
    pub total_gross: Option<i32>,
    #[serde(default, deserialize_with = "flexible_float")]
    pub total_net: Option<f64>,
    #[serde(rename = "toPar_gross", default, deserialize_with = "flexible_int")]
    pub to_par_gross: Option<i32>,
    #[serde(rename = "toPar_net", default, deserialize_with = "flexible_float")]
    pub to_par_net: Option<f64>,
    #[serde(default, deserialize_with = "flexible_int")]
    pub in_gross: Option<i32>,
    #[serde(default, deserialize_with = "flexible_int")]
    pub out_gross: Option<i32>,
    #[serde(default, deserialize_with = "flexible_float")]
    pub in_net: Option<f64>,
    #[serde(default, deserialize_with = "flexible_float")]
    pub out_net: Option<f64>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

fn is_hole_key(key: &str) -> bool {
    let bytes = key.as_bytes();
    bytes.len() > 1 && bytes[0] == b'h' && bytes[1].is_ascii_digit()
}

impl ApiScorecard {
    /// The per-hole keys of the record, as stored in the mirror.
    pub fn hole_data(&self) -> Value {
        let holes: Map<String, Value> = self
            .extra
            .iter()
            .filter(|(key, _)| is_hole_key(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Value::Object(holes)
    }

    pub(crate) fn active_model(&self, tournament_id: i32) -> entity::scorecard::ActiveModel {
        entity::scorecard::ActiveModel {
            id: NotSet,
            tournament_id: Set(tournament_id),
            player_id: Set(self.player_id),
            player_name: Set(self.player_name.clone()),
            hcp_index: Set(self.hcp_index),
            round: Set(self.round.unwrap_or(1)),
            course_name: Set(self.course_name.clone()),
            teetype: Set(self.teetype.clone()),
            rating: Set(self.rating),
            slope: Set(self.slope),
            total_gross: Set(self.total_gross),
            total_net: Set(self.total_net),
            to_par_gross: Set(self.to_par_gross),
            to_par_net: Set(self.to_par_net),
            in_gross: Set(self.in_gross),
            out_gross: Set(self.out_gross),
            in_net: Set(self.in_net),
            out_net: Set(self.out_net),
            hole_data: Set(self.hole_data()),
            updated_at: Set(Utc::now().fixed_offset()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_scorecard_with_hole_keys_and_string_numbers() {
        let card: ApiScorecard = serde_json::from_value(json!({
            "playerId": 42,
            "player_name": "Sam Snead",
            "hcp_index": "10.2",
            "courseName": "Pebble Beach",
            "teetype": "white",
            "rating": 71.3,
            "slope": "128",
            "total_gross": 82,
            "total_net": "71.8",
            "toPar_gross": 10,
            "toPar_net": -0.2,
            "in_gross": 40,
            "out_gross": 42,
            "h1": 5,
            "h2": 4,
            "h1_net": 4,
            "holeinones": 0
        }))
        .unwrap();

        assert_eq!(card.round, None);
        assert_eq!(card.slope, Some(128));
        assert_eq!(card.total_net, Some(71.8));

        let holes = card.hole_data();
        assert_eq!(holes["h1"], 5);
        assert_eq!(holes["h1_net"], 4);
        assert!(holes.get("holeinones").is_none());

        let model = card.active_model(301);
        assert_eq!(model.round, Set(1));
        assert_eq!(model.tournament_id, Set(301));
    }

    #[test]
    fn tournament_keeps_free_text_status() {
        let tournament: ApiTournament = serde_json::from_value(json!({
            "tournamentId": 301,
            "name": "Tuesday Night Open",
            "courseName": "Pebble Beach",
            "status": "Completed",
            "start_date": "2025-03-04",
            "end_date": "2025-03-04"
        }))
        .unwrap();
        let model = tournament.active_model(12);
        assert_eq!(model.status, Set(Some("Completed".to_string())));
        assert_eq!(
            model.end_date,
            Set(chrono::NaiveDate::from_ymd_opt(2025, 3, 4))
        );
    }
}
