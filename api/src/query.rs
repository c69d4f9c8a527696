use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::okapi::schemars::{self, JsonSchema};
use rocket_okapi::openapi;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde_json::{json, Value};

use service::dto::sgt::de;
use service::dto::StandingSide;
use service::error::GenericError;
use service::SgtClient;

/// The named actions the dashboard can ask for. Everything except
/// `registrations` is answered from the local mirror.
#[derive(Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Action {
    Members,
    Tours,
    TourStandings,
    TourMembers,
    Tournaments,
    Scorecards,
    Registrations,
    MemberStats,
    PlayerRounds,
}

/// Dashboard clients send parameters as strings, hence the lenient numbers.
#[derive(Deserialize, JsonSchema, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ActionParams {
    #[serde(default, deserialize_with = "de::flexible_int")]
    tour_id: Option<i32>,
    #[serde(default, deserialize_with = "de::flexible_int")]
    tournament_id: Option<i32>,
    #[serde(default, deserialize_with = "de::flexible_int")]
    user_id: Option<i32>,
    gross_or_net: Option<StandingSide>,
}

impl ActionParams {
    fn tour_id(&self) -> Result<i32, GenericError> {
        self.tour_id.ok_or(GenericError::BadRequest("tourId required"))
    }
    fn tournament_id(&self) -> Result<i32, GenericError> {
        self.tournament_id
            .ok_or(GenericError::BadRequest("tournamentId required"))
    }
    fn user_id(&self) -> Result<i32, GenericError> {
        self.user_id.ok_or(GenericError::BadRequest("userId required"))
    }
}

#[derive(Deserialize, JsonSchema, Debug)]
pub(crate) struct ActionRequest {
    action: Action,
    #[serde(default)]
    params: ActionParams,
}

#[openapi(tag = "Dashboard")]
#[post("/sgt", data = "<request>")]
pub(crate) async fn sgt_action(
    db: &State<DatabaseConnection>,
    sgt: &State<SgtClient>,
    request: Json<ActionRequest>,
) -> Result<Json<Value>, GenericError> {
    let ActionRequest { action, params } = request.into_inner();

    let data = match action {
        Action::Members => json!({ "members": service::get_members(db.inner()).await? }),
        Action::Tours => reply(service::get_tours(db.inner()).await?)?,
        Action::TourStandings => {
            let side = params.gross_or_net.unwrap_or(StandingSide::Gross);
            reply(service::get_tour_standings(db.inner(), params.tour_id()?, side).await?)?
        }
        Action::TourMembers => {
            reply(service::get_tour_members(db.inner(), params.tour_id()?).await?)?
        }
        Action::Tournaments => {
            json!({ "results": service::get_tournaments(db.inner(), params.tour_id()?).await? })
        }
        Action::Scorecards => {
            reply(service::get_scorecards(db.inner(), params.tournament_id()?).await?)?
        }
        Action::Registrations => {
            reply(sgt.fetch_registrations(params.tournament_id()?).await?)?
        }
        Action::MemberStats => {
            reply(service::get_member_stats(db.inner(), params.user_id()?).await?)?
        }
        Action::PlayerRounds => {
            reply(service::get_player_rounds(db.inner(), params.user_id()?).await?)?
        }
    };
    Ok(Json(data))
}

fn reply<T: serde::Serialize>(data: T) -> Result<Value, GenericError> {
    serde_json::to_value(data).map_err(|_| GenericError::UnknownError("Unable to serialise response"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_parse_from_kebab_case() {
        let request: ActionRequest = serde_json::from_str(
            r#"{ "action": "tour-standings", "params": { "tourId": "12", "grossOrNet": "net" } }"#,
        )
        .unwrap();
        assert_eq!(request.action, Action::TourStandings);
        assert_eq!(request.params.tour_id, Some(12));
        assert_eq!(request.params.gross_or_net, Some(StandingSide::Net));
    }

    #[test]
    fn params_default_to_empty() {
        let request: ActionRequest = serde_json::from_str(r#"{ "action": "members" }"#).unwrap();
        assert_eq!(request.action, Action::Members);
        assert!(request.params.tour_id.is_none());
        assert!(matches!(
            request.params.tour_id(),
            Err(GenericError::BadRequest("tourId required"))
        ));
    }

    #[test]
    fn unknown_actions_are_rejected() {
        assert!(serde_json::from_str::<ActionRequest>(r#"{ "action": "drop-tables" }"#).is_err());
    }
}
