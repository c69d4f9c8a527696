extern crate rocket;
use rocket::async_test;

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{NaiveDate, Utc};
    use rocket::http::Status;
    use rocket::local::asynchronous::Client;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
    use serde_json::{json, Value};
    use service::{SgtClient, SgtConfig};

    fn sgt_client() -> SgtClient {
        SgtClient::new(SgtConfig {
            base_url: "http://localhost:9".to_string(),
            club: "testclub".to_string(),
            username: "test_user".to_string(),
            password: "test_password".to_string(),
        })
    }

    async fn client_over(db: DatabaseConnection) -> Client {
        let rocket = rocket::build()
            .manage(db)
            .manage(sgt_client())
            .mount("/", api::routes());
        Client::tracked(rocket).await.expect("valid rocket instance")
    }

    fn tour(tour_id: i32, name: &str, active: bool) -> entity::tour::Model {
        entity::tour::Model {
            tour_id,
            name: name.to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 6),
            end_date: NaiveDate::from_ymd_opt(2025, 4, 28),
            team_tour: false,
            active,
            updated_at: Utc::now().fixed_offset(),
        }
    }

    fn scorecard(player_id: i32, total_gross: i32) -> entity::scorecard::Model {
        entity::scorecard::Model {
            id: player_id,
            tournament_id: 301,
            player_id,
            player_name: Some("Sam Snead".to_string()),
            hcp_index: Some(10.2),
            round: 1,
            course_name: Some("Pebble Beach".to_string()),
            teetype: Some("white".to_string()),
            rating: Some(71.3),
            slope: Some(128),
            total_gross: Some(total_gross),
            total_net: Some(71.8),
            to_par_gross: Some(10),
            to_par_net: Some(-0.2),
            in_gross: Some(40),
            out_gross: Some(42),
            in_net: Some(35.1),
            out_net: Some(36.7),
            hole_data: json!({ "h1": 5, "h2": 4 }),
            updated_at: Utc::now().fixed_offset(),
        }
    }

    #[async_test]
    async fn tours_action_lists_mirrored_tours() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![tour(5, "Summer Series", true), tour(6, "Winter Series", false)]])
            .into_connection();
        let client = client_over(db).await;

        let response = client
            .post("/sgt")
            .json(&json!({ "action": "tours" }))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let body: Value = response.into_json().await.expect("json body");
        let tours = body.as_array().expect("bare array");
        assert_eq!(tours.len(), 2);
        assert_eq!(tours[0]["tourId"], 5);
        assert_eq!(tours[0]["name"], "Summer Series");
        assert_eq!(tours[1]["active"], false);
    }

    #[async_test]
    async fn scorecards_action_reshapes_hole_data() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![scorecard(42, 82), scorecard(43, 90)]])
            .into_connection();
        let client = client_over(db).await;

        let response = client
            .post("/sgt")
            .json(&json!({ "action": "scorecards", "params": { "tournamentId": "301" } }))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let body: Value = response.into_json().await.expect("json body");
        let cards = body.as_array().expect("bare array");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0]["playerId"], 42);
        assert_eq!(cards[0]["totalGross"], 82);
        assert_eq!(cards[0]["holes"]["h1"], 5);
        assert!(cards[0].get("id").is_none());
    }

    #[async_test]
    async fn standings_action_requires_tour_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let client = client_over(db).await;

        let response = client
            .post("/sgt")
            .json(&json!({ "action": "tour-standings" }))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(response.into_string().await.unwrap(), "tourId required");
    }

    #[async_test]
    async fn members_action_wraps_and_hides_emails() {
        let member = entity::member::Model {
            user_id: 1204,
            user_name: "Greg Norman".to_string(),
            email: Some("greg@example.com".to_string()),
            active: true,
            country_code: Some("AU".to_string()),
            has_avatar: None,
            game_id: None,
            updated_at: Utc::now().fixed_offset(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![member]])
            .into_connection();
        let client = client_over(db).await;

        let response = client
            .post("/sgt")
            .json(&json!({ "action": "members" }))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let body: Value = response.into_json().await.expect("json body");
        let members = body["members"].as_array().expect("members envelope");
        assert_eq!(members[0]["userId"], 1204);
        assert!(members[0].get("email").is_none());
    }

    #[async_test]
    async fn sync_log_lists_recent_runs() {
        let entry = entity::sync_log::Model {
            id: 1,
            sync_type: "full".to_string(),
            status: entity::sea_orm_active_enums::SyncStatus::Completed,
            started_at: Utc::now().fixed_offset(),
            completed_at: Some(Utc::now().fixed_offset()),
            records_synced: Some(118),
            error_message: None,
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![entry]])
            .into_connection();
        let client = client_over(db).await;

        let response = client.get("/sync/log").dispatch().await;
        assert_eq!(response.status(), Status::Ok);

        let body: Value = response.into_json().await.expect("json body");
        assert_eq!(body[0]["status"], "completed");
        assert_eq!(body[0]["recordsSynced"], 118);
    }
}
