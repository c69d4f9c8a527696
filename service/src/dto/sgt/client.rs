use chrono::{DateTime, Duration, Utc};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::config::SgtConfig;
use crate::dto::StandingSide;
use crate::error::GenericError;

use super::{ApiMember, ApiScorecard, ApiStanding, ApiTour, ApiTourMember, ApiTournament};

/// Keys stay cached only while they remain valid for at least this long.
const KEY_EXPIRY_MARGIN_SECS: i64 = 300;
/// Body SGT sends (as a bare JSON string) when a key has been revoked.
const INVALID_KEY_SENTINEL: &str = "INVALID API KEY";

#[derive(Deserialize, Debug)]
struct ApiKeyResponse {
    #[serde(default)]
    success: bool,
    key: Option<String>,
    #[serde(default)]
    expires: i64,
}

#[derive(Debug, Clone)]
struct CachedKey {
    key: String,
    expires_at: DateTime<Utc>,
}

impl CachedKey {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now + Duration::seconds(KEY_EXPIRY_MARGIN_SECS)
    }
}

/// Client for the SGT club-admin API with an in-process api-key cache.
pub struct SgtClient {
    http: reqwest::Client,
    config: SgtConfig,
    key: Mutex<Option<CachedKey>>,
}

impl SgtClient {
    pub fn new(config: SgtConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            key: Mutex::new(None),
        }
    }

    pub fn from_env() -> Result<Self, GenericError> {
        Ok(Self::new(SgtConfig::from_env()?))
    }

    async fn api_key(&self) -> Result<String, GenericError> {
        let mut cached = self.key.lock().await;
        let now = Utc::now();
        if let Some(key) = cached.as_ref() {
            if key.is_fresh(now) {
                return Ok(key.key.clone());
            }
        }

        info!("requesting new SGT api key");
        let response: ApiKeyResponse = self
            .http
            .post(self.config.endpoint_url("/apikey/create"))
            .form(&[
                ("username", self.config.username.as_str()),
                ("password", self.config.password.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!("SGT api key request failed: {e}");
                GenericError::SgtUnavailable("Unable to reach SGT while requesting an api key")
            })?
            .json()
            .await
            .map_err(|e| {
                warn!("SGT api key response was not valid json: {e}");
                GenericError::SgtMalformed("Unexpected response while requesting an api key")
            })?;

        let Some(key) = response.key.filter(|_| response.success) else {
            return Err(GenericError::SgtAuthFailed("Failed to authenticate with SGT"));
        };
        *cached = Some(CachedKey {
            key: key.clone(),
            expires_at: now + Duration::seconds(response.expires),
        });
        Ok(key)
    }

    async fn request(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value, GenericError> {
        let api_key = self.api_key().await?;
        let mut query: Vec<(&str, String)> = vec![("api-key", api_key)];
        query.extend(params.iter().map(|(name, value)| (*name, value.clone())));

        let response = self
            .http
            .get(self.config.endpoint_url(endpoint))
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                warn!("SGT request to {endpoint} failed: {e}");
                GenericError::SgtUnavailable("Unable to reach SGT")
            })?;

        if !response.status().is_success() {
            warn!("SGT request to {} returned {}", endpoint, response.status());
            return Err(GenericError::SgtUnavailable("SGT returned an error status"));
        }

        let body: Value = response.json().await.map_err(|e| {
            warn!("SGT response from {endpoint} was not valid json: {e}");
            GenericError::SgtMalformed("SGT returned a response that could not be parsed")
        })?;

        if body.as_str() == Some(INVALID_KEY_SENTINEL) {
            self.key.lock().await.take();
            return Err(GenericError::SgtAuthFailed("SGT rejected the cached api key"));
        }

        Ok(body)
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        keys: &[&str],
    ) -> Result<Vec<T>, GenericError> {
        let body = self.request(endpoint, params).await?;
        Ok(unwrap_list(body, keys)
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<T>(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("skipping malformed SGT record from {endpoint}: {e}");
                    None
                }
            })
            .collect())
    }

    pub async fn fetch_members(&self) -> Result<Vec<ApiMember>, GenericError> {
        self.fetch_list("/members/list", &[], &["members", "results"]).await
    }

    pub async fn fetch_tours(&self) -> Result<Vec<ApiTour>, GenericError> {
        self.fetch_list("/tours/list", &[], &["tours", "results"]).await
    }

    pub async fn fetch_tour_standings(
        &self,
        tour_id: i32,
        side: StandingSide,
    ) -> Result<Vec<ApiStanding>, GenericError> {
        self.fetch_list(
            "/tours/standings",
            &[
                ("tourId", tour_id.to_string()),
                ("grossOrNet", side.to_string()),
            ],
            &["standings", "results"],
        )
        .await
    }

    pub async fn fetch_tour_members(&self, tour_id: i32) -> Result<Vec<ApiTourMember>, GenericError> {
        self.fetch_list(
            "/tours/members",
            &[("tourId", tour_id.to_string())],
            &["members", "results"],
        )
        .await
    }

    pub async fn fetch_tournaments(&self, tour_id: i32) -> Result<Vec<ApiTournament>, GenericError> {
        self.fetch_list(
            "/tournaments/list",
            &[("tourId", tour_id.to_string())],
            &["results", "tournaments"],
        )
        .await
    }

    pub async fn fetch_scorecards(&self, tournament_id: i32) -> Result<Vec<ApiScorecard>, GenericError> {
        self.fetch_list(
            "/tournaments/scorecards",
            &[("tournamentId", tournament_id.to_string())],
            &["scorecards", "results"],
        )
        .await
    }

    /// Registrations are not mirrored locally, callers get the raw records.
    pub async fn fetch_registrations(&self, tournament_id: i32) -> Result<Vec<Value>, GenericError> {
        let body = self
            .request(
                "/registrations/view",
                &[("tournamentId", tournament_id.to_string())],
            )
            .await?;
        Ok(unwrap_list(body, &["registrations", "results"]))
    }
}

/// SGT list endpoints answer either with a bare array or with the array
/// wrapped under one of a few envelope keys.
fn unwrap_list(body: Value, keys: &[&str]) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            for key in keys {
                if let Some(Value::Array(items)) = map.remove(*key) {
                    return items;
                }
            }
            let shape: String = Value::Object(map).to_string().chars().take(500).collect();
            warn!("unexpected SGT response shape: {shape}");
            Vec::new()
        }
        other => {
            warn!("unexpected SGT response shape: {other}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwrap_list_takes_bare_arrays() {
        let items = unwrap_list(json!([{ "a": 1 }, { "a": 2 }]), &["results"]);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn unwrap_list_tries_envelope_keys_in_order() {
        let body = json!({ "count": 1, "results": [{ "a": 1 }] });
        let items = unwrap_list(body, &["members", "results"]);
        assert_eq!(items, vec![json!({ "a": 1 })]);
    }

    #[test]
    fn unwrap_list_falls_back_to_empty() {
        assert!(unwrap_list(json!({ "message": "nope" }), &["results"]).is_empty());
        assert!(unwrap_list(json!("INVALID API KEY"), &["results"]).is_empty());
    }

    #[test]
    fn cached_key_respects_expiry_margin() {
        let now = Utc::now();
        let fresh = CachedKey {
            key: "k".to_string(),
            expires_at: now + Duration::seconds(KEY_EXPIRY_MARGIN_SECS + 60),
        };
        assert!(fresh.is_fresh(now));

        let nearly_expired = CachedKey {
            key: "k".to_string(),
            expires_at: now + Duration::seconds(KEY_EXPIRY_MARGIN_SECS - 60),
        };
        assert!(!nearly_expired.is_fresh(now));
    }
}
