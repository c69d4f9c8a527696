use crate::error::GenericError;

pub const DEFAULT_BASE_URL: &str = "https://simulatorgolftour.com/sgt-api/club-admin";
const DEFAULT_CLUB: &str = "birdiesbayside";

/// Connection settings for the SGT club-admin API, read from the environment.
#[derive(Debug, Clone)]
pub struct SgtConfig {
    pub base_url: String,
    pub club: String,
    pub username: String,
    pub password: String,
}

impl SgtConfig {
    pub fn from_env() -> Result<Self, GenericError> {
        let username = std::env::var("SGT_USERNAME")
            .map_err(|_| GenericError::NotConfigured("SGT credentials not configured"))?;
        let password = std::env::var("SGT_PASSWORD")
            .map_err(|_| GenericError::NotConfigured("SGT credentials not configured"))?;
        Ok(Self {
            base_url: std::env::var("SGT_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            club: std::env::var("SGT_CLUB").unwrap_or_else(|_| DEFAULT_CLUB.to_string()),
            username,
            password,
        })
    }

    pub(crate) fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}{}", self.base_url, self.club, endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_includes_club() {
        let config = SgtConfig {
            base_url: "https://example.com/sgt-api/club-admin".to_string(),
            club: "testclub".to_string(),
            username: "user".to_string(),
            password: "pass".to_string(),
        };
        assert_eq!(
            config.endpoint_url("/members/list"),
            "https://example.com/sgt-api/club-admin/testclub/members/list"
        );
    }
}
