use chrono::Utc;
use sea_orm::ActiveValue::Set;
use serde::Deserialize;

use super::de::opt_bool;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiMember {
    pub user_id: i32,
    pub user_name: String,
    pub user_email: Option<String>,
    #[serde(default, deserialize_with = "opt_bool")]
    pub user_active: Option<bool>,
    pub user_country_code: Option<String>,
    pub user_has_avatar: Option<String>,
    pub user_game_id: Option<String>,
}

impl ApiMember {
    pub(crate) fn active_model(&self) -> entity::member::ActiveModel {
        entity::member::ActiveModel {
            user_id: Set(self.user_id),
            user_name: Set(self.user_name.clone()),
            email: Set(self.user_email.clone()),
            active: Set(self.user_active.unwrap_or(true)),
            country_code: Set(self.user_country_code.clone()),
            has_avatar: Set(self.user_has_avatar.clone()),
            game_id: Set(self.user_game_id.clone()),
            updated_at: Set(Utc::now().fixed_offset()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_member_with_integer_active_flag() {
        let member: ApiMember = serde_json::from_str(
            r#"{
                "user_id": 1204,
                "user_name": "Greg Norman",
                "user_email": "greg@example.com",
                "user_active": 1,
                "user_country_code": "AU",
                "user_has_avatar": "yes",
                "user_game_id": "GSPro-1204"
            }"#,
        )
        .unwrap();
        assert_eq!(member.user_id, 1204);
        assert_eq!(member.user_active, Some(true));
    }

    #[test]
    fn missing_active_flag_defaults_to_active_in_model() {
        let member: ApiMember =
            serde_json::from_str(r#"{ "user_id": 9, "user_name": "anon" }"#).unwrap();
        assert_eq!(member.user_active, None);
        let model = member.active_model();
        assert_eq!(model.active, Set(true));
    }
}
