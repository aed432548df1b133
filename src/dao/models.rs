use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::game::ScoreCounts;

/// Body of the remote `updatePoints` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreUpdateEntity {
    /// Player identifier as issued by the backend.
    #[serde(rename = "_id")]
    pub id: String,
    /// Cumulative correct presses.
    pub points: u64,
    /// Cumulative presses; the backend calls this `clicked`.
    #[serde(rename = "clicked")]
    pub attempts: u64,
}

impl ScoreUpdateEntity {
    /// Build the payload for `identity` from local counts.
    pub fn new(identity: impl Into<String>, counts: ScoreCounts) -> Self {
        Self {
            id: identity.into(),
            points: counts.points,
            attempts: counts.attempts,
        }
    }

    /// Counts carried by the payload.
    pub fn counts(&self) -> ScoreCounts {
        ScoreCounts::new(self.points, self.attempts)
    }
}

/// Cached player profile, as stored next to the bearer token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileEntity {
    /// Player identifier.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Cumulative correct presses.
    #[serde(default)]
    pub points: u64,
    /// Cumulative presses.
    #[serde(rename = "clicked", default)]
    pub attempts: u64,
    /// Profile fields the game does not interpret (name, email, role...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// On-disk session cache document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionDocument {
    /// Bearer credential.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Cached profile of the logged in player.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<ProfileEntity>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn update_payload_uses_backend_field_names() {
        let payload = ScoreUpdateEntity::new("abc123", ScoreCounts::new(10, 12));
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({"_id": "abc123", "points": 10, "clicked": 12}));
    }

    #[test]
    fn profile_keeps_unknown_fields() {
        let raw = json!({
            "_id": "u1",
            "userName": "mop",
            "points": 3,
            "clicked": 4,
            "role": "user"
        });
        let profile: ProfileEntity = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(profile.id.as_deref(), Some("u1"));
        assert_eq!(profile.attempts, 4);
        assert_eq!(profile.extra.get("userName"), Some(&json!("mop")));

        assert_eq!(serde_json::to_value(&profile).unwrap(), raw);
    }

    #[test]
    fn profile_without_clicked_defaults_to_zero() {
        let profile: ProfileEntity =
            serde_json::from_value(json!({"_id": "u1", "points": 2})).unwrap();
        assert_eq!(profile.attempts, 0);
    }
}
