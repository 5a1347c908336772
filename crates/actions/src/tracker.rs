use std::collections::HashMap;

use secrecy::SecretString;
use serde::Deserialize;
use serde_json::Value;

/// Conversation context as the dialogue framework sends it: the slots it
/// extracted plus whatever metadata it tracks. Only the fields the actions
/// read are modeled; the rest of the payload is ignored on deserialize.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Tracker {
    pub sender_id: String,
    pub slots: HashMap<String, Value>,
}

impl Tracker {
    /// A string slot, trimmed; blank and non-string slots read as absent.
    pub fn slot_text(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// The bearer credential the chat transport stashed in the `auth_token`
    /// slot. Forwarded verbatim; never validated or persisted here.
    pub fn auth_token(&self) -> Option<SecretString> {
        self.slot_text("auth_token").map(|token| SecretString::from(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;
    use serde_json::json;

    use super::Tracker;

    #[test]
    fn deserializes_from_framework_payload() {
        let tracker: Tracker = serde_json::from_value(json!({
            "sender_id": "user-7",
            "slots": { "student_body": "the sac", "auth_token": "tok-1" },
            "latest_message": { "text": "ignored here" },
        }))
        .expect("parse");

        assert_eq!(tracker.sender_id, "user-7");
        assert_eq!(tracker.slot_text("student_body"), Some("the sac"));
        assert_eq!(tracker.auth_token().expect("token").expose_secret(), "tok-1");
    }

    #[test]
    fn blank_and_non_string_slots_read_as_absent() {
        let tracker: Tracker = serde_json::from_value(json!({
            "slots": { "vertical": "   ", "campus_spot": 42, "auth_token": null },
        }))
        .expect("parse");

        assert_eq!(tracker.slot_text("vertical"), None);
        assert_eq!(tracker.slot_text("campus_spot"), None);
        assert!(tracker.auth_token().is_none());
    }
}
