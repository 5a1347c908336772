//! Externally-owned portal records, deserialized leniently.
//!
//! The backend owns these shapes; every field the formatters touch is
//! optional with a rendered default, so a missing or extra field never
//! breaks a reply.

use serde::Deserialize;
use serde_json::Value;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    pub title: Option<String>,
    pub start_at: Option<String>,
    pub end_at: Option<String>,
    pub location: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Poll {
    pub title: Option<String>,
    pub options: Vec<PollOption>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PollOption {
    pub text: Option<String>,
}

/// `/me/profile` wraps the user record in a `user` envelope.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Profile {
    pub user: ProfileUser,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub regd_no: Option<String>,
    pub branch: Option<String>,
    pub stream: Option<String>,
    // The backend sends year as either a number or a string.
    pub year: Option<Value>,
}

/// Idea submissions nest their user-entered fields under `data`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Idea {
    pub data: IdeaData,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct IdeaData {
    pub title: Option<String>,
    pub idea_title: Option<String>,
    pub status: Option<String>,
}

impl IdeaData {
    /// Older submissions used `ideaTitle`; newer ones use `title`.
    pub fn display_title(&self) -> &str {
        non_blank(self.title.as_deref())
            .or_else(|| non_blank(self.idea_title.as_deref()))
            .unwrap_or("Idea")
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Achievement {
    pub event_name: Option<String>,
    pub title: Option<String>,
    pub event_type: Option<String>,
    pub date_of_participation: Option<String>,
}

impl Achievement {
    pub fn display_title(&self) -> &str {
        non_blank(self.event_name.as_deref())
            .or_else(|| non_blank(self.title.as_deref()))
            .unwrap_or("Achievement")
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Achievement, Event, Idea};

    #[test]
    fn event_tolerates_missing_and_extra_fields() {
        let event: Event =
            serde_json::from_value(json!({ "title": "Fest", "judge": "ignored" })).expect("parse");
        assert_eq!(event.title.as_deref(), Some("Fest"));
        assert!(event.start_at.is_none());
    }

    #[test]
    fn idea_title_falls_back_through_legacy_field() {
        let legacy: Idea =
            serde_json::from_value(json!({ "data": { "ideaTitle": "Solar bikes" } })).expect("parse");
        assert_eq!(legacy.data.display_title(), "Solar bikes");

        let untitled: Idea = serde_json::from_value(json!({ "data": {} })).expect("parse");
        assert_eq!(untitled.data.display_title(), "Idea");
    }

    #[test]
    fn achievement_title_prefers_event_name() {
        let achievement: Achievement = serde_json::from_value(json!({
            "eventName": "Hackathon",
            "title": "fallback",
        }))
        .expect("parse");
        assert_eq!(achievement.display_title(), "Hackathon");
    }
}
