//! Text renderers for portal resources.
//!
//! Output is plain text with the portal chat's light markdown conventions:
//! a bold header, a blank line, then numbered entries. Poll options are
//! indented with roman numerals. These strings are the bot's wire format,
//! so changes here are user-visible.

use serde_json::Value;

use crate::resources::{non_blank, Achievement, Event, Idea, Poll, Profile};

pub const EVENTS_EMPTY: &str = "No active events at the moment.";
pub const EVENTS_UNAVAILABLE: &str = "Sorry, I couldn't fetch events right now.";
pub const POLLS_EMPTY: &str = "No active polls available right now.";
pub const POLLS_UNAVAILABLE: &str = "Sorry, I couldn't fetch polls right now.";
pub const PROFILE_EMPTY: &str = "Profile not found or not logged in.";
pub const PROFILE_UNAVAILABLE: &str = "Sorry, I couldn't fetch your profile.";
pub const IDEAS_EMPTY: &str = "You have no idea submissions yet.";
pub const IDEAS_UNAVAILABLE: &str = "Sorry, I couldn't fetch your ideas.";
pub const ACHIEVEMENTS_EMPTY: &str = "No achievements submitted yet.";
pub const ACHIEVEMENTS_UNAVAILABLE: &str = "Sorry, I couldn't fetch your achievements.";

pub fn events_list(events: &[Event]) -> String {
    let mut lines = vec!["**Current/Ongoing Events:**".to_string(), String::new()];
    for (index, event) in events.iter().enumerate() {
        let mut when = non_blank(event.start_at.as_deref()).unwrap_or_default().to_string();
        if let Some(end_at) = non_blank(event.end_at.as_deref()) {
            when.push_str(&format!(" \u{2013} {end_at}"));
        }
        let location = non_blank(event.location.as_deref())
            .map(|location| format!(" @ {location}"))
            .unwrap_or_default();
        let title = non_blank(event.title.as_deref()).unwrap_or("Event");
        lines.push(format!("{}. **{title}** \u{2014} {when}{location}", index + 1));
    }
    lines.join("\n")
}

pub fn polls_list(polls: &[Poll]) -> String {
    let mut lines = vec!["**Active Polls:**".to_string(), String::new()];
    for (index, poll) in polls.iter().enumerate() {
        let title = non_blank(poll.title.as_deref()).unwrap_or("Poll");
        lines.push(format!("{}. **{title}**", index + 1));
        for (option_index, option) in poll.options.iter().enumerate() {
            let roman = to_roman(option_index + 1);
            let text = non_blank(option.text.as_deref()).unwrap_or("Option");
            lines.push(format!("   {roman}. {text}"));
        }
    }
    lines.join("\n")
}

pub fn profile_card(profile: &Profile) -> String {
    let user = &profile.user;
    let mut lines = vec![
        "**Your Profile**".to_string(),
        String::new(),
        format!("Name: **{}**", user.name.as_deref().unwrap_or_default()),
        format!("Email: {}", user.email.as_deref().unwrap_or_default()),
    ];

    let extras = [
        ("regdNo", user.regd_no.as_deref().map(str::to_string)),
        ("branch", user.branch.as_deref().map(str::to_string)),
        ("stream", user.stream.as_deref().map(str::to_string)),
        ("year", user.year.as_ref().and_then(value_text)),
    ];
    for (label, value) in extras {
        if let Some(value) = value.filter(|value| !value.trim().is_empty()) {
            lines.push(format!("{label}: {value}"));
        }
    }

    lines.join("\n")
}

pub fn ideas_list(ideas: &[Idea]) -> String {
    let mut lines = vec!["**Your Idea Submissions:**".to_string(), String::new()];
    for (index, idea) in ideas.iter().enumerate() {
        let status = non_blank(idea.data.status.as_deref()).unwrap_or("submitted");
        lines.push(format!(
            "{}. **{}** \u{2014} Status: {status}",
            index + 1,
            idea.data.display_title()
        ));
    }
    lines.join("\n")
}

pub fn achievements_list(achievements: &[Achievement]) -> String {
    let mut lines = vec!["**Your Achievements:**".to_string(), String::new()];
    for (index, achievement) in achievements.iter().enumerate() {
        let event_type = non_blank(achievement.event_type.as_deref()).unwrap_or_default();
        let when = non_blank(achievement.date_of_participation.as_deref()).unwrap_or_default();
        lines.push(format!(
            "{}. **{}** \u{2014} {event_type} {when}",
            index + 1,
            achievement.display_title()
        ));
    }
    lines.join("\n")
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn to_roman(n: usize) -> String {
    const NUMERALS: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];
    match n {
        1..=10 => NUMERALS[n - 1].to_string(),
        _ => n.to_string(),
    }
}
