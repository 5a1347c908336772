//! The action-server webhook. One POST per action run; the body carries
//! the action name and a tracker snapshot, the reply carries events and
//! the collected bot messages.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use campusbot_actions::{ActionRegistry, BotMessage, CollectingDispatcher, EventPayload, Tracker};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;

/// What the user hears when an action itself fails. Portal trouble never
/// reaches this path; the actions fold that into their own texts.
const INTERNAL_FALLBACK: &str = "Sorry, something went wrong on my end. Please try again.";

#[derive(Debug, Deserialize)]
pub struct ActionRequest {
    pub next_action: String,
    #[serde(default)]
    pub tracker: Tracker,
}

#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub events: Vec<EventPayload>,
    pub responses: Vec<BotMessage>,
}

pub fn router(registry: Arc<ActionRegistry>) -> Router {
    Router::new().route("/webhook", post(dispatch)).with_state(registry)
}

pub async fn dispatch(
    State(registry): State<Arc<ActionRegistry>>,
    Json(request): Json<ActionRequest>,
) -> Result<Json<ActionResponse>, (StatusCode, Json<serde_json::Value>)> {
    let correlation_id = Uuid::new_v4().simple().to_string();

    let Some(action) = registry.get(&request.next_action) else {
        warn!(
            event_name = "webhook.unknown_action",
            correlation_id = %correlation_id,
            action = %request.next_action,
            "no registered action with that name"
        );
        return Err((
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": format!("no registered action named '{}'", request.next_action),
                "action_name": request.next_action,
            })),
        ));
    };

    info!(
        event_name = "webhook.dispatch",
        correlation_id = %correlation_id,
        action = %request.next_action,
        sender_id = %request.tracker.sender_id,
        "running action"
    );

    let mut dispatcher = CollectingDispatcher::new();
    let events = match action.run(&mut dispatcher, &request.tracker).await {
        Ok(events) => events,
        Err(failure) => {
            error!(
                event_name = "webhook.action_failed",
                correlation_id = %correlation_id,
                action = %request.next_action,
                error = %failure,
                "action failed; replying with the internal fallback"
            );
            dispatcher = CollectingDispatcher::new();
            dispatcher.utter_message(INTERNAL_FALLBACK);
            Vec::new()
        }
    };

    Ok(Json(ActionResponse { events, responses: dispatcher.into_messages() }))
}
