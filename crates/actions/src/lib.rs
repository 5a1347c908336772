//! Action Dispatch - the handlers the external dialogue framework invokes
//!
//! The NLU/dialogue framework is a black box on the other side of a webhook:
//! it classifies intents, fills slots, and then asks this crate to run a
//! named action against the conversation tracker. Every action here is
//! stateless between turns and follows one contract:
//!
//! 1. read what it needs (a slot value, or nothing) from the [`Tracker`]
//! 2. resolve a canned response or query the portal
//! 3. emit **exactly one** text message via the [`CollectingDispatcher`],
//!    on every path including failures
//! 4. return an empty event list (no conversation state is mutated here)
//!
//! # Key Types
//!
//! - `Action` - the handler trait (name + run)
//! - `ActionRegistry` - name → handler lookup for the webhook host
//! - `knowledge` - canned-table actions (student bodies, verticals, spots)
//! - `live` - portal-backed actions (events, polls, profile, ideas,
//!   achievements)

pub mod knowledge;
pub mod live;
pub mod tracker;

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use campusbot_portal::PortalClient;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub use tracker::Tracker;

/// A conversation-state event returned to the framework. None of the
/// current actions mutate state, so the lists they return are always
/// empty, but the protocol slot stays.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventPayload {
    pub event: String,
    #[serde(flatten)]
    pub payload: serde_json::Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BotMessage {
    pub text: String,
}

/// Collects the outbound messages of one dispatch call.
///
/// Mirrors the framework's message-emission side channel: handlers append,
/// the webhook host drains.
#[derive(Debug, Default)]
pub struct CollectingDispatcher {
    messages: Vec<BotMessage>,
}

impl CollectingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn utter_message(&mut self, text: impl Into<String>) {
        self.messages.push(BotMessage { text: text.into() });
    }

    pub fn messages(&self) -> &[BotMessage] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<BotMessage> {
        self.messages
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("action `{action}` failed internally: {message}")]
    Internal { action: &'static str, message: String },
}

#[async_trait]
pub trait Action: Send + Sync {
    /// Stable name the framework dispatches on, e.g. `action_get_active_events`.
    fn name(&self) -> &'static str;

    async fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<EventPayload>, ActionError>;
}

#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<&'static str, Arc<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<A>(&mut self, action: A)
    where
        A: Action + 'static,
    {
        self.actions.insert(action.name(), Arc::new(action));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Action>> {
        self.actions.get(name).cloned()
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.actions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// The full action set the webhook host serves.
pub fn default_registry(client: PortalClient) -> ActionRegistry {
    let mut registry = ActionRegistry::new();
    registry.register(knowledge::GetStudentBodyInfo);
    registry.register(knowledge::GetVerticalInfo);
    registry.register(knowledge::GetCampusSpotInfo);
    registry.register(live::GetActiveEvents::new(client.clone()));
    registry.register(live::GetActivePolls::new(client.clone()));
    registry.register(live::GetMyProfile::new(client.clone()));
    registry.register(live::GetMyIdeas::new(client.clone()));
    registry.register(live::GetMyAchievements::new(client));
    registry
}
