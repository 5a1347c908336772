//! Portal-backed actions: one GET per dispatch call, fresh every time.
//!
//! Failure never leaves this module. A rejected status folds into the
//! resource's empty text (the compatibility default; the distinct
//! [`FetchOutcome::Rejected`] variant is logged so the fold stays visible
//! in traces), and a transport failure becomes the resource's
//! "couldn't fetch" text. Either way the framework gets one message back.

use async_trait::async_trait;
use campusbot_portal::{
    format::{
        achievements_list, events_list, ideas_list, polls_list, profile_card, ACHIEVEMENTS_EMPTY,
        ACHIEVEMENTS_UNAVAILABLE, EVENTS_EMPTY, EVENTS_UNAVAILABLE, IDEAS_EMPTY,
        IDEAS_UNAVAILABLE, POLLS_EMPTY, POLLS_UNAVAILABLE, PROFILE_EMPTY, PROFILE_UNAVAILABLE,
    },
    FetchOutcome, PortalClient, PortalError,
};
use tracing::{debug, warn};

use crate::{Action, ActionError, CollectingDispatcher, EventPayload, Tracker};

fn fold<T>(
    action: &'static str,
    result: Result<FetchOutcome<T>, PortalError>,
    render: impl FnOnce(&T) -> String,
    empty_text: &str,
    unavailable_text: &str,
) -> String {
    match result {
        Ok(FetchOutcome::Found(data)) => render(&data),
        Ok(FetchOutcome::Empty) => empty_text.to_string(),
        Ok(FetchOutcome::Rejected(status)) => {
            debug!(
                event_name = "action.portal.rejected",
                action,
                status,
                "portal rejected the request; replying with the empty-result text"
            );
            empty_text.to_string()
        }
        Err(error) => {
            warn!(
                event_name = "action.portal.unavailable",
                action,
                error = %error,
                "portal fetch failed; replying with the fallback text"
            );
            unavailable_text.to_string()
        }
    }
}

pub struct GetActiveEvents {
    client: PortalClient,
}

impl GetActiveEvents {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Action for GetActiveEvents {
    fn name(&self) -> &'static str {
        "action_get_active_events"
    }

    async fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        _tracker: &Tracker,
    ) -> Result<Vec<EventPayload>, ActionError> {
        let text = fold(
            self.name(),
            self.client.active_events().await,
            |events| events_list(events),
            EVENTS_EMPTY,
            EVENTS_UNAVAILABLE,
        );
        dispatcher.utter_message(text);
        Ok(Vec::new())
    }
}

pub struct GetActivePolls {
    client: PortalClient,
}

impl GetActivePolls {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Action for GetActivePolls {
    fn name(&self) -> &'static str {
        "action_get_active_polls"
    }

    async fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<EventPayload>, ActionError> {
        let token = tracker.auth_token();
        let text = fold(
            self.name(),
            self.client.polls(token.as_ref()).await,
            |polls| polls_list(polls),
            POLLS_EMPTY,
            POLLS_UNAVAILABLE,
        );
        dispatcher.utter_message(text);
        Ok(Vec::new())
    }
}

pub struct GetMyProfile {
    client: PortalClient,
}

impl GetMyProfile {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Action for GetMyProfile {
    fn name(&self) -> &'static str {
        "action_get_my_profile"
    }

    async fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<EventPayload>, ActionError> {
        let token = tracker.auth_token();
        let text = fold(
            self.name(),
            self.client.profile(token.as_ref()).await,
            |profile| profile_card(profile),
            PROFILE_EMPTY,
            PROFILE_UNAVAILABLE,
        );
        dispatcher.utter_message(text);
        Ok(Vec::new())
    }
}

pub struct GetMyIdeas {
    client: PortalClient,
}

impl GetMyIdeas {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Action for GetMyIdeas {
    fn name(&self) -> &'static str {
        "action_get_my_ideas"
    }

    async fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<EventPayload>, ActionError> {
        let token = tracker.auth_token();
        let text = fold(
            self.name(),
            self.client.ideas(token.as_ref()).await,
            |ideas| ideas_list(ideas),
            IDEAS_EMPTY,
            IDEAS_UNAVAILABLE,
        );
        dispatcher.utter_message(text);
        Ok(Vec::new())
    }
}

pub struct GetMyAchievements {
    client: PortalClient,
}

impl GetMyAchievements {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Action for GetMyAchievements {
    fn name(&self) -> &'static str {
        "action_get_my_achievements"
    }

    async fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<EventPayload>, ActionError> {
        let token = tracker.auth_token();
        let text = fold(
            self.name(),
            self.client.achievements(token.as_ref()).await,
            |achievements| achievements_list(achievements),
            ACHIEVEMENTS_EMPTY,
            ACHIEVEMENTS_UNAVAILABLE,
        );
        dispatcher.utter_message(text);
        Ok(Vec::new())
    }
}
