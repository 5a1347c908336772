//! Canned-knowledge actions: pure table lookups, no I/O.

use async_trait::async_trait;
use campusbot_core::{resolve, CAMPUS_SPOTS, SAC_VERTICALS, STUDENT_BODIES};

use crate::{Action, ActionError, CollectingDispatcher, EventPayload, Tracker};

pub struct GetStudentBodyInfo;

#[async_trait]
impl Action for GetStudentBodyInfo {
    fn name(&self) -> &'static str {
        "action_get_student_body_info"
    }

    async fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<EventPayload>, ActionError> {
        dispatcher.utter_message(resolve(&STUDENT_BODIES, tracker.slot_text("student_body")));
        Ok(Vec::new())
    }
}

pub struct GetVerticalInfo;

#[async_trait]
impl Action for GetVerticalInfo {
    fn name(&self) -> &'static str {
        "action_get_vertical_info"
    }

    async fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<EventPayload>, ActionError> {
        dispatcher.utter_message(resolve(&SAC_VERTICALS, tracker.slot_text("vertical")));
        Ok(Vec::new())
    }
}

pub struct GetCampusSpotInfo;

#[async_trait]
impl Action for GetCampusSpotInfo {
    fn name(&self) -> &'static str {
        "action_get_campus_spot_info"
    }

    async fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<EventPayload>, ActionError> {
        dispatcher.utter_message(resolve(&CAMPUS_SPOTS, tracker.slot_text("campus_spot")));
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{GetCampusSpotInfo, GetStudentBodyInfo, GetVerticalInfo};
    use crate::{Action, CollectingDispatcher, Tracker};

    fn tracker_with(slot: &str, value: &str) -> Tracker {
        serde_json::from_value(json!({ "slots": { slot: value } })).expect("tracker")
    }

    #[tokio::test]
    async fn sac_slot_yields_sac_description_and_exactly_one_message() {
        let mut dispatcher = CollectingDispatcher::new();
        let tracker = tracker_with("student_body", "I want info about the sac");

        let events = GetStudentBodyInfo.run(&mut dispatcher, &tracker).await.expect("run");

        assert!(events.is_empty());
        assert_eq!(dispatcher.messages().len(), 1);
        assert!(dispatcher.messages()[0]
            .text
            .starts_with("SAC (Student Activities Council) is the umbrella body"));
    }

    #[tokio::test]
    async fn missing_slot_yields_overview_listing() {
        let mut dispatcher = CollectingDispatcher::new();

        GetStudentBodyInfo.run(&mut dispatcher, &Tracker::default()).await.expect("run");

        assert_eq!(dispatcher.messages().len(), 1);
        assert!(dispatcher.messages()[0]
            .text
            .starts_with("Here are the main student bodies at Vignan University"));
    }

    #[tokio::test]
    async fn fine_arts_slot_is_not_shadowed() {
        let mut dispatcher = CollectingDispatcher::new();
        let tracker = tracker_with("vertical", "fine arts please");

        GetVerticalInfo.run(&mut dispatcher, &tracker).await.expect("run");

        assert_eq!(dispatcher.messages().len(), 1);
        assert!(dispatcher.messages()[0].text.contains("Fine Arts vertical"));
    }

    #[tokio::test]
    async fn unknown_campus_spot_prompts_with_known_spots() {
        let mut dispatcher = CollectingDispatcher::new();
        let tracker = tracker_with("campus_spot", "the observatory");

        let events = GetCampusSpotInfo.run(&mut dispatcher, &tracker).await.expect("run");

        assert!(events.is_empty());
        assert_eq!(dispatcher.messages().len(), 1);
        assert!(dispatcher.messages()[0].text.contains("U Block and MHP Canteen"));
    }
}
