use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::bootstrap::Application;

#[derive(Clone)]
pub struct HealthState {
    portal_base_url: String,
    actions: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub portal: HealthCheck,
    pub checked_at: String,
}

pub fn router(app: &Application) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState {
        portal_base_url: app.config.portal.base_url.clone(),
        actions: app.registry.len(),
    })
}

/// Liveness only. The portal is not probed here; a slow or down portal
/// degrades individual replies, not the action server itself.
pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let payload = HealthResponse {
        status: "ready",
        service: HealthCheck {
            status: "ready",
            detail: format!("{} actions registered", state.actions),
        },
        portal: HealthCheck { status: "configured", detail: state.portal_base_url.clone() },
        checked_at: Utc::now().to_rfc3339(),
    };

    (StatusCode::OK, Json(payload))
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode, Json};

    use crate::health::{health, HealthState};

    #[tokio::test]
    async fn health_reports_ready_with_portal_detail() {
        let state = HealthState {
            portal_base_url: "http://localhost:4000/api".to_string(),
            actions: 8,
        };

        let (status, Json(payload)) = health(State(state)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "ready");
        assert_eq!(payload.service.detail, "8 actions registered");
        assert_eq!(payload.portal.detail, "http://localhost:4000/api");
    }
}
