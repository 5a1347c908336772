use std::time::Duration;

use campusbot_core::PortalConfig;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::resources::{Achievement, Event, Idea, Poll, Profile};

/// Outcome of a single portal fetch, short of a transport failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    Found(T),
    /// 200 with an empty collection (or a null body): the backend really has
    /// nothing for this resource.
    Empty,
    /// Non-success status. Distinct from `Empty` so callers can react to auth
    /// failures differently; the default rendering treats it as empty.
    Rejected(u16),
}

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("portal request to `{path}` failed: {source}")]
    Transport { path: String, source: reqwest::Error },
    #[error("portal response from `{path}` was not valid JSON: {source}")]
    MalformedBody { path: String, source: reqwest::Error },
    #[error("portal response from `{path}` did not match the expected shape: {source}")]
    UnexpectedShape { path: String, source: serde_json::Error },
}

/// Thin read-only client over the portal REST API.
///
/// Holds the base URL and timeout from config at construction time; nothing
/// is read from process globals per call. One request, one response, no
/// retries - the chat surface falls back to canned text on any failure.
#[derive(Clone, Debug)]
pub struct PortalClient {
    base_url: String,
    timeout: Duration,
    client: Client,
}

impl PortalClient {
    pub fn new(config: &PortalConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_secs),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn active_events(&self) -> Result<FetchOutcome<Vec<Event>>, PortalError> {
        self.fetch_list("/events/active", None).await
    }

    pub async fn polls(
        &self,
        token: Option<&SecretString>,
    ) -> Result<FetchOutcome<Vec<Poll>>, PortalError> {
        self.fetch_list("/polls", token).await
    }

    pub async fn profile(
        &self,
        token: Option<&SecretString>,
    ) -> Result<FetchOutcome<Profile>, PortalError> {
        self.fetch_one("/me/profile", token).await
    }

    pub async fn ideas(
        &self,
        token: Option<&SecretString>,
    ) -> Result<FetchOutcome<Vec<Idea>>, PortalError> {
        self.fetch_list("/me/ideas", token).await
    }

    pub async fn achievements(
        &self,
        token: Option<&SecretString>,
    ) -> Result<FetchOutcome<Vec<Achievement>>, PortalError> {
        self.fetch_list("/me/achievements", token).await
    }

    async fn fetch_list<T>(
        &self,
        path: &str,
        token: Option<&SecretString>,
    ) -> Result<FetchOutcome<Vec<T>>, PortalError>
    where
        T: DeserializeOwned,
    {
        Ok(match self.fetch_one::<Vec<T>>(path, token).await? {
            FetchOutcome::Found(items) if items.is_empty() => FetchOutcome::Empty,
            outcome => outcome,
        })
    }

    async fn fetch_one<T>(
        &self,
        path: &str,
        token: Option<&SecretString>,
    ) -> Result<FetchOutcome<T>, PortalError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.client.get(&url).timeout(self.timeout);

        // A missing or blank token means the request goes out unauthenticated;
        // the backend is the one that decides to reject it.
        if let Some(token) = token.filter(|token| !token.expose_secret().trim().is_empty()) {
            request =
                request.header("Authorization", format!("Bearer {}", token.expose_secret()));
        }

        let response = request
            .send()
            .await
            .map_err(|source| PortalError::Transport { path: path.to_string(), source })?;

        let status = response.status();
        if !status.is_success() {
            debug!(
                event_name = "portal.fetch.rejected",
                path,
                status = status.as_u16(),
                "portal returned a non-success status"
            );
            return Ok(FetchOutcome::Rejected(status.as_u16()));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(FetchOutcome::Empty);
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|source| PortalError::MalformedBody { path: path.to_string(), source })?;
        if value.is_null() {
            return Ok(FetchOutcome::Empty);
        }

        // Unexpected shape is treated like any other bad body: the caller's
        // blanket fallback text covers it.
        serde_json::from_value::<T>(value)
            .map(FetchOutcome::Found)
            .map_err(|source| PortalError::UnexpectedShape { path: path.to_string(), source })
    }
}

#[cfg(test)]
mod tests {
    use axum::{routing::get, Json, Router};
    use campusbot_core::PortalConfig;
    use secrecy::SecretString;
    use serde_json::json;

    use super::{FetchOutcome, PortalClient};

    async fn serve(router: Router) -> String {
        let listener =
            tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind stub listener");
        let address = listener.local_addr().expect("stub address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        format!("http://{address}")
    }

    fn client_for(base_url: String) -> PortalClient {
        PortalClient::new(&PortalConfig { base_url, timeout_secs: 2 })
    }

    #[tokio::test]
    async fn empty_event_list_is_authoritative_empty() {
        let base_url =
            serve(Router::new().route("/events/active", get(|| async { Json(json!([])) }))).await;

        let outcome = client_for(base_url).active_events().await.expect("fetch");
        assert_eq!(outcome, FetchOutcome::Empty);
    }

    #[tokio::test]
    async fn populated_event_list_is_found() {
        let body = json!([{ "title": "Tech Fest", "startAt": "2026-09-01", "location": "U Block" }]);
        let base_url = serve(
            Router::new().route("/events/active", get(move || async move { Json(body.clone()) })),
        )
        .await;

        let outcome = client_for(base_url).active_events().await.expect("fetch");
        let FetchOutcome::Found(events) = outcome else {
            panic!("expected events to be found");
        };
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title.as_deref(), Some("Tech Fest"));
    }

    #[tokio::test]
    async fn unauthorized_polls_are_rejected_not_errored() {
        let base_url = serve(Router::new().route(
            "/polls",
            get(|| async { (axum::http::StatusCode::UNAUTHORIZED, Json(json!({"error": "no"}))) }),
        ))
        .await;

        let outcome = client_for(base_url).polls(None).await.expect("fetch");
        assert_eq!(outcome, FetchOutcome::Rejected(401));
    }

    #[tokio::test]
    async fn bearer_header_is_forwarded_when_token_present() {
        use axum::response::IntoResponse;

        let router = Router::new().route(
            "/polls",
            get(|headers: axum::http::HeaderMap| async move {
                let authorized = headers
                    .get("authorization")
                    .and_then(|value| value.to_str().ok())
                    .map(|value| value == "Bearer tok-123")
                    .unwrap_or(false);
                if authorized {
                    Json(json!([{ "title": "Mess menu", "options": [{ "text": "Veg" }] }]))
                        .into_response()
                } else {
                    axum::http::StatusCode::UNAUTHORIZED.into_response()
                }
            }),
        );
        let base_url = serve(router).await;
        let client = client_for(base_url);

        let token = SecretString::from("tok-123");
        let outcome = client.polls(Some(&token)).await.expect("fetch");
        assert!(matches!(outcome, FetchOutcome::Found(ref polls) if polls.len() == 1));

        let blank = SecretString::from("   ");
        let outcome = client.polls(Some(&blank)).await.expect("fetch");
        assert_eq!(outcome, FetchOutcome::Rejected(401), "blank token must not be forwarded");
    }

    #[tokio::test]
    async fn unreachable_portal_is_a_transport_error() {
        // Nothing listens on this port.
        let client = client_for("http://127.0.0.1:1".to_string());
        let result = client.active_events().await;
        assert!(result.is_err());
    }
}
