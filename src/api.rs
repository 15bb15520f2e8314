//! Client for the simulation API.
//!
//! All requests go through a [`Transport`] so the submission flow can be
//! exercised without a browser or a running backend.

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::error::SimulationError;
use crate::results::{parse_history, parse_run, HistoryEntry, ViewResults};
use crate::scenario::ScenarioForm;
use crate::session::Session;
use crate::storage::KeyValueStore;

pub const RUN_PATH: &str = "/api/simulation/run";
pub const HISTORY_PATH: &str = "/api/simulation/history";
pub const RESULT_PATH: &str = "/api/simulation/result";

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One request, one reply. No retries, no timeout.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<HttpReply, SimulationError>;
    async fn get(&self, url: &str) -> Result<HttpReply, SimulationError>;
}

/// `reqwest`-backed transport. In the browser this is `fetch`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    async fn finish(response: reqwest::Response) -> Result<HttpReply, SimulationError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SimulationError::Network(e.to_string()))?;
        Ok(HttpReply { status, body })
    }
}

impl Transport for HttpTransport {
    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<HttpReply, SimulationError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| SimulationError::Network(e.to_string()))?;
        Self::finish(response).await
    }

    async fn get(&self, url: &str) -> Result<HttpReply, SimulationError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SimulationError::Network(e.to_string()))?;
        Self::finish(response).await
    }
}

pub struct SimulationClient<T> {
    transport: T,
    api_base: String,
}

impl<T: Transport> SimulationClient<T> {
    pub fn new(transport: T, api_base: &str) -> Self {
        Self {
            transport,
            api_base: crate::config::normalize_base(api_base),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// Run a scenario for the given session.
    pub async fn run(&self, session: &Session, form: &ScenarioForm) -> Result<ViewResults, SimulationError> {
        let request = form.to_request(session)?;
        info!(
            "Running simulation for user {} twin {} over {} years",
            request.user_id, request.twin_id, request.duration_years
        );

        let reply = self.transport.post_json(&self.url(RUN_PATH), &request).await?;
        let body = expect_json(reply)?;
        debug!("Raw simulation response: {}", body);

        let run = parse_run(body).inspect_err(|e| error!("Simulation response rejected: {}", e))?;
        let results = ViewResults::from_run(&run, Some(request.duration_years));
        info!(
            "Simulation finished: {} points, risk {}",
            results.timeline.len(),
            results.risk_level.label()
        );
        Ok(results)
    }

    /// Past runs for a user, newest first as the backend orders them.
    pub async fn history(&self, user_id: i64) -> Result<Vec<HistoryEntry>, SimulationError> {
        let url = format!("{}/{}", self.url(HISTORY_PATH), user_id);
        let reply = self.transport.get(&url).await?;
        parse_history(expect_json(reply)?)
    }

    /// A single stored run, mapped the same way as a fresh one.
    pub async fn fetch_result(&self, simulation_id: i64) -> Result<ViewResults, SimulationError> {
        let url = format!("{}/{}", self.url(RESULT_PATH), simulation_id);
        let reply = self.transport.get(&url).await?;
        let run = parse_run(expect_json(reply)?)?;
        Ok(ViewResults::from_run(&run, None))
    }
}

/// Non-2xx and non-JSON bodies are transport failures.
fn expect_json(reply: HttpReply) -> Result<serde_json::Value, SimulationError> {
    if !reply.is_success() {
        warn!("Simulation API returned status {}", reply.status);
        return Err(SimulationError::Http { status: reply.status });
    }
    serde_json::from_str(&reply.body).map_err(|e| SimulationError::Decode(e.to_string()))
}

/// Full submission: read the session, then run. A missing session never
/// reaches the transport.
pub async fn submit<T: Transport>(
    store: &impl KeyValueStore,
    client: &SimulationClient<T>,
    form: &ScenarioForm,
) -> Result<ViewResults, SimulationError> {
    let session = Session::load(store).inspect_err(|e| warn!("Simulation blocked: {}", e))?;
    client
        .run(&session, form)
        .await
        .inspect_err(|e| error!("Simulation failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::results::RiskLevel;
    use crate::storage::{MemoryStore, TWIN_ID_KEY, USER_ID_KEY};

    /// Replays one canned reply and records every request.
    struct CannedTransport {
        reply: Result<HttpReply, SimulationError>,
        calls: RefCell<Vec<(String, Option<serde_json::Value>)>>,
    }

    impl CannedTransport {
        fn ok(body: serde_json::Value) -> Self {
            Self::status(200, &body.to_string())
        }

        fn status(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(HttpReply { status, body: body.to_string() }),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for CannedTransport {
        async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<HttpReply, SimulationError> {
            let body = serde_json::to_value(body).unwrap();
            self.calls.borrow_mut().push((url.to_string(), Some(body)));
            self.reply.clone()
        }

        async fn get(&self, url: &str) -> Result<HttpReply, SimulationError> {
            self.calls.borrow_mut().push((url.to_string(), None));
            self.reply.clone()
        }
    }

    fn session_store() -> MemoryStore {
        MemoryStore::new().with(USER_ID_KEY, "1").with(TWIN_ID_KEY, "2")
    }

    #[tokio::test]
    async fn test_submit_posts_request_to_run_endpoint() {
        let transport = CannedTransport::ok(serde_json::json!({
            "id": 5,
            "result_summary": {
                "curves": [{"year": 1, "heart_score": 0.7, "mental_stress_score": 0.6, "organ_load_score": 0.8}],
                "summary": {"final_state": {"organ_load_score": 0.8}, "risk_level": "critical"}
            }
        }));
        let client = SimulationClient::new(transport, "http://127.0.0.1:8000/");
        let form = ScenarioForm { years: 7, ..Default::default() };

        let results = submit(&session_store(), &client, &form).await.unwrap();
        assert_eq!(results.risk_level, RiskLevel::Critical);
        assert_eq!(results.final_organ_load, 80);
        assert_eq!(results.years, 7);

        let calls = client.transport().calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "http://127.0.0.1:8000/api/simulation/run");
        let body = calls[0].1.as_ref().unwrap();
        assert_eq!(body["duration_years"], 7);
        assert_eq!(body["user_id"], 1);
        assert_eq!(body["twin_id"], 2);
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_error() {
        let client = SimulationClient::new(CannedTransport::status(404, r#"{"detail":"Twin not found"}"#), "http://api");
        let err = submit(&session_store(), &client, &ScenarioForm::default())
            .await
            .unwrap_err();
        assert_eq!(err, SimulationError::Http { status: 404 });
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let client = SimulationClient::new(CannedTransport::status(200, "<html>"), "http://api");
        let err = submit(&session_store(), &client, &ScenarioForm::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SimulationError::Decode(_)));
    }

    #[tokio::test]
    async fn test_history_and_result_urls() {
        let client = SimulationClient::new(CannedTransport::ok(serde_json::json!([])), "http://api");
        let entries = client.history(42).await.unwrap();
        assert!(entries.is_empty());

        // A list is not a run envelope
        let err = client.fetch_result(9).await.unwrap_err();
        assert!(matches!(err, SimulationError::Malformed(_)));

        let calls = client.transport().calls.borrow();
        assert_eq!(calls[0].0, "http://api/api/simulation/history/42");
        assert_eq!(calls[1].0, "http://api/api/simulation/result/9");
        assert!(calls.iter().all(|(_, body)| body.is_none()));
    }
}
