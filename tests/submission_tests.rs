use std::cell::{Cell, RefCell};

use serde::Serialize;
use serde_json::json;

use twinsim::error::ErrorKind;
use twinsim::results::{Metric, RiskLevel, ViewState};
use twinsim::scenario::{Environment, Lifestyle, ScenarioForm};
use twinsim::storage::{MemoryStore, TWIN_ID_KEY, USER_ID_KEY};
use twinsim::{submit, HttpReply, SimulationClient, SimulationError, Transport};

/// Counts requests and answers every POST with the same reply.
struct CountingTransport {
    reply: HttpReply,
    calls: Cell<usize>,
    last_body: RefCell<Option<serde_json::Value>>,
}

impl CountingTransport {
    fn new(status: u16, body: serde_json::Value) -> Self {
        Self {
            reply: HttpReply { status, body: body.to_string() },
            calls: Cell::new(0),
            last_body: RefCell::new(None),
        }
    }
}

impl Transport for CountingTransport {
    async fn post_json<B: Serialize>(&self, _url: &str, body: &B) -> Result<HttpReply, SimulationError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_body.borrow_mut() = Some(serde_json::to_value(body).unwrap());
        Ok(self.reply.clone())
    }

    async fn get(&self, _url: &str) -> Result<HttpReply, SimulationError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.reply.clone())
    }
}

fn logged_in() -> MemoryStore {
    MemoryStore::new().with(USER_ID_KEY, "11").with(TWIN_ID_KEY, "4")
}

fn backend_run() -> serde_json::Value {
    json!({
        "id": 31,
        "user_id": 11,
        "twin_id": 4,
        "scenario_name": "future_health_simulation",
        "duration_years": 3,
        "result_summary": {
            "curves": [
                {"year": 1, "heart_score": 0.81, "mental_stress_score": 0.66, "organ_load_score": 0.41},
                {"year": 2, "heart_score": 0.78, "mental_stress_score": 0.62, "organ_load_score": 0.47},
                {"year": 3, "heart_score": 0.753, "mental_stress_score": 0.58, "organ_load_score": 0.55}
            ],
            "summary": {
                "risk_level": "warning",
                "final_state": {"year": 3, "organ_load_score": 0.55},
                "years": 3
            }
        }
    })
}

#[tokio::test]
async fn test_missing_user_id_issues_no_request() {
    let client = SimulationClient::new(CountingTransport::new(200, backend_run()), "http://127.0.0.1:8000");
    let store = MemoryStore::new().with(TWIN_ID_KEY, "4");

    let err = submit(&store, &client, &ScenarioForm::default()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Precondition);
    assert_eq!(err.user_message(), "Please login and create a digital twin first");
    assert_eq!(client.transport().calls.get(), 0);
}

#[tokio::test]
async fn test_missing_twin_id_issues_no_request() {
    let client = SimulationClient::new(CountingTransport::new(200, backend_run()), "http://127.0.0.1:8000");
    let store = MemoryStore::new().with(USER_ID_KEY, "11");

    assert!(submit(&store, &client, &ScenarioForm::default()).await.is_err());
    assert_eq!(client.transport().calls.get(), 0);
}

#[tokio::test]
async fn test_full_run_maps_terminal_year() {
    let client = SimulationClient::new(CountingTransport::new(200, backend_run()), "http://127.0.0.1:8000");
    let mut form = ScenarioForm { years: 3, ..Default::default() };
    form.lifestyle.set(Lifestyle::IncreaseExercise, true);
    form.environment.set(Environment::HigherPollution, true);

    let results = submit(&logged_in(), &client, &form).await.unwrap();

    assert_eq!(client.transport().calls.get(), 1);
    let body = client.transport().last_body.borrow().clone().unwrap();
    assert_eq!(body["duration_years"], 3);
    assert_eq!(body["changes"]["increase_exercise"], 1);
    assert_eq!(body["changes"]["higher_pollution"], 1);
    assert_eq!(body["changes"]["better_sleep"], 0);

    assert_eq!(results.timeline.len(), 3);
    assert_eq!(results.last_value(Metric::Heart, 75), 75);
    assert_eq!(results.last_value(Metric::Organ, 25), 55);
    assert_eq!(results.final_organ_load, 55);
    assert_eq!(results.risk_level, RiskLevel::Warning);
    assert_eq!(ViewState::derive(false, Some(&results)), ViewState::HasResults);
}

#[tokio::test]
async fn test_empty_curves_render_placeholder() {
    let body = json!({"result_summary": {"curves": [], "summary": {"risk_level": "safe"}}});
    let client = SimulationClient::new(CountingTransport::new(200, body), "http://api");

    let results = submit(&logged_in(), &client, &ScenarioForm::default()).await.unwrap();

    assert!(!results.has_results());
    assert_eq!(ViewState::derive(false, Some(&results)), ViewState::Empty);
}

#[tokio::test]
async fn test_critical_summary_mentions_year_count() {
    let body = json!({
        "result_summary": {
            "curves": [{"year": 1, "organ_load_score": 0.9}],
            "summary": {"risk_level": "critical", "final_state": {"organ_load_score": 0.9}}
        }
    });
    let client = SimulationClient::new(CountingTransport::new(200, body), "http://api");
    let form = ScenarioForm { years: 20, ..Default::default() };

    let results = submit(&logged_in(), &client, &form).await.unwrap();

    assert_eq!(results.risk_level.tone(), "destructive");
    assert_eq!(
        results.risk_level.summary(results.years),
        "At current lifestyle, your 20-year risk is CRITICAL. Immediate lifestyle changes recommended."
    );
}

#[tokio::test]
async fn test_malformed_response_is_distinct_from_transport_failure() {
    let client = SimulationClient::new(CountingTransport::new(200, json!({"result_summary": {}})), "http://api");
    let err = submit(&logged_in(), &client, &ScenarioForm::default()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);

    let client = SimulationClient::new(CountingTransport::new(500, json!({"detail": "boom"})), "http://api");
    let err = submit(&logged_in(), &client, &ScenarioForm::default()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(client.transport().calls.get(), 1);
}

#[tokio::test]
async fn test_uppercase_risk_label_renders_safe() {
    let body = json!({
        "result_summary": {"curves": [{"year": 1}], "summary": {"risk_level": "CRITICAL"}}
    });
    let client = SimulationClient::new(CountingTransport::new(200, body), "http://api");

    let results = submit(&logged_in(), &client, &ScenarioForm::default()).await.unwrap();

    assert_eq!(results.risk_level, RiskLevel::Safe);
    assert_eq!(results.risk_level.tone(), "success");
    assert!(results.risk_level.summary(results.years).contains("LOW"));
}
