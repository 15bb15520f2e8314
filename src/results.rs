//! Simulation response payload and its mapping into chart-ready view data.
//!
//! The payload is decoded into typed structs first. Structural problems
//! (missing `result_summary.curves`, wrongly typed fields) are rejected as
//! [`SimulationError::Malformed`]; absent scores are defaulted.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::SimulationError;

/// Score used for an absent curve value, on the 0..1 scale.
pub const MISSING_SCORE: f64 = 0.5;
/// Organ load used when the summary carries no final state.
pub const MISSING_FINAL_ORGAN_LOAD: f64 = 0.0;

// -- Wire types --

/// One stored simulation run, as returned by `/run` and `/result/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SimulationRun {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub twin_id: Option<i64>,
    #[serde(default)]
    pub scenario_name: Option<String>,
    #[serde(default)]
    pub duration_years: Option<u32>,
    pub result_summary: ResultSummary,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResultSummary {
    pub curves: Vec<CurvePoint>,
    #[serde(default)]
    pub summary: Option<RunSummary>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CurvePoint {
    #[serde(default)]
    pub year: Option<i64>,
    #[serde(default)]
    pub heart_score: Option<f64>,
    #[serde(default)]
    pub mental_stress_score: Option<f64>,
    #[serde(default)]
    pub organ_load_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RunSummary {
    #[serde(default)]
    pub final_state: Option<FinalState>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub years: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FinalState {
    #[serde(default)]
    pub organ_load_score: Option<f64>,
}

/// A row of `/history/{user_id}`. Stored runs may have no summary at all.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HistoryEntry {
    pub id: i64,
    #[serde(default)]
    pub scenario_name: Option<String>,
    #[serde(default)]
    pub duration_years: Option<u32>,
    #[serde(default)]
    pub result_summary: Option<serde_json::Value>,
}

impl HistoryEntry {
    /// Risk label from the stored summary, if it has one.
    pub fn risk_level(&self) -> Option<RiskLevel> {
        self.result_summary
            .as_ref()?
            .get("summary")?
            .get("risk_level")?
            .as_str()
            .map(|label| RiskLevel::from_label(Some(label)))
    }
}

pub fn parse_run(body: serde_json::Value) -> Result<SimulationRun, SimulationError> {
    serde_json::from_value(body).map_err(|e| SimulationError::Malformed(e.to_string()))
}

pub fn parse_history(body: serde_json::Value) -> Result<Vec<HistoryEntry>, SimulationError> {
    serde_json::from_value(body).map_err(|e| SimulationError::Malformed(e.to_string()))
}

/// Scale a 0..1 score to a rounded 0..100 percentage.
pub fn to_percent(score: Option<f64>, default: f64) -> u8 {
    (score.unwrap_or(default).clamp(0.0, 1.0) * 100.0).round() as u8
}

// -- View types --

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Heart,
    Mental,
    Organ,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Heart, Metric::Mental, Metric::Organ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Heart => "Heart Health",
            Metric::Mental => "Mental Health",
            Metric::Organ => "Organ Load",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Metric::Heart => "#ef4444",
            Metric::Mental => "#3b82f6",
            Metric::Organ => "#eab308",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelinePoint {
    pub year: i64,
    pub heart: u8,
    pub mental: u8,
    pub organ: u8,
}

impl TimelinePoint {
    pub fn get(&self, metric: Metric) -> u8 {
        match metric {
            Metric::Heart => self.heart,
            Metric::Mental => self.mental,
            Metric::Organ => self.organ,
        }
    }
}

impl From<&CurvePoint> for TimelinePoint {
    fn from(p: &CurvePoint) -> Self {
        Self {
            year: p.year.unwrap_or(0),
            heart: to_percent(p.heart_score, MISSING_SCORE),
            mental: to_percent(p.mental_stress_score, MISSING_SCORE),
            organ: to_percent(p.organ_load_score, MISSING_SCORE),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RiskLevel {
    #[default]
    Safe,
    Warning,
    Critical,
}

impl RiskLevel {
    /// Only the exact labels "warning" and "critical" escalate. Anything else,
    /// including no value, is safe.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("critical") => RiskLevel::Critical,
            Some("warning") => RiskLevel::Warning,
            Some("safe") | None => RiskLevel::Safe,
            Some(other) => {
                warn!("Unknown risk level '{}', treating as safe", other);
                RiskLevel::Safe
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Safe => "SAFE",
            RiskLevel::Warning => "WARNING",
            RiskLevel::Critical => "CRITICAL",
        }
    }

    /// CSS tone used by the banner, the label, and the history badge.
    pub fn tone(self) -> &'static str {
        match self {
            RiskLevel::Safe => "success",
            RiskLevel::Warning => "warning",
            RiskLevel::Critical => "destructive",
        }
    }

    pub fn summary(self, years: u32) -> String {
        match self {
            RiskLevel::Critical => format!(
                "At current lifestyle, your {}-year risk is CRITICAL. Immediate lifestyle changes recommended.",
                years
            ),
            RiskLevel::Warning => format!(
                "At current lifestyle, your {}-year risk is MODERATE. Consider lifestyle improvements.",
                years
            ),
            RiskLevel::Safe => format!(
                "At current lifestyle, your {}-year risk is LOW. Keep up the good work!",
                years
            ),
        }
    }
}

/// Results of one run, owned by the simulation page until the next run.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewResults {
    pub timeline: Vec<TimelinePoint>,
    pub final_organ_load: u8,
    pub risk_level: RiskLevel,
    /// Projection horizon the run was made for.
    pub years: u32,
}

impl ViewResults {
    /// `requested_years` wins over what the response reports.
    pub fn from_run(run: &SimulationRun, requested_years: Option<u32>) -> Self {
        let summary = run.result_summary.summary.as_ref();
        let timeline: Vec<TimelinePoint> =
            run.result_summary.curves.iter().map(TimelinePoint::from).collect();

        let final_organ_load = to_percent(
            summary
                .and_then(|s| s.final_state.as_ref())
                .and_then(|f| f.organ_load_score),
            MISSING_FINAL_ORGAN_LOAD,
        );
        let risk_level = RiskLevel::from_label(summary.and_then(|s| s.risk_level.as_deref()));
        let years = requested_years
            .or(run.duration_years)
            .or(summary.and_then(|s| s.years))
            .unwrap_or(timeline.len() as u32);

        Self {
            timeline,
            final_organ_load,
            risk_level,
            years,
        }
    }

    pub fn has_results(&self) -> bool {
        !self.timeline.is_empty()
    }

    /// Field of the final projected year, or `default` for an empty timeline.
    pub fn last_value(&self, metric: Metric, default: u8) -> u8 {
        self.timeline.last().map(|p| p.get(metric)).unwrap_or(default)
    }
}

/// What the results column shows. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Running,
    HasResults,
    Empty,
}

impl ViewState {
    pub fn derive(running: bool, results: Option<&ViewResults>) -> Self {
        if running {
            ViewState::Running
        } else if results.is_some_and(ViewResults::has_results) {
            ViewState::HasResults
        } else {
            ViewState::Empty
        }
    }
}
