//! Simulation parameters chosen on the form and the request body built
//! from them.

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::session::Session;

pub const SCENARIO_NAME: &str = "future_health_simulation";
pub const DEFAULT_YEARS: u32 = 10;
pub const MIN_YEARS: u32 = 1;
pub const MAX_YEARS: u32 = 30;
pub const QUICK_YEARS: [u32; 3] = [5, 10, 20];

/// Parse the years input. Anything unparseable, or zero, falls back to the
/// default; values above the maximum clamp to it.
pub fn parse_years(input: &str) -> u32 {
    match input.trim().parse::<i64>() {
        Ok(n) if n >= MIN_YEARS as i64 => n.min(MAX_YEARS as i64) as u32,
        _ => DEFAULT_YEARS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifestyle {
    IncreaseExercise,
    ReduceSmoking,
    BetterSleep,
    DietImprovement,
}

impl Lifestyle {
    pub const ALL: [Lifestyle; 4] = [
        Lifestyle::IncreaseExercise,
        Lifestyle::ReduceSmoking,
        Lifestyle::BetterSleep,
        Lifestyle::DietImprovement,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Lifestyle::IncreaseExercise => "\u{1F4AA} Increase Exercise",
            Lifestyle::ReduceSmoking => "\u{1F6AD} Reduce Smoking",
            Lifestyle::BetterSleep => "\u{1F634} Better Sleep",
            Lifestyle::DietImprovement => "\u{1F957} Diet Improvement",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Lifestyle::IncreaseExercise => "exercise",
            Lifestyle::ReduceSmoking => "smoking",
            Lifestyle::BetterSleep => "sleep",
            Lifestyle::DietImprovement => "diet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    HigherPollution,
    WorkStress,
    NoiseExposure,
}

impl Environment {
    pub const ALL: [Environment; 3] = [
        Environment::HigherPollution,
        Environment::WorkStress,
        Environment::NoiseExposure,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Environment::HigherPollution => "\u{1F3ED} Higher Pollution",
            Environment::WorkStress => "\u{1F630} Work Stress",
            Environment::NoiseExposure => "\u{1F50A} Noise Exposure",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Environment::HigherPollution => "pollution",
            Environment::WorkStress => "stress",
            Environment::NoiseExposure => "noise",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifestyleChanges {
    pub increase_exercise: bool,
    pub reduce_smoking: bool,
    pub better_sleep: bool,
    pub diet_improvement: bool,
}

impl LifestyleChanges {
    pub fn get(&self, item: Lifestyle) -> bool {
        match item {
            Lifestyle::IncreaseExercise => self.increase_exercise,
            Lifestyle::ReduceSmoking => self.reduce_smoking,
            Lifestyle::BetterSleep => self.better_sleep,
            Lifestyle::DietImprovement => self.diet_improvement,
        }
    }

    pub fn set(&mut self, item: Lifestyle, on: bool) {
        match item {
            Lifestyle::IncreaseExercise => self.increase_exercise = on,
            Lifestyle::ReduceSmoking => self.reduce_smoking = on,
            Lifestyle::BetterSleep => self.better_sleep = on,
            Lifestyle::DietImprovement => self.diet_improvement = on,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvironmentFactors {
    pub higher_pollution: bool,
    pub work_stress: bool,
    pub noise_exposure: bool,
}

impl EnvironmentFactors {
    pub fn get(&self, item: Environment) -> bool {
        match item {
            Environment::HigherPollution => self.higher_pollution,
            Environment::WorkStress => self.work_stress,
            Environment::NoiseExposure => self.noise_exposure,
        }
    }

    pub fn set(&mut self, item: Environment, on: bool) {
        match item {
            Environment::HigherPollution => self.higher_pollution = on,
            Environment::WorkStress => self.work_stress = on,
            Environment::NoiseExposure => self.noise_exposure = on,
        }
    }
}

/// Current state of the simulation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioForm {
    pub years: u32,
    pub lifestyle: LifestyleChanges,
    pub environment: EnvironmentFactors,
}

impl Default for ScenarioForm {
    fn default() -> Self {
        Self {
            years: DEFAULT_YEARS,
            lifestyle: LifestyleChanges::default(),
            environment: EnvironmentFactors::default(),
        }
    }
}

impl ScenarioForm {
    pub fn to_request(&self, session: &Session) -> Result<SimulationRequest, SimulationError> {
        if !(MIN_YEARS..=MAX_YEARS).contains(&self.years) {
            return Err(SimulationError::InvalidDuration(self.years));
        }

        let flag = |on: bool| u8::from(on);
        Ok(SimulationRequest {
            user_id: session.user_id,
            twin_id: session.twin_id,
            scenario_name: SCENARIO_NAME.to_string(),
            duration_years: self.years,
            changes: ScenarioChanges {
                increase_exercise: flag(self.lifestyle.increase_exercise),
                reduce_smoking: flag(self.lifestyle.reduce_smoking),
                better_sleep: flag(self.lifestyle.better_sleep),
                diet_improvement: flag(self.lifestyle.diet_improvement),
                higher_pollution: flag(self.environment.higher_pollution),
                work_stress: flag(self.environment.work_stress),
                noise_exposure: flag(self.environment.noise_exposure),
            },
        })
    }
}

// -- Wire types --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub user_id: i64,
    pub twin_id: i64,
    pub scenario_name: String,
    pub duration_years: u32,
    pub changes: ScenarioChanges,
}

/// Every flag is sent as 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioChanges {
    pub increase_exercise: u8,
    pub reduce_smoking: u8,
    pub better_sleep: u8,
    pub diet_improvement: u8,
    pub higher_pollution: u8,
    pub work_stress: u8,
    pub noise_exposure: u8,
}
