//! Comfort scoring of weather quantities against configured reference points

use serde::Deserialize;

use crate::config::{EvaluationConfig, ScoringProfileConfig};
use crate::models::ForecastSample;

use super::EvaluationError;

/// Reference points for scoring one physical quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringProfile {
    /// Score achieved exactly at the optimal value
    pub weight: f64,
    pub optimal_value: f64,
    pub worst_value: f64,
}

impl ScoringProfile {
    /// Build a profile, rejecting coincident optimal and worst values.
    pub fn new(weight: f64, optimal_value: f64, worst_value: f64) -> Result<Self, EvaluationError> {
        if optimal_value == worst_value {
            return Err(EvaluationError::InvalidProfile);
        }
        Ok(Self {
            weight,
            optimal_value,
            worst_value,
        })
    }
}

/// Curve shape connecting the optimal and worst reference points
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoringCurve {
    Linear,
    OptimalPeak,
}

impl ScoringCurve {
    /// Construct the scorer implementing this curve.
    pub fn build(self, profile: ScoringProfile) -> Box<dyn ValueScore> {
        match self {
            ScoringCurve::Linear => Box::new(LinearScore::new(profile)),
            ScoringCurve::OptimalPeak => Box::new(OptimalPeakScore::new(profile)),
        }
    }
}

/// A weighted comfort score for a scalar quantity.
///
/// Scores are unclamped: values past the worst reference point score below
/// zero.
pub trait ValueScore: Send + Sync {
    fn score(&self, value: f64) -> f64;
}

/// Score falls linearly from `weight` at the optimal value to 0 at the worst
/// value and keeps the same slope on both sides.
///
/// e.g. with optimal 1100 hPa, worst 900 hPa and weight 2:
/// score(1100) = 2, score(900) = 0, score(1200) > 2, score(800) < 0.
#[derive(Debug, Clone, Copy)]
pub struct LinearScore {
    profile: ScoringProfile,
}

impl LinearScore {
    pub fn new(profile: ScoringProfile) -> Self {
        Self { profile }
    }
}

impl ValueScore for LinearScore {
    fn score(&self, value: f64) -> f64 {
        let p = &self.profile;
        let distance = p.worst_value - p.optimal_value;
        p.weight * (p.worst_value - value) / distance
    }
}

/// Score peaks at the optimal value and falls off with squared distance,
/// symmetrically on both sides.
///
/// The worst value only fixes the distance `|worst - optimal|`: the score
/// reaches 0 at `optimal ± distance` and goes negative beyond. e.g. with
/// optimal 20 °C, worst 0 °C and weight 2: score(20) = 2, score(0) = 0,
/// score(40) = 0, score(-10) < 0, score(50) < 0.
#[derive(Debug, Clone, Copy)]
pub struct OptimalPeakScore {
    profile: ScoringProfile,
}

impl OptimalPeakScore {
    pub fn new(profile: ScoringProfile) -> Self {
        Self { profile }
    }
}

impl ValueScore for OptimalPeakScore {
    fn score(&self, value: f64) -> f64 {
        let p = &self.profile;
        let distance = (p.worst_value - p.optimal_value).abs();
        let ratio = 1.0 - ((p.optimal_value - value) / distance).powi(2);
        p.weight * ratio
    }
}

/// Composite day score: temperature score plus pressure score
pub struct ForecastScorer {
    temperature: Box<dyn ValueScore>,
    pressure: Box<dyn ValueScore>,
}

impl ForecastScorer {
    pub fn new(temperature: Box<dyn ValueScore>, pressure: Box<dyn ValueScore>) -> Self {
        Self {
            temperature,
            pressure,
        }
    }

    /// Build both scorers from configuration.
    ///
    /// Fails fast on an invalid profile so misconfiguration surfaces at
    /// startup, not at scoring time.
    pub fn from_config(config: &EvaluationConfig) -> Result<Self, EvaluationError> {
        Ok(Self {
            temperature: build_scorer(&config.temperature)?,
            pressure: build_scorer(&config.pressure)?,
        })
    }

    /// Score one forecast day.
    ///
    /// A missing temperature or pressure is an error; scores are never
    /// computed from partial data.
    pub fn score_day(&self, sample: &ForecastSample) -> Result<f64, EvaluationError> {
        let temperature = sample.temperature.ok_or(EvaluationError::MissingField {
            date: sample.date,
            field: "temperature",
        })?;
        let pressure = sample.pressure.ok_or(EvaluationError::MissingField {
            date: sample.date,
            field: "pressure",
        })?;
        Ok(self.score_values(temperature, pressure))
    }

    pub(crate) fn score_values(&self, temperature: f64, pressure: f64) -> f64 {
        self.temperature.score(temperature) + self.pressure.score(pressure)
    }
}

fn build_scorer(config: &ScoringProfileConfig) -> Result<Box<dyn ValueScore>, EvaluationError> {
    let profile = ScoringProfile::new(config.weight, config.optimal_value, config.worst_value)?;
    Ok(config.curve.build(profile))
}
