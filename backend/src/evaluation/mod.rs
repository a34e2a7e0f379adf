//! Forecast evaluation pipeline
//!
//! Pure scoring and aggregation logic: stateless, synchronous, and free of
//! I/O. Missing or out-of-domain data is always an explicit error, never a
//! substituted default.

mod forecast;
mod scoring;

pub use forecast::evaluate_forecast;
pub use scoring::{
    ForecastScorer, LinearScore, OptimalPeakScore, ScoringCurve, ScoringProfile, ValueScore,
};

use chrono::NaiveDate;
use thiserror::Error;

use shared::BeaufortScaleError;

/// Errors produced by the evaluation pipeline
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EvaluationError {
    /// Rejected at scorer construction, before any request is served
    #[error("invalid scoring profile: worst value cannot be equal to optimal value")]
    InvalidProfile,

    /// A forecast sample lacks a field the pipeline needs
    #[error("forecast for {date} is missing {field}")]
    MissingField { date: NaiveDate, field: &'static str },

    /// The window has no days beyond the reference day to compare against
    #[error("forecast window needs at least two days, got {window_len}")]
    EmptyComparisonSet { window_len: usize },

    /// The averaged wind speed fell outside the Beaufort domain
    #[error(transparent)]
    WindSpeed(#[from] BeaufortScaleError),
}
