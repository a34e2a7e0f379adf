//! Forecast window aggregation
//!
//! Compares the earliest forecast day against the average of the remaining
//! window and classifies the deltas. The comparison is order-dependent: the
//! earliest day is always the baseline and every other day is pooled.

use chrono::NaiveDate;

use shared::{BeaufortScale, BigTendency, Tendency, WeatherForecastDto};

use crate::models::ForecastSample;

use super::{EvaluationError, ForecastScorer};

/// A forecast sample with every required field present
struct CompleteSample {
    date: NaiveDate,
    temperature: f64,
    pressure: f64,
    wind_speed: f64,
}

/// Aggregate a forecast window into a tendency summary.
///
/// The earliest-dated sample is the reference day (first one wins on a date
/// tie); every other sample is pooled into the comparison set. Exclusion is
/// by position, so twin days carrying identical values stay in the pool.
/// Every sample must carry temperature, pressure, and wind speed; the window
/// must have at least two samples.
pub fn evaluate_forecast(
    window: &[ForecastSample],
    scorer: &ForecastScorer,
    pressure_big_delta: f64,
) -> Result<WeatherForecastDto, EvaluationError> {
    let samples = window
        .iter()
        .map(complete)
        .collect::<Result<Vec<_>, _>>()?;

    let Some(reference_idx) = earliest(&samples) else {
        return Err(EvaluationError::EmptyComparisonSet { window_len: 0 });
    };
    let reference = &samples[reference_idx];

    let comparison: Vec<&CompleteSample> = samples
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != reference_idx)
        .map(|(_, sample)| sample)
        .collect();
    if comparison.is_empty() {
        return Err(EvaluationError::EmptyComparisonSet {
            window_len: samples.len(),
        });
    }

    let count = comparison.len() as f64;
    let average_temperature = comparison.iter().map(|s| s.temperature).sum::<f64>() / count;
    let average_pressure = comparison.iter().map(|s| s.pressure).sum::<f64>() / count;
    let average_wind_speed = comparison.iter().map(|s| s.wind_speed).sum::<f64>() / count;

    let reference_score = scorer.score_values(reference.temperature, reference.pressure);
    let average_score = scorer.score_values(average_temperature, average_pressure);

    Ok(WeatherForecastDto {
        global_tendency: Tendency::between(reference_score, average_score),
        temperature_tendency: Tendency::between(reference.temperature, average_temperature),
        pressure_tendency: BigTendency::between(
            reference.pressure,
            average_pressure,
            pressure_big_delta,
        ),
        wind_average: BeaufortScale::from_meters_per_second(average_wind_speed)?,
    })
}

/// Index of the earliest-dated sample; the first one wins on a tie.
fn earliest(samples: &[CompleteSample]) -> Option<usize> {
    let mut reference_idx = 0;
    for (idx, sample) in samples.iter().enumerate().skip(1) {
        if sample.date < samples[reference_idx].date {
            reference_idx = idx;
        }
    }
    (!samples.is_empty()).then_some(reference_idx)
}

fn complete(sample: &ForecastSample) -> Result<CompleteSample, EvaluationError> {
    Ok(CompleteSample {
        date: sample.date,
        temperature: sample.temperature.ok_or(EvaluationError::MissingField {
            date: sample.date,
            field: "temperature",
        })?,
        pressure: sample.pressure.ok_or(EvaluationError::MissingField {
            date: sample.date,
            field: "pressure",
        })?,
        wind_speed: sample.wind_speed.ok_or(EvaluationError::MissingField {
            date: sample.date,
            field: "wind speed",
        })?,
    })
}
