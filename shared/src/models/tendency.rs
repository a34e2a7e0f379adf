//! Ordinal trend classifications for before/after comparisons

use serde::{Deserialize, Serialize};

/// Direction of change between a reference value and a later value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tendency {
    Increasing,
    Constant,
    Decreasing,
}

impl Tendency {
    /// Classify the change from `before` to `after`.
    ///
    /// Comparison is exact: equal values yield `Constant`, with no epsilon
    /// tolerance.
    pub fn between(before: f64, after: f64) -> Self {
        if before < after {
            Tendency::Increasing
        } else if before > after {
            Tendency::Decreasing
        } else {
            Tendency::Constant
        }
    }
}

/// Trend classification with a magnitude-significant extreme on each side
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BigTendency {
    BigIncreasing,
    Increasing,
    Constant,
    Decreasing,
    BigDecreasing,
}

impl BigTendency {
    /// Classify the change from `before` to `after`, promoting to the big
    /// variants when the absolute delta exceeds `big_delta`.
    ///
    /// `big_delta` is caller-supplied per comparison; a negative delta makes
    /// every non-constant change a big one.
    pub fn between(before: f64, after: f64, big_delta: f64) -> Self {
        let big = (before - after).abs() > big_delta;
        if before < after {
            if big {
                BigTendency::BigIncreasing
            } else {
                BigTendency::Increasing
            }
        } else if before > after {
            if big {
                BigTendency::BigDecreasing
            } else {
                BigTendency::Decreasing
            }
        } else {
            BigTendency::Constant
        }
    }
}
