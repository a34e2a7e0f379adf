//! Beaufort wind-force classification

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Exact conversion factor between m/s and km/h (3600 / 1000)
const KMH_PER_MPS: f64 = 3.6;

/// Error raised when a wind speed cannot be mapped to a Beaufort band
#[derive(Debug, Clone, Error, PartialEq)]
#[error("no Beaufort band for wind speed {speed_mps} m/s")]
pub struct BeaufortScaleError {
    pub speed_mps: f64,
}

/// Beaufort wind-force bands
///
/// Bands are contiguous and exhaustive from 0 km/h upward; the top band is
/// unbounded above.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeaufortScale {
    Calm,
    LightAir,
    LightBreeze,
    GentleBreeze,
    ModerateBreeze,
    FreshBreeze,
    StrongBreeze,
    HighWind,
    Gale,
    StrongGale,
    Storm,
    ViolentStorm,
    HurricaneForce,
}

impl BeaufortScale {
    /// Classify a wind speed given in m/s.
    ///
    /// The speed is converted to km/h and truncated to a whole number before
    /// band lookup. Negative speeds are not a domain value and are rejected
    /// rather than clamped.
    pub fn from_meters_per_second(speed_mps: f64) -> Result<Self, BeaufortScaleError> {
        let kmh = (speed_mps * KMH_PER_MPS).trunc() as i64;
        match kmh {
            0..=1 => Ok(BeaufortScale::Calm),
            2..=5 => Ok(BeaufortScale::LightAir),
            6..=11 => Ok(BeaufortScale::LightBreeze),
            12..=19 => Ok(BeaufortScale::GentleBreeze),
            20..=28 => Ok(BeaufortScale::ModerateBreeze),
            29..=38 => Ok(BeaufortScale::FreshBreeze),
            39..=49 => Ok(BeaufortScale::StrongBreeze),
            50..=61 => Ok(BeaufortScale::HighWind),
            62..=74 => Ok(BeaufortScale::Gale),
            75..=88 => Ok(BeaufortScale::StrongGale),
            89..=102 => Ok(BeaufortScale::Storm),
            103..=117 => Ok(BeaufortScale::ViolentStorm),
            kmh if kmh >= 118 => Ok(BeaufortScale::HurricaneForce),
            _ => Err(BeaufortScaleError { speed_mps }),
        }
    }

    /// Band index on the 0..=12 Beaufort force ladder
    pub const fn force(&self) -> u8 {
        match self {
            BeaufortScale::Calm => 0,
            BeaufortScale::LightAir => 1,
            BeaufortScale::LightBreeze => 2,
            BeaufortScale::GentleBreeze => 3,
            BeaufortScale::ModerateBreeze => 4,
            BeaufortScale::FreshBreeze => 5,
            BeaufortScale::StrongBreeze => 6,
            BeaufortScale::HighWind => 7,
            BeaufortScale::Gale => 8,
            BeaufortScale::StrongGale => 9,
            BeaufortScale::Storm => 10,
            BeaufortScale::ViolentStorm => 11,
            BeaufortScale::HurricaneForce => 12,
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            BeaufortScale::Calm => "Calm",
            BeaufortScale::LightAir => "Light Air",
            BeaufortScale::LightBreeze => "Light Breeze",
            BeaufortScale::GentleBreeze => "Gentle Breeze",
            BeaufortScale::ModerateBreeze => "Moderate Breeze",
            BeaufortScale::FreshBreeze => "Fresh Breeze",
            BeaufortScale::StrongBreeze => "Strong Breeze",
            BeaufortScale::HighWind => "High Wind",
            BeaufortScale::Gale => "Gale",
            BeaufortScale::StrongGale => "Strong Gale",
            BeaufortScale::Storm => "Storm",
            BeaufortScale::ViolentStorm => "Violent Storm",
            BeaufortScale::HurricaneForce => "Hurricane Force",
        }
    }
}

impl std::fmt::Display for BeaufortScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn classifies_across_all_bands() {
        let cases = [
            (0.0, BeaufortScale::Calm),
            (1.5, BeaufortScale::LightAir),
            (3.0, BeaufortScale::LightBreeze),
            (5.0, BeaufortScale::GentleBreeze),
            (8.0, BeaufortScale::ModerateBreeze),
            (10.0, BeaufortScale::FreshBreeze),
            (13.0, BeaufortScale::StrongBreeze),
            (16.0, BeaufortScale::HighWind),
            (20.0, BeaufortScale::Gale),
            (24.0, BeaufortScale::StrongGale),
            (28.0, BeaufortScale::Storm),
            (32.0, BeaufortScale::ViolentStorm),
            (35.0, BeaufortScale::HurricaneForce),
        ];
        for (speed, expected) in cases {
            assert_eq!(
                BeaufortScale::from_meters_per_second(speed),
                Ok(expected),
                "speed {speed} m/s"
            );
        }
    }

    #[test]
    fn band_boundaries_are_exact() {
        // 2 km/h is the first Light Air speed; 118 km/h the first hurricane one.
        assert_eq!(
            BeaufortScale::from_meters_per_second(2.0 / 3.6),
            Ok(BeaufortScale::LightAir)
        );
        assert_eq!(
            BeaufortScale::from_meters_per_second(117.999 / 3.6),
            Ok(BeaufortScale::ViolentStorm)
        );
        assert_eq!(
            BeaufortScale::from_meters_per_second(118.0 / 3.6),
            Ok(BeaufortScale::HurricaneForce)
        );
    }

    #[test]
    fn rejects_negative_speed() {
        assert_eq!(
            BeaufortScale::from_meters_per_second(-1.0),
            Err(BeaufortScaleError { speed_mps: -1.0 })
        );
    }

    #[test]
    fn serializes_as_band_name() {
        let json = serde_json::to_string(&BeaufortScale::LightAir).unwrap();
        assert_eq!(json, "\"LIGHT_AIR\"");
    }

    proptest! {
        /// Faster wind never classifies into a lower band.
        #[test]
        fn classification_is_monotonic(a in 0.0f64..100.0, b in 0.0f64..100.0) {
            let (slow, fast) = if a <= b { (a, b) } else { (b, a) };
            let slow_band = BeaufortScale::from_meters_per_second(slow).unwrap();
            let fast_band = BeaufortScale::from_meters_per_second(fast).unwrap();
            prop_assert!(slow_band.force() <= fast_band.force());
        }
    }
}
