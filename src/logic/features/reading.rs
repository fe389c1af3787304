//! Environmental Reading
//!
//! The seven raw readings captured for one assessment, plus the input
//! domain bounds the collecting side (CLI / UI) enforces before handing a
//! reading to the core.

use serde::{Deserialize, Serialize};

use super::layout::{FEATURE_COUNT, FEATURE_LAYOUT};

/// Raw readings for one assessment. Immutable once captured.
///
/// Missing fields deserialize to the documented defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentalReading {
    /// Total rainfall (mm), default 0
    pub rainfall_mm: f64,
    /// Relative humidity (%), default 50
    pub humidity_pct: f64,
    /// Ambient temperature (°C), default 0
    pub temperature_c: f64,
    /// Wind speed (km/h), default 0
    pub wind_speed_kmph: f64,
    /// Soil moisture (%), default 0
    pub soil_moisture_pct: f64,
    /// Seismic magnitude, default 0
    pub magnitude: f64,
    /// Seismic event depth (km), default 0
    pub depth_km: f64,
}

impl Default for EnvironmentalReading {
    fn default() -> Self {
        Self {
            rainfall_mm: 0.0,
            humidity_pct: 50.0,
            temperature_c: 0.0,
            wind_speed_kmph: 0.0,
            soil_moisture_pct: 0.0,
            magnitude: 0.0,
            depth_km: 0.0,
        }
    }
}

impl EnvironmentalReading {
    /// Values in `FEATURE_LAYOUT` order
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.rainfall_mm,
            self.humidity_pct,
            self.temperature_c,
            self.wind_speed_kmph,
            self.soil_moisture_pct,
            self.magnitude,
            self.depth_km,
        ]
    }

    /// Rebuild a reading from values in `FEATURE_LAYOUT` order
    pub fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        Self {
            rainfall_mm: values[0],
            humidity_pct: values[1],
            temperature_c: values[2],
            wind_speed_kmph: values[3],
            soil_moisture_pct: values[4],
            magnitude: values[5],
            depth_km: values[6],
        }
    }

    /// Check the reading against the collector-side input ranges
    pub fn check_input_bounds(&self) -> Result<(), InputBoundsError> {
        for (index, value) in self.to_array().iter().copied().enumerate() {
            let (min, max) = INPUT_BOUNDS[index];
            if !(min..=max).contains(&value) {
                return Err(InputBoundsError {
                    feature: FEATURE_LAYOUT[index],
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}

// ============================================================================
// INPUT DOMAIN BOUNDS
// ============================================================================

/// Inclusive (min, max) per feature, in `FEATURE_LAYOUT` order
pub const INPUT_BOUNDS: [(f64, f64); FEATURE_COUNT] = [
    (0.0, 500.0),   // Rainfall_mm
    (0.0, 100.0),   // Humidity_%
    (-10.0, 60.0),  // Temperature_C
    (0.0, 150.0),   // Wind_Speed_kmph
    (0.0, 100.0),   // Soil_Moisture_%
    (0.0, 10.0),    // Magnitude
    (0.0, 100.0),   // Depth_km
];

/// A reading outside the collector's accepted input range
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{feature} = {value} is outside the accepted range [{min}, {max}]")]
pub struct InputBoundsError {
    pub feature: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let reading = EnvironmentalReading::default();
        assert_eq!(reading.humidity_pct, 50.0);
        assert_eq!(reading.rainfall_mm, 0.0);
        assert_eq!(reading.magnitude, 0.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let reading: EnvironmentalReading = serde_json::from_str(r#"{"rainfall_mm": 120.5}"#).unwrap();
        assert_eq!(reading.rainfall_mm, 120.5);
        assert_eq!(reading.humidity_pct, 50.0);
    }

    #[test]
    fn test_array_order_matches_layout() {
        let reading = EnvironmentalReading {
            rainfall_mm: 1.0,
            humidity_pct: 2.0,
            temperature_c: 3.0,
            wind_speed_kmph: 4.0,
            soil_moisture_pct: 5.0,
            magnitude: 6.0,
            depth_km: 7.0,
        };
        assert_eq!(reading.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(EnvironmentalReading::from_array(reading.to_array()), reading);
    }

    #[test]
    fn test_input_bounds() {
        let mut reading = EnvironmentalReading::default();
        assert!(reading.check_input_bounds().is_ok());

        reading.temperature_c = -10.0;
        assert!(reading.check_input_bounds().is_ok());

        reading.rainfall_mm = 500.5;
        let err = reading.check_input_bounds().unwrap_err();
        assert_eq!(err.feature, "Rainfall_mm");
        assert_eq!(err.max, 500.0);
    }
}
