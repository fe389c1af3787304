//! Early Warning Thresholds
//!
//! Absolute thresholds on raw readings. No evaluation logic here, only
//! constants and the configurable threshold set.

use serde::{Deserialize, Serialize};

// ============================================================================
// FLOOD
// ============================================================================

/// Rainfall above this = critical flood risk (mm)
pub const FLOOD_CRITICAL_RAINFALL_MM: f64 = 250.0;

/// Rainfall above this = high flood risk (mm)
pub const FLOOD_HIGH_RAINFALL_MM: f64 = 150.0;

// ============================================================================
// FIRE (temperature AND humidity must both hold)
// ============================================================================

pub const FIRE_CRITICAL_TEMPERATURE_C: f64 = 40.0;
pub const FIRE_CRITICAL_HUMIDITY_PCT: f64 = 20.0;

pub const FIRE_HIGH_TEMPERATURE_C: f64 = 35.0;
pub const FIRE_HIGH_HUMIDITY_PCT: f64 = 25.0;

// ============================================================================
// SEISMIC
// ============================================================================

pub const SEISMIC_CRITICAL_MAGNITUDE: f64 = 7.0;
pub const SEISMIC_HIGH_MAGNITUDE: f64 = 5.5;

// ============================================================================
// CONFIGURABLE THRESHOLDS
// ============================================================================

/// Warning thresholds. Every comparison is strict (`>` / `<`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningThresholds {
    pub flood_critical_rainfall_mm: f64,
    pub flood_high_rainfall_mm: f64,
    /// Critical fire: temperature above AND humidity below
    pub fire_critical_temperature_c: f64,
    pub fire_critical_humidity_pct: f64,
    /// High fire: temperature above AND humidity below
    pub fire_high_temperature_c: f64,
    pub fire_high_humidity_pct: f64,
    pub seismic_critical_magnitude: f64,
    pub seismic_high_magnitude: f64,
}

impl Default for WarningThresholds {
    fn default() -> Self {
        Self {
            flood_critical_rainfall_mm: FLOOD_CRITICAL_RAINFALL_MM,
            flood_high_rainfall_mm: FLOOD_HIGH_RAINFALL_MM,
            fire_critical_temperature_c: FIRE_CRITICAL_TEMPERATURE_C,
            fire_critical_humidity_pct: FIRE_CRITICAL_HUMIDITY_PCT,
            fire_high_temperature_c: FIRE_HIGH_TEMPERATURE_C,
            fire_high_humidity_pct: FIRE_HIGH_HUMIDITY_PCT,
            seismic_critical_magnitude: SEISMIC_CRITICAL_MAGNITUDE,
            seismic_high_magnitude: SEISMIC_HIGH_MAGNITUDE,
        }
    }
}
