//! Early Warning Evaluator
//!
//! Scans raw readings against absolute thresholds, independently of both
//! assessments. Output is ordered flood, fire, seismic with at most one
//! warning per category (critical wins over high).

use serde::{Deserialize, Serialize};

use super::rules::WarningThresholds;
use crate::logic::features::EnvironmentalReading;

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarningCategory {
    Flood,
    Fire,
    Seismic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    High,
    Critical,
}

/// One early-warning alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub category: WarningCategory,
    /// Display label, e.g. "CRITICAL FLOOD RISK"
    pub kind: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl Warning {
    fn new(category: WarningCategory, severity: WarningSeverity) -> Self {
        let (kind, message) = match (category, severity) {
            (WarningCategory::Flood, WarningSeverity::Critical) => {
                ("CRITICAL FLOOD RISK", "Extreme rainfall detected - Immediate action required!")
            }
            (WarningCategory::Flood, WarningSeverity::High) => {
                ("HIGH FLOOD RISK", "Heavy rainfall - Monitor water levels closely")
            }
            (WarningCategory::Fire, WarningSeverity::Critical) => {
                ("CRITICAL FIRE RISK", "Extreme fire conditions - High alert!")
            }
            (WarningCategory::Fire, WarningSeverity::High) => {
                ("HIGH FIRE RISK", "Severe fire danger - Take precautions")
            }
            (WarningCategory::Seismic, WarningSeverity::Critical) => {
                ("MAJOR EARTHQUAKE", "Major seismic activity - Take cover immediately!")
            }
            (WarningCategory::Seismic, WarningSeverity::High) => {
                ("SIGNIFICANT QUAKE", "Substantial seismic activity - Stay alert")
            }
        };

        Self {
            category,
            kind: kind.to_string(),
            message: message.to_string(),
            severity,
        }
    }
}

// ============================================================================
// EVALUATION
// ============================================================================

/// Evaluate with the default thresholds
pub fn evaluate(reading: &EnvironmentalReading) -> Vec<Warning> {
    evaluate_with_thresholds(reading, &WarningThresholds::default())
}

/// Evaluation with custom thresholds
pub fn evaluate_with_thresholds(reading: &EnvironmentalReading, t: &WarningThresholds) -> Vec<Warning> {
    let flood = if reading.rainfall_mm > t.flood_critical_rainfall_mm {
        Some(WarningSeverity::Critical)
    } else if reading.rainfall_mm > t.flood_high_rainfall_mm {
        Some(WarningSeverity::High)
    } else {
        None
    };

    let fire = if reading.temperature_c > t.fire_critical_temperature_c
        && reading.humidity_pct < t.fire_critical_humidity_pct
    {
        Some(WarningSeverity::Critical)
    } else if reading.temperature_c > t.fire_high_temperature_c
        && reading.humidity_pct < t.fire_high_humidity_pct
    {
        Some(WarningSeverity::High)
    } else {
        None
    };

    let seismic = if reading.magnitude > t.seismic_critical_magnitude {
        Some(WarningSeverity::Critical)
    } else if reading.magnitude > t.seismic_high_magnitude {
        Some(WarningSeverity::High)
    } else {
        None
    };

    let warnings: Vec<Warning> = [
        (WarningCategory::Flood, flood),
        (WarningCategory::Fire, fire),
        (WarningCategory::Seismic, seismic),
    ]
    .into_iter()
    .filter_map(|(category, severity)| severity.map(|s| Warning::new(category, s)))
    .collect();

    for warning in &warnings {
        log::info!("Early warning: {} - {}", warning.kind, warning.message);
    }

    warnings
}

// ============================================================================
// TESTS
// ============================================================================
