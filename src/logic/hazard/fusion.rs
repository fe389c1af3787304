//! Risk Fusion
//!
//! Combines classifier confidence with raw reading severity into a risk level.
//! Input: confidence (%), HazardClass, EnvironmentalReading
//! Output: RiskLevel
//!
//! Two entry points with different contracts:
//! - `risk_from_full_context` for fresh predictions (readings available)
//! - `risk_from_confidence_only` for log replay (readings not consulted)
//!
//! They intentionally use different rules and may disagree for the same
//! (confidence, hazard) pair.

use super::rules::{
    CONFIDENCE_WEIGHT, EARTHQUAKE_MAGNITUDE, FLOOD_RAINFALL_MM, HIGH_CONFIDENCE_PCT,
    HIGH_SCORE, MEDIUM_CONFIDENCE_PCT, MEDIUM_SCORE, SEVERITY_BONUS, WILDFIRE_TEMPERATURE_C,
};
use super::types::{HazardClass, RiskLevel, RiskScore};
use crate::logic::features::EnvironmentalReading;

// ============================================================================
// FULL CONTEXT
// ============================================================================

/// Weighted score for a fresh prediction.
///
/// Only the bonus matching `hazard` can fire, so at most one +30 applies.
pub fn full_context_score(confidence: f64, hazard: HazardClass, reading: &EnvironmentalReading) -> RiskScore {
    let confidence_contribution = confidence / 100.0 * CONFIDENCE_WEIGHT;

    let severe = match hazard {
        HazardClass::Flood => reading.rainfall_mm > FLOOD_RAINFALL_MM,
        HazardClass::Wildfire => reading.temperature_c > WILDFIRE_TEMPERATURE_C,
        HazardClass::Earthquake => reading.magnitude > EARTHQUAKE_MAGNITUDE,
        HazardClass::None | HazardClass::Tsunami | HazardClass::Volcano => false,
    };
    let severity_bonus = if severe { SEVERITY_BONUS } else { 0.0 };

    RiskScore {
        confidence_contribution,
        severity_bonus,
        total: confidence_contribution + severity_bonus,
    }
}

/// Map a full-context score onto a risk level (strict thresholds)
pub fn level_for_score(score: f64) -> RiskLevel {
    if score > HIGH_SCORE {
        RiskLevel::High
    } else if score > MEDIUM_SCORE {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Risk level for a fresh prediction with its original readings
pub fn risk_from_full_context(confidence: f64, hazard: HazardClass, reading: &EnvironmentalReading) -> RiskLevel {
    if hazard == HazardClass::None {
        return RiskLevel::None;
    }

    let score = full_context_score(confidence, hazard, reading);
    log::debug!(
        "Risk score for {}: {:.2} (confidence {:.2} + bonus {:.0})",
        hazard, score.total, score.confidence_contribution, score.severity_bonus
    );
    level_for_score(score.total)
}

// ============================================================================
// CONFIDENCE ONLY
// ============================================================================

/// Risk level for a historical log row (confidence and hazard only)
pub fn risk_from_confidence_only(confidence: f64, hazard: HazardClass) -> RiskLevel {
    if hazard == HazardClass::None {
        return RiskLevel::None;
    }

    if confidence >= HIGH_CONFIDENCE_PCT {
        RiskLevel::High
    } else if confidence >= MEDIUM_CONFIDENCE_PCT {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

// ============================================================================
// TESTS
// ============================================================================
