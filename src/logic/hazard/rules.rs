//! Risk Fusion Rules & Thresholds
//!
//! Constants for the two risk entry points.
//! No fusion logic here, only constants.

// ============================================================================
// FULL-CONTEXT SCORE
// ============================================================================

/// Points contributed by classifier confidence at 100%
pub const CONFIDENCE_WEIGHT: f64 = 40.0;

/// Points added when the hazard-gated severity rule fires
pub const SEVERITY_BONUS: f64 = 30.0;

/// Flood bonus requires rainfall strictly above this (mm)
pub const FLOOD_RAINFALL_MM: f64 = 150.0;

/// Wildfire bonus requires temperature strictly above this (°C)
pub const WILDFIRE_TEMPERATURE_C: f64 = 35.0;

/// Earthquake bonus requires magnitude strictly above this
pub const EARTHQUAKE_MAGNITUDE: f64 = 5.0;

/// Score strictly above this = high
pub const HIGH_SCORE: f64 = 70.0;

/// Score strictly above this = medium
pub const MEDIUM_SCORE: f64 = 40.0;

// ============================================================================
// CONFIDENCE-ONLY (historical replay)
// ============================================================================

/// Confidence at or above this = high
pub const HIGH_CONFIDENCE_PCT: f64 = 80.0;

/// Confidence at or above this = medium
pub const MEDIUM_CONFIDENCE_PCT: f64 = 60.0;
