//! Hazard Module
//!
//! Hazard classes, risk levels, and the risk fusion step that turns a
//! classifier verdict plus raw readings into one of {none, low, medium, high}.
//!
//! ## Structure
//! - `types`: HazardClass, ConfidenceLabel, RiskLevel, RiskScore
//! - `rules`: fusion weights and thresholds
//! - `fusion`: the two risk entry points

pub mod types;
pub mod rules;
pub mod fusion;

pub use types::{ConfidenceLabel, HazardClass, RiskLevel, RiskScore, UnknownHazard};

pub use fusion::{
    full_context_score,
    level_for_score,
    risk_from_confidence_only,
    risk_from_full_context,
};
