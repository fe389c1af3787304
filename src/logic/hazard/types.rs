//! Hazard Types
//!
//! Core types shared by the logical engine, the classifier and the log.
//! No logic here, only data structures.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// HAZARD CLASS
// ============================================================================

/// The six mutually exclusive hazard categories, including "no hazard".
///
/// The canonical names (`as_str`) are the label space of both the logical
/// engine and the classifier's label encoder, and are what the log stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HazardClass {
    None,
    Earthquake,
    Flood,
    Wildfire,
    Tsunami,
    Volcano,
}

impl HazardClass {
    pub const ALL: [HazardClass; 6] = [
        HazardClass::None,
        HazardClass::Earthquake,
        HazardClass::Flood,
        HazardClass::Wildfire,
        HazardClass::Tsunami,
        HazardClass::Volcano,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HazardClass::None => "None",
            HazardClass::Earthquake => "Earthquake",
            HazardClass::Flood => "Flood",
            HazardClass::Wildfire => "Wildfire",
            HazardClass::Tsunami => "Tsunami",
            HazardClass::Volcano => "Volcano",
        }
    }

    pub fn is_hazard(&self) -> bool {
        *self != HazardClass::None
    }
}

impl std::fmt::Display for HazardClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Label that does not name any hazard class
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hazard class: {0:?}")]
pub struct UnknownHazard(pub String);

impl FromStr for HazardClass {
    type Err = UnknownHazard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        HazardClass::ALL
            .iter()
            .copied()
            .find(|h| h.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownHazard(s.to_string()))
    }
}

// ============================================================================
// CONFIDENCE LABEL (logical engine)
// ============================================================================

/// Qualitative confidence of the logical verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConfidenceLabel {
    Low,
    Medium,
    High,
}

impl ConfidenceLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLabel::Low => "Low",
            ConfidenceLabel::Medium => "Medium",
            ConfidenceLabel::High => "High",
        }
    }
}

impl std::fmt::Display for ConfidenceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RISK LEVEL
// ============================================================================

/// Reconciled risk tier, ordered `None < Low < Medium < High`.
///
/// `None` is reserved for `HazardClass::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    None,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::None => "none",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SCORE BREAKDOWN
// ============================================================================

/// How the full-context risk score was assembled
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RiskScore {
    /// confidence / 100 * 40
    pub confidence_contribution: f64,
    /// +30 when the hazard-gated severity rule fires, else 0
    pub severity_bonus: f64,
    pub total: f64,
}
