//! Questionnaire Answers
//!
//! One enum per diagnostic question. Each answer parses from the wording
//! shown on the questionnaire ("No", "Yes - Mild", ...) and from a short
//! kebab-case token for the CLI ("none", "mild", ...).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Answer text that matches none of the question's choices
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{question}: unrecognised answer {given:?}")]
pub struct UnknownAnswer {
    pub question: &'static str,
    pub given: String,
}

/// (variant, questionnaire wording, CLI token)
pub type Choice<T> = (T, &'static str, &'static str);

fn parse_choice<T: Copy>(question: &'static str, choices: &[Choice<T>], s: &str) -> Result<T, UnknownAnswer> {
    let wanted = s.trim();
    choices
        .iter()
        .find(|(_, label, token)| label.eq_ignore_ascii_case(wanted) || token.eq_ignore_ascii_case(wanted))
        .map(|(value, _, _)| *value)
        .ok_or_else(|| UnknownAnswer {
            question,
            given: s.to_string(),
        })
}

fn label_of<T: Copy + PartialEq>(choices: &[Choice<T>], value: T) -> &'static str {
    choices
        .iter()
        .find(|(v, _, _)| *v == value)
        .map(|(_, label, _)| *label)
        .unwrap_or("No")
}

// ============================================================================
// Q1: GROUND SHAKING
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroundShaking {
    #[default]
    None,
    Mild,
    Strong,
}

impl GroundShaking {
    pub const CHOICES: [Choice<Self>; 3] = [
        (Self::None, "No", "none"),
        (Self::Mild, "Yes - Mild", "mild"),
        (Self::Strong, "Yes - Strong", "strong"),
    ];

    pub fn label(&self) -> &'static str {
        label_of(&Self::CHOICES, *self)
    }
}

impl FromStr for GroundShaking {
    type Err = UnknownAnswer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("ground shaking", &Self::CHOICES, s)
    }
}

// ============================================================================
// Q2: VOLCANIC ACTIVITY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VolcanicActivity {
    #[default]
    None,
    #[serde(rename = "smoke-ash")]
    SmokeOrAsh,
    LavaFlow,
}

impl VolcanicActivity {
    pub const CHOICES: [Choice<Self>; 3] = [
        (Self::None, "No", "none"),
        (Self::SmokeOrAsh, "Yes - Smoke/Ash", "smoke-ash"),
        (Self::LavaFlow, "Yes - Lava flow", "lava-flow"),
    ];

    pub fn label(&self) -> &'static str {
        label_of(&Self::CHOICES, *self)
    }
}

impl FromStr for VolcanicActivity {
    type Err = UnknownAnswer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("volcanic activity", &Self::CHOICES, s)
    }
}

// ============================================================================
// Q3: EXTREME RAINFALL
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtremeRainfall {
    #[default]
    None,
    Heavy,
    Torrential,
}

impl ExtremeRainfall {
    pub const CHOICES: [Choice<Self>; 3] = [
        (Self::None, "No", "none"),
        (Self::Heavy, "Yes - Heavy rain", "heavy"),
        (Self::Torrential, "Yes - Torrential rain", "torrential"),
    ];

    pub fn label(&self) -> &'static str {
        label_of(&Self::CHOICES, *self)
    }
}

impl FromStr for ExtremeRainfall {
    type Err = UnknownAnswer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("extreme rainfall", &Self::CHOICES, s)
    }
}

// ============================================================================
// Q4: OCEANIC ANOMALY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OceanicAnomaly {
    #[default]
    None,
    HighWaves,
    CoastalFlooding,
}

impl OceanicAnomaly {
    pub const CHOICES: [Choice<Self>; 3] = [
        (Self::None, "No", "none"),
        (Self::HighWaves, "Yes - High waves", "high-waves"),
        (Self::CoastalFlooding, "Yes - Coastal flooding", "coastal-flooding"),
    ];

    pub fn label(&self) -> &'static str {
        label_of(&Self::CHOICES, *self)
    }
}

impl FromStr for OceanicAnomaly {
    type Err = UnknownAnswer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("oceanic anomaly", &Self::CHOICES, s)
    }
}

// ============================================================================
// Q5: FIRE OR SMOKE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FireOrSmoke {
    #[default]
    None,
    SmallFire,
    LargeWildfire,
}

impl FireOrSmoke {
    pub const CHOICES: [Choice<Self>; 3] = [
        (Self::None, "No", "none"),
        (Self::SmallFire, "Yes - Small fire", "small-fire"),
        (Self::LargeWildfire, "Yes - Large wildfire", "large-wildfire"),
    ];

    pub fn label(&self) -> &'static str {
        label_of(&Self::CHOICES, *self)
    }
}

impl FromStr for FireOrSmoke {
    type Err = UnknownAnswer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("fire or smoke", &Self::CHOICES, s)
    }
}

// ============================================================================
// ALL ANSWERS
// ============================================================================

/// The five answers of one questionnaire. Unreached questions keep `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionnaireAnswers {
    pub ground_shaking: GroundShaking,
    pub volcanic_activity: VolcanicActivity,
    pub extreme_rainfall: ExtremeRainfall,
    pub oceanic_anomaly: OceanicAnomaly,
    pub fire_or_smoke: FireOrSmoke,
}
