//! Assessment Module
//!
//! Deterministic, rule-based hazard assessment from the five-question
//! diagnostic questionnaire.
//!
//! ## Structure
//! - `answers`: one enum per question + `QuestionnaireAnswers`
//! - `engine`: the decision tree (`assess`)

pub mod answers;
pub mod engine;

pub use answers::{
    ExtremeRainfall, FireOrSmoke, GroundShaking, OceanicAnomaly, QuestionnaireAnswers,
    UnknownAnswer, VolcanicActivity,
};
pub use engine::{assess, LogicalVerdict};
