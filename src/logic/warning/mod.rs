//! Early Warning Module
//!
//! ## Structure
//! - `rules`: thresholds (constants + configurable set)
//! - `evaluator`: threshold scan producing `Warning`s

pub mod rules;
pub mod evaluator;

pub use rules::WarningThresholds;
pub use evaluator::{evaluate, evaluate_with_thresholds, Warning, WarningCategory, WarningSeverity};
