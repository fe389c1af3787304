//! Logic Module - Assessment Engines
//!
//! ## Layout
//! - `features/` - readings, feature layout, validated vectors
//! - `assessment/` - questionnaire decision tree
//! - `model/` - artifact loading and classifier inference (ONNX, forest)
//! - `hazard/` - hazard types and risk fusion
//! - `warning/` - threshold early warnings
//! - `prediction_log/` - CSV log and history analytics
//! - `pipeline/` - one complete assessment

pub mod config;
pub mod guide;

pub mod features;
pub mod assessment;
pub mod model;
pub mod hazard;
pub mod warning;
pub mod prediction_log;
pub mod pipeline;
