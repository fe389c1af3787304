//! Features Module - Feature Schema & Validation
//!
//! Raw readings, the canonical 7-feature layout the classifier was trained
//! on, and the validated `FeatureVector` built from them.

pub mod layout;
pub mod reading;
pub mod vector;

#[cfg(test)]
mod tests;

// Re-export common types
pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION, LayoutInfo, LayoutMismatchError};
pub use reading::{EnvironmentalReading, InputBoundsError, INPUT_BOUNDS};
pub use vector::{FeatureError, FeatureVector};
