//! Feature Vector
//!
//! Classifier input, stamped with the layout it was built for.
//!
//! A `FeatureVector` can only be built through validated construction, so an
//! out-of-order, wrong-length or non-finite input is caught at the boundary
//! instead of silently corrupting a prediction.

use serde::Serialize;

use super::layout::{
    layout_hash, validate_layout, LayoutMismatchError, FEATURE_COUNT, FEATURE_LAYOUT,
    FEATURE_VERSION,
};
use super::reading::EnvironmentalReading;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeatureError {
    #[error("expected {expected} features, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("{feature} = {value}: {reason}")]
    InvalidValue {
        feature: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error(transparent)]
    LayoutMismatch(#[from] LayoutMismatchError),
}

// ============================================================================
// VECTOR
// ============================================================================

/// Versioned feature vector with layout metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    version: u8,
    layout_hash: u32,
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Build from a reading, checking every value
    pub fn from_reading(reading: &EnvironmentalReading) -> Result<Self, FeatureError> {
        Self::from_values(reading.to_array())
    }

    /// Build from values in `FEATURE_LAYOUT` order
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Result<Self, FeatureError> {
        for (index, &value) in values.iter().enumerate() {
            check_value(index, value)?;
        }

        Ok(Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values,
        })
    }

    /// Build from a slice, rejecting anything that is not exactly 7 long
    pub fn from_slice(values: &[f64]) -> Result<Self, FeatureError> {
        let array: [f64; FEATURE_COUNT] = values.try_into().map_err(|_| FeatureError::WrongLength {
            expected: FEATURE_COUNT,
            actual: values.len(),
        })?;
        Self::from_values(array)
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn layout_hash(&self) -> u32 {
        self.layout_hash
    }

    /// Values in layout order
    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    /// Re-check the stamp against this build's layout
    pub fn validate(&self) -> Result<(), LayoutMismatchError> {
        validate_layout(self.version, self.layout_hash)
    }

    #[cfg(test)]
    pub(crate) fn restamped(mut self, version: u8, hash: u32) -> Self {
        self.version = version;
        self.layout_hash = hash;
        self
    }
}

// ============================================================================
// VALUE CHECKS
// ============================================================================

/// Data-model invariants per feature (not the collector's UI ranges)
fn check_value(index: usize, value: f64) -> Result<(), FeatureError> {
    let feature = FEATURE_LAYOUT[index];
    let invalid = |reason| FeatureError::InvalidValue { feature, value, reason };

    if !value.is_finite() {
        return Err(invalid("must be finite"));
    }

    match feature {
        "Humidity_%" | "Soil_Moisture_%" if !(0.0..=100.0).contains(&value) => {
            Err(invalid("percentage must be within [0, 100]"))
        }
        "Rainfall_mm" | "Wind_Speed_kmph" | "Magnitude" | "Depth_km" if value < 0.0 => {
            Err(invalid("must not be negative"))
        }
        _ => Ok(()),
    }
}

// ============================================================================
// TESTS
// ============================================================================
