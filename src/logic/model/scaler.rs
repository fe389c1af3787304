//! Feature Scaler
//!
//! Standardisation fitted at training time: `(x - mean) / scale`.
//! A zero scale (constant training column) is treated as 1.

use serde::{Deserialize, Serialize};

use crate::logic::features::FEATURE_COUNT;

/// On-disk form of `feature_scaler.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Width-checked scaler, one (mean, scale) pair per layout feature
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureScaler {
    mean: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
}

impl FeatureScaler {
    /// Returns `None` unless both vectors hold exactly `FEATURE_COUNT` finite values
    pub fn from_params(params: &ScalerParams) -> Option<Self> {
        let mean: [f64; FEATURE_COUNT] = params.mean.as_slice().try_into().ok()?;
        let scale: [f64; FEATURE_COUNT] = params.scale.as_slice().try_into().ok()?;

        if mean.iter().chain(scale.iter()).any(|v| !v.is_finite()) {
            return None;
        }

        Some(Self { mean, scale })
    }

    pub fn transform(&self, values: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let mut scaled = [0.0; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            let scale = if self.scale[i] == 0.0 { 1.0 } else { self.scale[i] };
            scaled[i] = (values[i] - self.mean[i]) / scale;
        }
        scaled
    }
}
