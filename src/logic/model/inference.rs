//! Inference Engine - Classifier Integration
//!
//! Runs the artifact's classifier over a validated feature vector and turns
//! the raw class distribution into a `ClassifierVerdict`.
//!
//! Backends (ONNX, tree ensemble) sit behind `ProbabilisticClassifier` so
//! the model can be swapped without touching the pipeline.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::artifact::ModelArtifact;
use crate::logic::features::{
    EnvironmentalReading, FeatureError, FeatureVector, LayoutMismatchError, FEATURE_COUNT,
};
use crate::logic::hazard::HazardClass;

// ============================================================================
// STATE
// ============================================================================

/// Latency stats
static LATENCY_SUM: AtomicU64 = AtomicU64::new(0);
static INFERENCE_COUNT: AtomicU64 = AtomicU64::new(0);

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error(transparent)]
    Feature(#[from] FeatureError),

    #[error(transparent)]
    Layout(#[from] LayoutMismatchError),

    #[error("{backend} backend failed: {message}")]
    Backend { backend: &'static str, message: String },

    #[error("classifier returned {actual} probabilities for {expected} labels")]
    ClassCount { expected: usize, actual: usize },

    #[error("degenerate class distribution: {0}")]
    Degenerate(&'static str),
}

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// A multi-class classifier producing one probability per label-encoder index
pub trait ProbabilisticClassifier: Send + Sync {
    /// Class distribution for one already-scaled sample
    fn predict_proba(&self, scaled: &[f64; FEATURE_COUNT]) -> Result<Vec<f64>, InferenceError>;

    /// Number of classes, when the backend knows it before running
    fn n_classes(&self) -> Option<usize>;

    /// Backend name reported in verdicts
    fn method(&self) -> &'static str;
}

// ============================================================================
// VERDICT
// ============================================================================

/// Probability of one hazard class, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassProbability {
    pub hazard: HazardClass,
    pub percent: f64,
}

/// Classifier output for one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierVerdict {
    /// Argmax class (first maximum on ties)
    pub hazard: HazardClass,
    /// Percentages in label-encoder order, summing to 100
    pub probabilities: Vec<ClassProbability>,
    /// Percentage of the argmax class
    pub confidence: f64,
    pub method: String,
    pub inference_time_us: u64,
}

impl ClassifierVerdict {
    pub fn probability(&self, hazard: HazardClass) -> Option<f64> {
        self.probabilities
            .iter()
            .find(|p| p.hazard == hazard)
            .map(|p| p.percent)
    }

    /// Probabilities sorted descending (stable, so ties keep encoder order)
    pub fn ranked(&self) -> Vec<ClassProbability> {
        let mut ranked = self.probabilities.clone();
        ranked.sort_by(|a, b| b.percent.total_cmp(&a.percent));
        ranked
    }
}

/// Turn a raw distribution into a verdict: renormalise to percentages,
/// pick the first maximum.
pub fn verdict_from_distribution(
    labels: &[HazardClass],
    raw: &[f64],
    method: &str,
) -> Result<ClassifierVerdict, InferenceError> {
    if raw.is_empty() {
        return Err(InferenceError::Degenerate("empty distribution"));
    }
    if raw.len() != labels.len() {
        return Err(InferenceError::ClassCount {
            expected: labels.len(),
            actual: raw.len(),
        });
    }
    if raw.iter().any(|p| !p.is_finite() || *p < 0.0) {
        return Err(InferenceError::Degenerate("non-finite or negative probability"));
    }

    let sum: f64 = raw.iter().sum();
    if sum <= 0.0 {
        return Err(InferenceError::Degenerate("probabilities sum to zero"));
    }

    let probabilities: Vec<ClassProbability> = labels
        .iter()
        .zip(raw)
        .map(|(&hazard, p)| ClassProbability {
            hazard,
            percent: p / sum * 100.0,
        })
        .collect();

    let mut best = 0;
    for (i, p) in probabilities.iter().enumerate() {
        if p.percent > probabilities[best].percent {
            best = i;
        }
    }

    Ok(ClassifierVerdict {
        hazard: probabilities[best].hazard,
        confidence: probabilities[best].percent,
        probabilities,
        method: method.to_string(),
        inference_time_us: 0,
    })
}

// ============================================================================
// ENGINE
// ============================================================================

/// Classifier inference over a loaded artifact
pub struct ClassifierInferenceEngine<'a> {
    artifact: &'a ModelArtifact,
}

impl<'a> ClassifierInferenceEngine<'a> {
    pub fn new(artifact: &'a ModelArtifact) -> Self {
        Self { artifact }
    }

    /// validate layout → scale → classify → label → argmax
    pub fn infer(&self, vector: &FeatureVector) -> Result<ClassifierVerdict, InferenceError> {
        let start_time = std::time::Instant::now();

        vector.validate()?;

        let scaled = self.artifact.scaler().transform(vector.as_array());
        let classifier = self.artifact.classifier();
        let raw = classifier.predict_proba(&scaled)?;

        let mut verdict = verdict_from_distribution(self.artifact.labels(), &raw, classifier.method())?;

        let elapsed = start_time.elapsed().as_micros() as u64;
        verdict.inference_time_us = elapsed;
        LATENCY_SUM.fetch_add(elapsed, Ordering::Relaxed);
        INFERENCE_COUNT.fetch_add(1, Ordering::Relaxed);

        log::debug!(
            "Classifier ({}) -> {} at {:.2}% in {}us",
            verdict.method, verdict.hazard, verdict.confidence, elapsed
        );

        Ok(verdict)
    }

    /// Validate a raw reading into a vector, then infer
    pub fn infer_reading(&self, reading: &EnvironmentalReading) -> Result<ClassifierVerdict, InferenceError> {
        let vector = FeatureVector::from_reading(reading)?;
        self.infer(&vector)
    }
}

// ============================================================================
// STATUS
// ============================================================================

/// Engine Status for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub inference_count: u64,
    pub avg_latency_ms: f64,
}

pub fn get_status() -> EngineStatus {
    let sum = LATENCY_SUM.load(Ordering::Relaxed);
    let count = INFERENCE_COUNT.load(Ordering::Relaxed);
    let avg = if count > 0 { (sum as f64 / count as f64) / 1000.0 } else { 0.0 };

    EngineStatus {
        inference_count: count,
        avg_latency_ms: avg,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: [HazardClass; 3] = [HazardClass::Earthquake, HazardClass::Flood, HazardClass::None];

    #[test]
    fn test_renormalises_to_percent() {
        let verdict = verdict_from_distribution(&LABELS, &[0.1, 0.6, 0.3], "test").unwrap();
        assert_eq!(verdict.hazard, HazardClass::Flood);
        assert!((verdict.confidence - 60.0).abs() < 1e-9);

        let total: f64 = verdict.probabilities.iter().map(|p| p.percent).sum();
        assert!((total - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_unnormalised_input() {
        let verdict = verdict_from_distribution(&LABELS, &[2.0, 1.0, 1.0], "test").unwrap();
        assert_eq!(verdict.hazard, HazardClass::Earthquake);
        assert!((verdict.confidence - 50.0).abs() < 1e-9);
        assert_eq!(verdict.probability(HazardClass::None), Some(25.0));
    }

    #[test]
    fn test_ties_go_to_first_index() {
        let verdict = verdict_from_distribution(&LABELS, &[0.2, 0.4, 0.4], "test").unwrap();
        assert_eq!(verdict.hazard, HazardClass::Flood);

        let ranked = verdict.ranked();
        assert_eq!(ranked[0].hazard, HazardClass::Flood);
        assert_eq!(ranked[1].hazard, HazardClass::None);
        assert_eq!(ranked[2].hazard, HazardClass::Earthquake);
    }

    #[test]
    fn test_degenerate_distributions() {
        assert!(matches!(
            verdict_from_distribution(&[], &[], "test"),
            Err(InferenceError::Degenerate(_))
        ));
        assert!(matches!(
            verdict_from_distribution(&LABELS, &[0.0, 0.0, 0.0], "test"),
            Err(InferenceError::Degenerate(_))
        ));
        assert!(matches!(
            verdict_from_distribution(&LABELS, &[f64::NAN, 0.5, 0.5], "test"),
            Err(InferenceError::Degenerate(_))
        ));
        assert!(matches!(
            verdict_from_distribution(&LABELS, &[0.5, 0.5], "test"),
            Err(InferenceError::ClassCount { expected: 3, actual: 2 })
        ));
    }
}
