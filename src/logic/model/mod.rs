//! Model Module - Classifier Inference Engine
//!
//! Artifact loading is kept apart from inference so the backend can be
//! swapped (ONNX Runtime or an exported tree ensemble).

pub mod artifact;
pub mod scaler;
pub mod forest;
pub mod onnx;
pub mod inference;

// Re-export common types
pub use artifact::{ArtifactError, ArtifactInfo, ModelArtifact};
pub use inference::{
    ClassProbability, ClassifierInferenceEngine, ClassifierVerdict, InferenceError,
    ProbabilisticClassifier,
};
pub use scaler::FeatureScaler;
