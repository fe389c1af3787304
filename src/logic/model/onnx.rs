//! ONNX Backend - ONNX Runtime Integration
//!
//! Loads `model.onnx` and reads the class distribution from the output named
//! `probabilities` (or the last output when no output has that name) as a
//! `[1, n_classes]` float tensor.

use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use super::inference::{InferenceError, ProbabilisticClassifier};
use crate::logic::features::FEATURE_COUNT;

const PROBABILITY_OUTPUT: &str = "probabilities";

/// ONNX Runtime backend. The session needs `&mut` to run, so it sits behind a mutex.
pub struct OnnxClassifier {
    session: Mutex<Session>,
    output_name: String,
}

impl OnnxClassifier {
    /// Load the model file and pick the probability output
    pub fn load(model_path: &Path) -> Result<Self, String> {
        log::info!("Loading ONNX model from: {}", model_path.display());

        if !model_path.exists() {
            return Err(format!("Model not found: {}", model_path.display()));
        }

        let session = Session::builder()
            .map_err(|e| format!("Failed to create session builder: {}", e))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| format!("Failed to set optimization: {}", e))?
            .commit_from_file(model_path)
            .map_err(|e| format!("Failed to load model: {}", e))?;

        let output_name = session
            .outputs
            .iter()
            .find(|o| o.name == PROBABILITY_OUTPUT)
            .or_else(|| session.outputs.last())
            .map(|o| o.name.clone())
            .ok_or_else(|| "No output defined".to_string())?;

        log::info!("ONNX model loaded successfully (output: {})", output_name);

        Ok(Self {
            session: Mutex::new(session),
            output_name,
        })
    }

    fn backend_error(message: String) -> InferenceError {
        InferenceError::Backend {
            backend: "onnx",
            message,
        }
    }
}

impl ProbabilisticClassifier for OnnxClassifier {
    fn predict_proba(&self, scaled: &[f64; FEATURE_COUNT]) -> Result<Vec<f64>, InferenceError> {
        let input: Vec<f32> = scaled.iter().map(|v| *v as f32).collect();
        let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), input)
            .map_err(|e| Self::backend_error(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| Self::backend_error(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| Self::backend_error(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(self.output_name.as_str())
            .ok_or_else(|| Self::backend_error(format!("No output named {}", self.output_name)))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| Self::backend_error(format!("Extract error: {}", e)))?;

        Ok(output_tensor.1.iter().map(|p| *p as f64).collect())
    }

    /// Output width is only known once the model has run
    fn n_classes(&self) -> Option<usize> {
        None
    }

    fn method(&self) -> &'static str {
        "onnx"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_model_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = OnnxClassifier::load(&dir.path().join("model.onnx")).err().unwrap();
        assert!(err.contains("Model not found"));
    }
}
