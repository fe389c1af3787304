//! Model Artifact - classifier bundle loading
//!
//! A bundle directory holds the classifier (`model.onnx` or `forest.json`),
//! `label_encoder.json`, `feature_scaler.json`, `feature_names.json` and an
//! optional `manifest.json` of SHA-256 digests. All required files must load
//! or the whole load fails.
//!
//! The bundle is loaded once per process and shared read-only.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::forest::{ForestClassifier, ForestFile};
use super::inference::ProbabilisticClassifier;
use super::onnx::OnnxClassifier;
use super::scaler::{FeatureScaler, ScalerParams};
use crate::logic::features::{layout::first_name_mismatch, FEATURE_LAYOUT};
use crate::logic::hazard::HazardClass;

pub const ONNX_FILE: &str = "model.onnx";
pub const FOREST_FILE: &str = "forest.json";
pub const LABELS_FILE: &str = "label_encoder.json";
pub const SCALER_FILE: &str = "feature_scaler.json";
pub const FEATURES_FILE: &str = "feature_names.json";
pub const MANIFEST_FILE: &str = "manifest.json";

/// Process-wide artifact
static SHARED_ARTIFACT: OnceCell<ModelArtifact> = OnceCell::new();

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact component missing: {0}")]
    Missing(PathBuf),

    #[error("no classifier in {0} (expected model.onnx or forest.json)")]
    NoClassifier(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("label encoder: {0}")]
    Labels(String),

    #[error("scaler must hold 7 finite means and scales (got {mean} / {scale})")]
    ScalerWidth { mean: usize, scale: usize },

    #[error("feature list differs from the expected layout at position {index}: expected {expected:?}, got {actual:?}")]
    FeatureOrder {
        index: usize,
        expected: Option<&'static str>,
        actual: Option<String>,
    },

    #[error("classifier has {classifier} classes but the label encoder has {labels}")]
    ClassCount { classifier: usize, labels: usize },

    #[error("checksum mismatch for {file}: expected {expected}, got {actual}")]
    Checksum {
        file: String,
        expected: String,
        actual: String,
    },

    #[error("{backend} classifier: {message}")]
    Classifier { backend: &'static str, message: String },
}

// ============================================================================
// ON-DISK SHAPES
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoderFile {
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub files: BTreeMap<String, String>,
}

// ============================================================================
// ARTIFACT
// ============================================================================

/// Loaded, cross-checked classifier bundle
pub struct ModelArtifact {
    dir: PathBuf,
    classifier: Box<dyn ProbabilisticClassifier>,
    labels: Vec<HazardClass>,
    scaler: FeatureScaler,
    feature_names: Vec<String>,
    verified_files: usize,
    loaded_at: DateTime<Local>,
}

impl std::fmt::Debug for ModelArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelArtifact")
            .field("dir", &self.dir)
            .field("method", &self.classifier.method())
            .field("labels", &self.labels)
            .field("verified_files", &self.verified_files)
            .finish()
    }
}

/// Artifact summary for status output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactInfo {
    pub dir: String,
    pub method: String,
    pub labels: Vec<HazardClass>,
    pub feature_names: Vec<String>,
    pub verified_files: usize,
    pub loaded_at: DateTime<Local>,
}

impl ModelArtifact {
    /// Load and cross-check every component in `dir`
    pub fn load(dir: &Path) -> Result<Self, ArtifactError> {
        log::info!("Loading model artifact from: {}", dir.display());

        let verified_files = verify_manifest(dir)?;

        let labels = load_labels(dir)?;
        let scaler = load_scaler(dir)?;
        let feature_names = load_feature_names(dir)?;
        let classifier = load_classifier(dir)?;

        if let Some(classes) = classifier.n_classes() {
            if classes != labels.len() {
                return Err(ArtifactError::ClassCount {
                    classifier: classes,
                    labels: labels.len(),
                });
            }
        }

        log::info!(
            "Model artifact loaded: {} backend, {} classes, {} checksums verified",
            classifier.method(),
            labels.len(),
            verified_files
        );

        Ok(Self {
            dir: dir.to_path_buf(),
            classifier,
            labels,
            scaler,
            feature_names,
            verified_files,
            loaded_at: Local::now(),
        })
    }

    pub fn classifier(&self) -> &dyn ProbabilisticClassifier {
        self.classifier.as_ref()
    }

    /// Hazard class per classifier output index
    pub fn labels(&self) -> &[HazardClass] {
        &self.labels
    }

    pub fn scaler(&self) -> &FeatureScaler {
        &self.scaler
    }

    pub fn info(&self) -> ArtifactInfo {
        ArtifactInfo {
            dir: self.dir.display().to_string(),
            method: self.classifier.method().to_string(),
            labels: self.labels.clone(),
            feature_names: self.feature_names.clone(),
            verified_files: self.verified_files,
            loaded_at: self.loaded_at,
        }
    }
}

// ============================================================================
// SHARED INSTANCE
// ============================================================================

/// Load the process-wide artifact on first call; later calls return it as is
pub fn shared(dir: &Path) -> Result<&'static ModelArtifact, ArtifactError> {
    let artifact = SHARED_ARTIFACT.get_or_try_init(|| ModelArtifact::load(dir))?;
    if artifact.dir != dir {
        log::warn!(
            "Model artifact already loaded from {}; ignoring {}",
            artifact.dir.display(),
            dir.display()
        );
    }
    Ok(artifact)
}

// ============================================================================
// COMPONENT LOADERS
// ============================================================================

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::Missing(path.to_path_buf()));
    }
    let bytes = std::fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn check_labels(labels: &[HazardClass]) -> Result<(), ArtifactError> {
    if labels.is_empty() {
        return Err(ArtifactError::Labels("no classes".to_string()));
    }
    for (i, label) in labels.iter().enumerate() {
        if labels[..i].contains(label) {
            return Err(ArtifactError::Labels(format!("duplicate class {label}")));
        }
    }
    Ok(())
}

fn load_labels(dir: &Path) -> Result<Vec<HazardClass>, ArtifactError> {
    let file: LabelEncoderFile = read_json(&dir.join(LABELS_FILE))?;
    let labels = file
        .classes
        .iter()
        .map(|name| name.parse::<HazardClass>().map_err(|e| ArtifactError::Labels(e.to_string())))
        .collect::<Result<Vec<_>, _>>()?;
    check_labels(&labels)?;
    Ok(labels)
}

fn load_scaler(dir: &Path) -> Result<FeatureScaler, ArtifactError> {
    let params: ScalerParams = read_json(&dir.join(SCALER_FILE))?;
    FeatureScaler::from_params(&params).ok_or(ArtifactError::ScalerWidth {
        mean: params.mean.len(),
        scale: params.scale.len(),
    })
}

fn load_feature_names(dir: &Path) -> Result<Vec<String>, ArtifactError> {
    let names: Vec<String> = read_json(&dir.join(FEATURES_FILE))?;
    if let Some(index) = first_name_mismatch(&names) {
        return Err(ArtifactError::FeatureOrder {
            index,
            expected: FEATURE_LAYOUT.get(index).copied(),
            actual: names.get(index).cloned(),
        });
    }
    Ok(names)
}

/// `model.onnx` wins when both classifiers are present
fn load_classifier(dir: &Path) -> Result<Box<dyn ProbabilisticClassifier>, ArtifactError> {
    let onnx_path = dir.join(ONNX_FILE);
    if onnx_path.exists() {
        let classifier = OnnxClassifier::load(&onnx_path).map_err(|message| ArtifactError::Classifier {
            backend: "onnx",
            message,
        })?;
        return Ok(Box::new(classifier));
    }

    let forest_path = dir.join(FOREST_FILE);
    if forest_path.exists() {
        let file: ForestFile = read_json(&forest_path)?;
        let classifier = ForestClassifier::from_file(&file).map_err(|message| ArtifactError::Classifier {
            backend: "random_forest",
            message,
        })?;
        log::info!("Random forest loaded: {} trees", classifier.tree_count());
        return Ok(Box::new(classifier));
    }

    Err(ArtifactError::NoClassifier(dir.to_path_buf()))
}

// ============================================================================
// INTEGRITY
// ============================================================================

/// SHA-256 of a file, hex encoded
pub fn file_digest(path: &Path) -> Result<String, ArtifactError> {
    let bytes = std::fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}

/// Check every digest listed in `manifest.json`. No manifest = nothing to verify.
fn verify_manifest(dir: &Path) -> Result<usize, ArtifactError> {
    let manifest_path = dir.join(MANIFEST_FILE);
    if !manifest_path.exists() {
        log::debug!("No manifest in {}, skipping checksum verification", dir.display());
        return Ok(0);
    }

    let manifest: Manifest = read_json(&manifest_path)?;
    for (file, expected) in &manifest.files {
        let path = dir.join(file);
        if !path.exists() {
            return Err(ArtifactError::Missing(path));
        }
        let actual = file_digest(&path)?;
        if !actual.eq_ignore_ascii_case(expected.trim()) {
            return Err(ArtifactError::Checksum {
                file: file.clone(),
                expected: expected.clone(),
                actual,
            });
        }
    }

    Ok(manifest.files.len())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    /// Minimal valid bundle, also used wherever a test reaches the
    /// process-wide artifact. Averaged output:
    /// rainfall <= 150 mm → [12.5, 12.5, 75] (None),
    /// rainfall > 150 mm → [12.5, 62.5, 25] (Flood).
    pub(crate) fn write_bundle(dir: &Path) {
        let forest = json!({
            "n_classes": 3,
            "trees": [
                {
                    "children_left": [1, -1, -1],
                    "children_right": [2, -1, -1],
                    "feature": [0, -2, -2],
                    "threshold": [1.0, -2.0, -2.0],
                    "value": [[0.0, 5.0, 5.0], [0.0, 0.0, 4.0], [0.0, 4.0, 0.0]]
                },
                {
                    "children_left": [-1],
                    "children_right": [-1],
                    "feature": [-2],
                    "threshold": [-2.0],
                    "value": [[1.0, 1.0, 2.0]]
                }
            ]
        });
        std::fs::write(dir.join(FOREST_FILE), forest.to_string()).unwrap();
        std::fs::write(
            dir.join(LABELS_FILE),
            json!({"classes": ["Earthquake", "Flood", "None"]}).to_string(),
        )
        .unwrap();
        std::fs::write(
            dir.join(SCALER_FILE),
            json!({
                "mean": [100.0, 50.0, 25.0, 20.0, 40.0, 2.0, 10.0],
                "scale": [50.0, 20.0, 10.0, 10.0, 20.0, 1.5, 10.0]
            })
            .to_string(),
        )
        .unwrap();
        std::fs::write(dir.join(FEATURES_FILE), json!(FEATURE_LAYOUT).to_string()).unwrap();
    }

    #[test]
    fn test_load_bundle() {
        let dir = tempfile::tempdir().unwrap();
        write_bundle(dir.path());

        let artifact = ModelArtifact::load(dir.path()).unwrap();
        assert_eq!(artifact.labels(), &[HazardClass::Earthquake, HazardClass::Flood, HazardClass::None]);
        assert_eq!(artifact.classifier().method(), "random_forest");
        assert_eq!(artifact.info().verified_files, 0);
    }

    #[test]
    fn test_missing_component_fails_whole_load() {
        for file in [LABELS_FILE, SCALER_FILE, FEATURES_FILE] {
            let dir = tempfile::tempdir().unwrap();
            write_bundle(dir.path());
            std::fs::remove_file(dir.path().join(file)).unwrap();
            assert!(matches!(ModelArtifact::load(dir.path()), Err(ArtifactError::Missing(_))), "{file}");
        }

        let dir = tempfile::tempdir().unwrap();
        write_bundle(dir.path());
        std::fs::remove_file(dir.path().join(FOREST_FILE)).unwrap();
        assert!(matches!(ModelArtifact::load(dir.path()), Err(ArtifactError::NoClassifier(_))));
    }

    #[test]
    fn test_reordered_features_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_bundle(dir.path());
        let mut names: Vec<&str> = FEATURE_LAYOUT.to_vec();
        names.swap(1, 2);
        std::fs::write(dir.path().join(FEATURES_FILE), json!(names).to_string()).unwrap();

        match ModelArtifact::load(dir.path()) {
            Err(ArtifactError::FeatureOrder { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected FeatureOrder, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_bundle(dir.path());
        std::fs::write(
            dir.path().join(LABELS_FILE),
            json!({"classes": ["Earthquake", "Flood", "Meteor"]}).to_string(),
        )
        .unwrap();
        assert!(matches!(ModelArtifact::load(dir.path()), Err(ArtifactError::Labels(_))));
    }

    #[test]
    fn test_class_count_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        write_bundle(dir.path());
        std::fs::write(
            dir.path().join(LABELS_FILE),
            json!({"classes": ["Earthquake", "Flood"]}).to_string(),
        )
        .unwrap();
        assert!(matches!(
            ModelArtifact::load(dir.path()),
            Err(ArtifactError::ClassCount { classifier: 3, labels: 2 })
        ));
    }

    #[test]
    fn test_scaler_width() {
        let dir = tempfile::tempdir().unwrap();
        write_bundle(dir.path());
        std::fs::write(
            dir.path().join(SCALER_FILE),
            json!({"mean": [0.0, 0.0], "scale": [1.0, 1.0]}).to_string(),
        )
        .unwrap();
        assert!(matches!(
            ModelArtifact::load(dir.path()),
            Err(ArtifactError::ScalerWidth { mean: 2, scale: 2 })
        ));
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        write_bundle(dir.path());
        std::fs::write(dir.path().join(SCALER_FILE), "{not json").unwrap();
        assert!(matches!(ModelArtifact::load(dir.path()), Err(ArtifactError::Json { .. })));
    }

    #[test]
    fn test_manifest_checksums() {
        let dir = tempfile::tempdir().unwrap();
        write_bundle(dir.path());

        let digest = file_digest(&dir.path().join(FOREST_FILE)).unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            json!({"files": {FOREST_FILE: digest}}).to_string(),
        )
        .unwrap();
        assert_eq!(ModelArtifact::load(dir.path()).unwrap().info().verified_files, 1);

        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            json!({"files": {FOREST_FILE: "00".repeat(32)}}).to_string(),
        )
        .unwrap();
        assert!(matches!(ModelArtifact::load(dir.path()), Err(ArtifactError::Checksum { .. })));
    }

    #[test]
    fn test_shared_artifact_is_loaded_once() {
        let dir = tempfile::tempdir().unwrap();
        write_bundle(dir.path());

        let first = shared(dir.path()).unwrap();
        // Later calls return the same instance without touching the new path
        let again = shared(Path::new("/nonexistent/bundle")).unwrap();
        assert!(std::ptr::eq(first, again));
    }
}
