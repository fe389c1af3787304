use serde::{Deserialize, Serialize};

use crate::logic::features::LayoutInfo;
use crate::logic::model::ArtifactInfo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub app_version: String,
    pub layout: LayoutInfo,

    pub model: ModelStatus,
    pub log: LogStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStatus {
    pub loaded: bool,
    pub artifact: Option<ArtifactInfo>,
    /// Load failure, when not loaded
    pub error: Option<String>,
    pub inference_count: u64,
    pub avg_latency_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogStatus {
    pub path: String,
    pub auto_save: bool,
    pub total_predictions: usize,
}
