//! Commands - API for the frontend / CLI
//!
//! Predict, history, preparedness guide, engine status.

use serde::{Deserialize, Serialize};

use super::engine_status::{EngineStatus, LogStatus, ModelStatus};
use crate::constants::APP_VERSION;
use crate::logic::assessment::QuestionnaireAnswers;
use crate::logic::config::AppConfig;
use crate::logic::features::{EnvironmentalReading, LayoutInfo};
use crate::logic::guide::{all_guides, guide, HazardGuide};
use crate::logic::hazard::{HazardClass, UnknownHazard};
use crate::logic::model::{artifact, inference, ModelArtifact};
use crate::logic::pipeline::{PredictionOutcome, RiskPipeline};
use crate::logic::prediction_log::{
    agreement_rate, hazard_distribution, parameter_correlations, recent_activity, summary,
    CorrelationMatrix, HistorySummary, PredictionLog, RecentActivity,
};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// One prediction request: raw readings plus questionnaire answers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub reading: EnvironmentalReading,
    #[serde(default)]
    pub answers: QuestionnaireAnswers,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardCount {
    pub hazard: HazardClass,
    pub count: usize,
}

/// History analytics for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryReport {
    pub summary: HistorySummary,
    pub distribution: Vec<HazardCount>,
    pub recent: Vec<RecentActivity>,
    /// Percent of rows where both assessments agreed
    pub agreement_rate: Option<f64>,
    pub correlations: CorrelationMatrix,
}

// ============================================================================
// COMMANDS
// ============================================================================

fn check_bounds(request: &PredictRequest) -> Result<(), String> {
    request.reading.check_input_bounds().map_err(|e| {
        log::warn!("Rejected reading: {}", e);
        e.to_string()
    })
}

/// Run one full assessment. Readings are range-checked before the model loads.
pub fn predict(config: &AppConfig, request: &PredictRequest) -> Result<PredictionOutcome, String> {
    check_bounds(request)?;

    let artifact = artifact::shared(&config.artifact_dir).map_err(|e| e.to_string())?;
    predict_with(artifact, config, request)
}

/// Run one full assessment against an already loaded artifact
pub fn predict_with(
    artifact: &ModelArtifact,
    config: &AppConfig,
    request: &PredictRequest,
) -> Result<PredictionOutcome, String> {
    check_bounds(request)?;
    let pipeline = RiskPipeline::new(artifact, PredictionLog::new(&config.log_path), config.auto_save);

    pipeline
        .evaluate(&request.reading, &request.answers)
        .map_err(|e| e.to_string())
}

/// History analytics over the whole prediction log
pub fn get_history(config: &AppConfig) -> Result<HistoryReport, String> {
    let records = PredictionLog::new(&config.log_path)
        .read_all()
        .map_err(|e| e.to_string())?;

    Ok(HistoryReport {
        summary: summary(&records),
        distribution: hazard_distribution(&records)
            .into_iter()
            .map(|(hazard, count)| HazardCount { hazard, count })
            .collect(),
        recent: recent_activity(&records, config.recent_limit),
        agreement_rate: agreement_rate(&records),
        correlations: parameter_correlations(&records),
    })
}

/// Dashboard counter
pub fn get_prediction_count(config: &AppConfig) -> Result<usize, String> {
    PredictionLog::new(&config.log_path)
        .count()
        .map_err(|e| e.to_string())
}

/// Preparedness guide by hazard name (case-insensitive)
pub fn get_guide(hazard: &str) -> Result<&'static HazardGuide, String> {
    let hazard: HazardClass = hazard.parse().map_err(|e: UnknownHazard| e.to_string())?;
    Ok(guide(hazard))
}

pub fn list_guides() -> Vec<&'static HazardGuide> {
    all_guides().collect()
}

/// Engine status. A model that fails to load is reported, not raised.
pub fn get_engine_status(config: &AppConfig) -> Result<EngineStatus, String> {
    let (artifact_info, error) = match artifact::shared(&config.artifact_dir) {
        Ok(artifact) => (Some(artifact.info()), None),
        Err(e) => (None, Some(e.to_string())),
    };
    let engine = inference::get_status();

    Ok(EngineStatus {
        app_version: APP_VERSION.to_string(),
        layout: LayoutInfo::current(),
        model: ModelStatus {
            loaded: artifact_info.is_some(),
            artifact: artifact_info,
            error,
            inference_count: engine.inference_count,
            avg_latency_ms: engine.avg_latency_ms,
        },
        log: LogStatus {
            path: config.log_path.display().to_string(),
            auto_save: config.auto_save,
            total_predictions: get_prediction_count(config)?,
        },
    })
}

// ============================================================================
// TESTS
// ============================================================================
