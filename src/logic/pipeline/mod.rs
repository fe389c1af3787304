//! Pipeline - One Complete Assessment
//!
//! readings + answers
//!   → logical assessment and classifier inference (independent)
//!   → risk fusion (classifier verdict + raw readings)
//!   → early warnings (raw readings only)
//!   → prediction log (when auto-save is on)
//!
//! Synchronous and single-threaded per call. Only the log append has side
//! effects.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::logic::assessment::{assess, LogicalVerdict, QuestionnaireAnswers};
use crate::logic::features::{EnvironmentalReading, FeatureError, FeatureVector};
use crate::logic::hazard::{full_context_score, risk_from_full_context, HazardClass, RiskLevel, RiskScore};
use crate::logic::model::{
    ClassProbability, ClassifierInferenceEngine, ClassifierVerdict, InferenceError, ModelArtifact,
};
use crate::logic::prediction_log::{LogError, PredictionLog, PredictionRecord};
use crate::logic::warning::{evaluate_with_thresholds, Warning, WarningThresholds};

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("invalid reading: {0}")]
    Feature(#[from] FeatureError),

    #[error("classifier inference failed: {0}")]
    Inference(#[from] InferenceError),

    #[error(transparent)]
    Log(#[from] LogError),
}

// ============================================================================
// AGREEMENT
// ============================================================================

/// How the two independent assessments relate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Agreement {
    /// Both named the same class
    Match,
    /// Questionnaire found nothing, classifier found a hazard
    ClassifierOnly,
    /// Questionnaire found a hazard, classifier found nothing
    LogicOnly,
    /// Both found a hazard, but different ones
    Differ,
}

impl Agreement {
    pub fn between(logical: HazardClass, classifier: HazardClass) -> Self {
        match (logical.is_hazard(), classifier.is_hazard()) {
            _ if logical == classifier => Agreement::Match,
            (false, true) => Agreement::ClassifierOnly,
            (true, false) => Agreement::LogicOnly,
            _ => Agreement::Differ,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Agreement::Match => "Logical assessment and classifier agree",
            Agreement::ClassifierOnly => "Classifier detects a potential disaster the logical assessment missed",
            Agreement::LogicOnly => "Logical assessment suggests risk the classifier did not detect",
            Agreement::Differ => "Logical assessment and classifier name different hazards",
        }
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Everything one assessment produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutcome {
    pub reading: EnvironmentalReading,
    pub logical: LogicalVerdict,
    pub classifier: ClassifierVerdict,
    pub risk: RiskLevel,
    pub score: RiskScore,
    pub warnings: Vec<Warning>,
    pub agreement: Agreement,
    /// Key into the preparedness guide table
    pub guide: HazardClass,
    /// Classifier probabilities, highest first
    pub ranked: Vec<ClassProbability>,
    /// Whether the prediction was appended to the log
    pub saved: bool,
}

// ============================================================================
// PIPELINE
// ============================================================================

pub struct RiskPipeline<'a> {
    engine: ClassifierInferenceEngine<'a>,
    log: PredictionLog,
    auto_save: bool,
    thresholds: WarningThresholds,
}

impl<'a> RiskPipeline<'a> {
    pub fn new(artifact: &'a ModelArtifact, log: PredictionLog, auto_save: bool) -> Self {
        Self {
            engine: ClassifierInferenceEngine::new(artifact),
            log,
            auto_save,
            thresholds: WarningThresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: WarningThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn log(&self) -> &PredictionLog {
        &self.log
    }

    /// Run one full assessment
    pub fn evaluate(
        &self,
        reading: &EnvironmentalReading,
        answers: &QuestionnaireAnswers,
    ) -> Result<PredictionOutcome, PipelineError> {
        let vector = FeatureVector::from_reading(reading)?;

        let logical = assess(answers);
        let classifier = self.engine.infer(&vector)?;

        let score = full_context_score(classifier.confidence, classifier.hazard, reading);
        let risk = risk_from_full_context(classifier.confidence, classifier.hazard, reading);
        let warnings = evaluate_with_thresholds(reading, &self.thresholds);
        let agreement = Agreement::between(logical.hazard, classifier.hazard);

        log::info!(
            "Assessment: logic={} ({}), classifier={} ({:.2}%), risk={}, warnings={}",
            logical.hazard,
            logical.confidence,
            classifier.hazard,
            classifier.confidence,
            risk,
            warnings.len()
        );

        let saved = self.auto_save && self.record(&logical, &classifier, reading);

        Ok(PredictionOutcome {
            reading: *reading,
            ranked: classifier.ranked(),
            guide: classifier.hazard,
            logical,
            classifier,
            risk,
            score,
            warnings,
            agreement,
            saved,
        })
    }

    /// Append to the log. A failed write is reported but does not fail the assessment.
    fn record(&self, logical: &LogicalVerdict, classifier: &ClassifierVerdict, reading: &EnvironmentalReading) -> bool {
        let record = PredictionRecord::now(logical.hazard, classifier.hazard, classifier.confidence, reading);
        match self.log.append(&record) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Failed to record prediction: {}", e);
                false
            }
        }
    }

    /// Every recorded prediction, oldest first
    pub fn history(&self) -> Result<Vec<PredictionRecord>, PipelineError> {
        Ok(self.log.read_all()?)
    }
}
