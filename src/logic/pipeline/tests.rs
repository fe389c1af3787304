use super::{Agreement, PipelineError, RiskPipeline};
use crate::logic::assessment::{ExtremeRainfall, GroundShaking, QuestionnaireAnswers};
use crate::logic::features::EnvironmentalReading;
use crate::logic::hazard::{ConfidenceLabel, HazardClass, RiskLevel};
use crate::logic::model::artifact::tests::write_bundle;
use crate::logic::model::ModelArtifact;
use crate::logic::prediction_log::{summary, PredictionLog};
use crate::logic::warning::WarningSeverity;
use tempfile::{tempdir, TempDir};

/// Bundle classifier: rainfall > 150 mm → Flood at 62.5%, otherwise None at 75%
fn artifact() -> (TempDir, ModelArtifact) {
    let dir = tempdir().unwrap();
    write_bundle(dir.path());
    let artifact = ModelArtifact::load(dir.path()).unwrap();
    (dir, artifact)
}

fn flood_reading() -> EnvironmentalReading {
    EnvironmentalReading {
        rainfall_mm: 200.0,
        humidity_pct: 40.0,
        temperature_c: 25.0,
        wind_speed_kmph: 20.0,
        soil_moisture_pct: 40.0,
        magnitude: 0.0,
        depth_km: 0.0,
    }
}

fn heavy_rain() -> QuestionnaireAnswers {
    QuestionnaireAnswers {
        extreme_rainfall: ExtremeRainfall::Heavy,
        ..Default::default()
    }
}

fn shaking() -> QuestionnaireAnswers {
    QuestionnaireAnswers {
        ground_shaking: GroundShaking::Strong,
        ..Default::default()
    }
}

#[test]
fn test_flood_end_to_end() {
    let (_bundle, artifact) = artifact();
    let logs = tempdir().unwrap();
    let pipeline = RiskPipeline::new(&artifact, PredictionLog::new(logs.path().join("log.csv")), true);

    let outcome = pipeline.evaluate(&flood_reading(), &heavy_rain()).unwrap();

    assert_eq!(outcome.logical.hazard, HazardClass::Flood);
    assert_eq!(outcome.logical.confidence, ConfidenceLabel::Medium);
    assert_eq!(outcome.classifier.hazard, HazardClass::Flood);
    assert!((outcome.classifier.confidence - 62.5).abs() < 1e-9);
    assert_eq!(outcome.classifier.method, "random_forest");

    // 62.5% * 0.4 = 25, plus the rainfall bonus
    assert!((outcome.score.total - 55.0).abs() < 1e-9);
    assert_eq!(outcome.risk, RiskLevel::Medium);

    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].kind, "HIGH FLOOD RISK");
    assert_eq!(outcome.warnings[0].severity, WarningSeverity::High);

    assert_eq!(outcome.agreement, Agreement::Match);
    assert_eq!(outcome.guide, HazardClass::Flood);
    assert_eq!(outcome.ranked[0].hazard, HazardClass::Flood);
    assert_eq!(outcome.ranked[1].hazard, HazardClass::None);
    assert!(outcome.saved);

    let history = pipeline.history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].logical_hazard, HazardClass::Flood);
    assert_eq!(history[0].classifier_hazard, HazardClass::Flood);
    assert_eq!(history[0].confidence, 62.5);
    assert_eq!(history[0].reading(), flood_reading());
}

#[test]
fn test_quiet_reading() {
    let (_bundle, artifact) = artifact();
    let logs = tempdir().unwrap();
    let pipeline = RiskPipeline::new(&artifact, PredictionLog::new(logs.path().join("log.csv")), true);

    let outcome = pipeline
        .evaluate(&EnvironmentalReading::default(), &QuestionnaireAnswers::default())
        .unwrap();

    assert_eq!(outcome.logical.hazard, HazardClass::None);
    assert_eq!(outcome.classifier.hazard, HazardClass::None);
    assert!((outcome.classifier.confidence - 75.0).abs() < 1e-9);
    assert_eq!(outcome.risk, RiskLevel::None);
    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.agreement, Agreement::Match);
}

#[test]
fn test_agreement_kinds() {
    let (_bundle, artifact) = artifact();
    let logs = tempdir().unwrap();
    let pipeline = RiskPipeline::new(&artifact, PredictionLog::new(logs.path().join("log.csv")), false);

    let calm = EnvironmentalReading::default();

    let outcome = pipeline.evaluate(&flood_reading(), &QuestionnaireAnswers::default()).unwrap();
    assert_eq!(outcome.agreement, Agreement::ClassifierOnly);

    let outcome = pipeline.evaluate(&calm, &shaking()).unwrap();
    assert_eq!(outcome.logical.hazard, HazardClass::Earthquake);
    assert_eq!(outcome.agreement, Agreement::LogicOnly);

    let outcome = pipeline.evaluate(&flood_reading(), &shaking()).unwrap();
    assert_eq!(outcome.agreement, Agreement::Differ);
}

#[test]
fn test_auto_save_off_records_nothing() {
    let (_bundle, artifact) = artifact();
    let logs = tempdir().unwrap();
    let pipeline = RiskPipeline::new(&artifact, PredictionLog::new(logs.path().join("log.csv")), false);

    let outcome = pipeline.evaluate(&flood_reading(), &heavy_rain()).unwrap();
    assert!(!outcome.saved);
    assert!(pipeline.history().unwrap().is_empty());
}

#[test]
fn test_invalid_reading_is_rejected_before_inference() {
    let (_bundle, artifact) = artifact();
    let logs = tempdir().unwrap();
    let pipeline = RiskPipeline::new(&artifact, PredictionLog::new(logs.path().join("log.csv")), true);

    let reading = EnvironmentalReading {
        humidity_pct: 120.0,
        ..flood_reading()
    };
    let err = pipeline.evaluate(&reading, &heavy_rain()).unwrap_err();
    assert!(matches!(err, PipelineError::Feature(_)));
    assert_eq!(pipeline.log().count().unwrap(), 0);
}

#[test]
fn test_failed_append_does_not_fail_assessment() {
    let (_bundle, artifact) = artifact();
    let logs = tempdir().unwrap();
    // A directory cannot be opened for appending
    let pipeline = RiskPipeline::new(&artifact, PredictionLog::new(logs.path()), true);

    let outcome = pipeline.evaluate(&flood_reading(), &heavy_rain()).unwrap();
    assert!(!outcome.saved);
}

#[test]
fn test_history_feeds_analytics() {
    let (_bundle, artifact) = artifact();
    let logs = tempdir().unwrap();
    let pipeline = RiskPipeline::new(&artifact, PredictionLog::new(logs.path().join("log.csv")), true);

    for _ in 0..3 {
        pipeline.evaluate(&flood_reading(), &heavy_rain()).unwrap();
    }
    pipeline
        .evaluate(&EnvironmentalReading::default(), &QuestionnaireAnswers::default())
        .unwrap();

    let history = pipeline.history().unwrap();
    let s = summary(&history);
    assert_eq!(s.total_predictions, 4);
    assert_eq!(s.most_common, Some(HazardClass::Flood));
    assert!((s.average_confidence - (62.5 * 3.0 + 75.0) / 4.0).abs() < 1e-9);
    assert!(s.last_activity.is_some());
}

#[test]
fn test_agreement_between() {
    assert_eq!(Agreement::between(HazardClass::None, HazardClass::None), Agreement::Match);
    assert_eq!(Agreement::between(HazardClass::Volcano, HazardClass::Volcano), Agreement::Match);
    assert_eq!(Agreement::between(HazardClass::None, HazardClass::Tsunami), Agreement::ClassifierOnly);
    assert_eq!(Agreement::between(HazardClass::Wildfire, HazardClass::None), Agreement::LogicOnly);
    assert_eq!(Agreement::between(HazardClass::Wildfire, HazardClass::Flood), Agreement::Differ);
}
