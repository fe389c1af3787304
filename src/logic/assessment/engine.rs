//! Logical Assessment Engine
//!
//! Fixed decision tree over the five questionnaire answers.
//! Input: QuestionnaireAnswers
//! Output: LogicalVerdict
//!
//! Total and deterministic: every combination of answers yields a verdict,
//! and answers to questions the tree does not reach are ignored.

use serde::{Deserialize, Serialize};

use super::answers::{
    ExtremeRainfall, FireOrSmoke, GroundShaking, OceanicAnomaly, QuestionnaireAnswers,
    VolcanicActivity,
};
use crate::logic::hazard::{ConfidenceLabel, HazardClass};

/// Rule-based guess at the hazard, with a qualitative confidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogicalVerdict {
    pub hazard: HazardClass,
    pub confidence: ConfidenceLabel,
}

impl LogicalVerdict {
    const fn new(hazard: HazardClass, confidence: ConfidenceLabel) -> Self {
        Self { hazard, confidence }
    }
}

/// Walk the decision tree. First matching branch wins.
pub fn assess(answers: &QuestionnaireAnswers) -> LogicalVerdict {
    let verdict = if answers.ground_shaking != GroundShaking::None {
        volcanic_branch(answers)
    } else if answers.extreme_rainfall != ExtremeRainfall::None {
        oceanic_branch(answers)
    } else {
        fire_branch(answers)
    };

    log::debug!("Logical assessment: {} ({})", verdict.hazard, verdict.confidence);
    verdict
}

fn volcanic_branch(answers: &QuestionnaireAnswers) -> LogicalVerdict {
    if answers.volcanic_activity != VolcanicActivity::None {
        return LogicalVerdict::new(HazardClass::Volcano, ConfidenceLabel::High);
    }

    let confidence = match answers.ground_shaking {
        GroundShaking::Strong => ConfidenceLabel::High,
        _ => ConfidenceLabel::Medium,
    };
    LogicalVerdict::new(HazardClass::Earthquake, confidence)
}

fn oceanic_branch(answers: &QuestionnaireAnswers) -> LogicalVerdict {
    match answers.oceanic_anomaly {
        OceanicAnomaly::CoastalFlooding => LogicalVerdict::new(HazardClass::Tsunami, ConfidenceLabel::High),
        OceanicAnomaly::HighWaves => LogicalVerdict::new(HazardClass::Tsunami, ConfidenceLabel::Medium),
        OceanicAnomaly::None => {
            let confidence = match answers.extreme_rainfall {
                ExtremeRainfall::Torrential => ConfidenceLabel::High,
                _ => ConfidenceLabel::Medium,
            };
            LogicalVerdict::new(HazardClass::Flood, confidence)
        }
    }
}

fn fire_branch(answers: &QuestionnaireAnswers) -> LogicalVerdict {
    match answers.fire_or_smoke {
        FireOrSmoke::LargeWildfire => LogicalVerdict::new(HazardClass::Wildfire, ConfidenceLabel::High),
        FireOrSmoke::SmallFire => LogicalVerdict::new(HazardClass::Wildfire, ConfidenceLabel::Medium),
        FireOrSmoke::None => LogicalVerdict::new(HazardClass::None, ConfidenceLabel::High),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(
        ground_shaking: GroundShaking,
        volcanic_activity: VolcanicActivity,
        extreme_rainfall: ExtremeRainfall,
        oceanic_anomaly: OceanicAnomaly,
        fire_or_smoke: FireOrSmoke,
    ) -> QuestionnaireAnswers {
        QuestionnaireAnswers {
            ground_shaking,
            volcanic_activity,
            extreme_rainfall,
            oceanic_anomaly,
            fire_or_smoke,
        }
    }

    fn every_combination() -> Vec<QuestionnaireAnswers> {
        let mut all = Vec::with_capacity(243);
        for (g, _, _) in GroundShaking::CHOICES {
            for (v, _, _) in VolcanicActivity::CHOICES {
                for (r, _, _) in ExtremeRainfall::CHOICES {
                    for (o, _, _) in OceanicAnomaly::CHOICES {
                        for (f, _, _) in FireOrSmoke::CHOICES {
                            all.push(answers(g, v, r, o, f));
                        }
                    }
                }
            }
        }
        all
    }

    #[test]
    fn test_total_and_deterministic() {
        let all = every_combination();
        assert_eq!(all.len(), 243);
        for a in &all {
            assert_eq!(assess(a), assess(a));
        }
    }

    #[test]
    fn test_verdicts_are_hashable() {
        let distinct: std::collections::HashSet<LogicalVerdict> =
            every_combination().iter().map(assess).collect();
        // Volcano/High, Earthquake x2, Tsunami x2, Flood x2, Wildfire x2, None/High
        assert_eq!(distinct.len(), 10);
    }

    #[test]
    fn test_none_is_only_reached_when_everything_is_no() {
        for a in every_combination() {
            let verdict = assess(&a);
            let quiet = a.ground_shaking == GroundShaking::None
                && a.extreme_rainfall == ExtremeRainfall::None
                && a.fire_or_smoke == FireOrSmoke::None;
            assert_eq!(verdict.hazard == HazardClass::None, quiet, "{a:?}");
        }
    }

    #[test]
    fn test_volcanic_branch() {
        use GroundShaking as G;
        let v = assess(&answers(G::Mild, VolcanicActivity::SmokeOrAsh, ExtremeRainfall::Torrential, OceanicAnomaly::None, FireOrSmoke::None));
        assert_eq!(v, LogicalVerdict::new(HazardClass::Volcano, ConfidenceLabel::High));

        let v = assess(&answers(G::Strong, VolcanicActivity::None, ExtremeRainfall::None, OceanicAnomaly::None, FireOrSmoke::None));
        assert_eq!(v, LogicalVerdict::new(HazardClass::Earthquake, ConfidenceLabel::High));

        let v = assess(&answers(G::Mild, VolcanicActivity::None, ExtremeRainfall::Heavy, OceanicAnomaly::CoastalFlooding, FireOrSmoke::LargeWildfire));
        assert_eq!(v, LogicalVerdict::new(HazardClass::Earthquake, ConfidenceLabel::Medium));
    }

    #[test]
    fn test_rainfall_branch() {
        let base = QuestionnaireAnswers {
            extreme_rainfall: ExtremeRainfall::Heavy,
            ..Default::default()
        };

        assert_eq!(
            assess(&QuestionnaireAnswers { oceanic_anomaly: OceanicAnomaly::CoastalFlooding, ..base }),
            LogicalVerdict::new(HazardClass::Tsunami, ConfidenceLabel::High)
        );
        assert_eq!(
            assess(&QuestionnaireAnswers { oceanic_anomaly: OceanicAnomaly::HighWaves, ..base }),
            LogicalVerdict::new(HazardClass::Tsunami, ConfidenceLabel::Medium)
        );
        assert_eq!(assess(&base), LogicalVerdict::new(HazardClass::Flood, ConfidenceLabel::Medium));
        assert_eq!(
            assess(&QuestionnaireAnswers { extreme_rainfall: ExtremeRainfall::Torrential, ..base }),
            LogicalVerdict::new(HazardClass::Flood, ConfidenceLabel::High)
        );
    }

    #[test]
    fn test_fire_branch() {
        let large = QuestionnaireAnswers {
            fire_or_smoke: FireOrSmoke::LargeWildfire,
            ..Default::default()
        };
        assert_eq!(assess(&large), LogicalVerdict::new(HazardClass::Wildfire, ConfidenceLabel::High));

        let small = QuestionnaireAnswers {
            fire_or_smoke: FireOrSmoke::SmallFire,
            ..Default::default()
        };
        assert_eq!(assess(&small), LogicalVerdict::new(HazardClass::Wildfire, ConfidenceLabel::Medium));

        assert_eq!(
            assess(&QuestionnaireAnswers::default()),
            LogicalVerdict::new(HazardClass::None, ConfidenceLabel::High)
        );
    }

    #[test]
    fn test_unreached_answers_are_ignored() {
        // Volcanic and oceanic answers never matter without shaking / rain
        let quiet = QuestionnaireAnswers {
            volcanic_activity: VolcanicActivity::LavaFlow,
            oceanic_anomaly: OceanicAnomaly::CoastalFlooding,
            ..Default::default()
        };
        assert_eq!(assess(&quiet).hazard, HazardClass::None);
    }
}
