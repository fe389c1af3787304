//! History Analytics
//!
//! Aggregates over the prediction log (`PredictionLog::read_all`).
//! Every aggregate has a defined value on an empty history.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::record::PredictionRecord;
use crate::logic::hazard::{risk_from_confidence_only, HazardClass, RiskLevel};

/// Columns of the correlation matrix
pub const CORRELATION_COLUMNS: [&str; 5] = [
    "Rainfall_mm",
    "Humidity_%",
    "Temperature_C",
    "Wind_Speed_kmph",
    "AI_Confidence",
];

// ============================================================================
// SUMMARY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub total_predictions: usize,
    /// 0 when the history is empty
    pub average_confidence: f64,
    /// Most frequent classifier hazard, ties to the alphabetically first name
    pub most_common: Option<HazardClass>,
    pub last_activity: Option<NaiveDateTime>,
}

pub fn summary(records: &[PredictionRecord]) -> HistorySummary {
    let total_predictions = records.len();
    let average_confidence = if records.is_empty() {
        0.0
    } else {
        records.iter().map(|r| r.confidence).sum::<f64>() / total_predictions as f64
    };

    HistorySummary {
        total_predictions,
        average_confidence,
        most_common: hazard_distribution(records).first().map(|(hazard, _)| *hazard),
        last_activity: records.iter().map(|r| r.timestamp).max(),
    }
}

// ============================================================================
// DISTRIBUTION
// ============================================================================

/// Count per classifier hazard, descending, ties by name
pub fn hazard_distribution(records: &[PredictionRecord]) -> Vec<(HazardClass, usize)> {
    let mut counts: BTreeMap<HazardClass, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.classifier_hazard).or_default() += 1;
    }

    let mut distribution: Vec<(HazardClass, usize)> = counts.into_iter().collect();
    distribution.sort_by(|(ha, ca), (hb, cb)| cb.cmp(ca).then_with(|| ha.as_str().cmp(hb.as_str())));
    distribution
}

// ============================================================================
// RECENT ACTIVITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub timestamp: NaiveDateTime,
    pub hazard: HazardClass,
    pub confidence: f64,
    /// Replayed from confidence and hazard only
    pub risk: RiskLevel,
}

/// The last `limit` rows written, sorted by timestamp, newest first
pub fn recent_activity(records: &[PredictionRecord], limit: usize) -> Vec<RecentActivity> {
    let tail = &records[records.len().saturating_sub(limit)..];
    let mut recent: Vec<RecentActivity> = tail
        .iter()
        .rev()
        .map(|r| RecentActivity {
            timestamp: r.timestamp,
            hazard: r.classifier_hazard,
            confidence: r.confidence,
            risk: risk_from_confidence_only(r.confidence, r.classifier_hazard),
        })
        .collect();
    // Stable sort: equal timestamps stay last-written first
    recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    recent
}

// ============================================================================
// AGREEMENT
// ============================================================================

/// Percentage of rows where both assessments named the same hazard
pub fn agreement_rate(records: &[PredictionRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let agreeing = records
        .iter()
        .filter(|r| r.logical_hazard == r.classifier_hazard)
        .count();
    Some(agreeing as f64 * 100.0 / records.len() as f64)
}

// ============================================================================
// CORRELATIONS
// ============================================================================

/// Pearson correlation matrix over `CORRELATION_COLUMNS`.
/// A cell is `None` with fewer than two rows or a zero-variance column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.values[i][j]
    }
}

fn column(records: &[PredictionRecord], index: usize) -> Vec<f64> {
    records
        .iter()
        .map(|r| match index {
            0 => r.rainfall_mm,
            1 => r.humidity_pct,
            2 => r.temperature_c,
            3 => r.wind_speed_kmph,
            _ => r.confidence,
        })
        .collect()
}

/// Pearson r of two equal-length series
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len();
    if n < 2 || y.len() != n {
        return None;
    }

    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

pub fn parameter_correlations(records: &[PredictionRecord]) -> CorrelationMatrix {
    let columns: Vec<Vec<f64>> = (0..CORRELATION_COLUMNS.len()).map(|i| column(records, i)).collect();

    let values = columns
        .iter()
        .map(|x| columns.iter().map(|y| pearson(x, y)).collect())
        .collect();

    CorrelationMatrix {
        columns: CORRELATION_COLUMNS.iter().map(|c| c.to_string()).collect(),
        values,
    }
}
