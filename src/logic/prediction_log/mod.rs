//! Prediction Log Module
//!
//! Append-only CSV log of completed predictions, re-read for analytics.
//! Header and timestamp format are fixed so the file stays readable by
//! spreadsheet tools and earlier logs.

pub mod record;
pub mod writer;
pub mod analytics;


pub use record::{PredictionRecord, LOG_HEADER};
pub use writer::{LogError, PredictionLog};
pub use analytics::{
    agreement_rate, hazard_distribution, parameter_correlations, recent_activity, summary,
    CorrelationMatrix, HistorySummary, RecentActivity,
};
