use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::logic::features::EnvironmentalReading;
use crate::logic::hazard::HazardClass;

/// Column order of the prediction log
pub const LOG_HEADER: [&str; 11] = [
    "Timestamp",
    "Logic_Assessment",
    "AI_Prediction",
    "AI_Confidence",
    "Rainfall_mm",
    "Humidity_%",
    "Temperature_C",
    "Wind_Speed_kmph",
    "Soil_Moisture_%",
    "Magnitude",
    "Depth_km",
];

/// One completed prediction, as stored in the log
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PredictionRecord {
    #[serde(rename = "Timestamp", with = "timestamp_format")]
    pub timestamp: NaiveDateTime,

    #[serde(rename = "Logic_Assessment")]
    pub logical_hazard: HazardClass,

    #[serde(rename = "AI_Prediction")]
    pub classifier_hazard: HazardClass,

    /// Percent, 2 decimals
    #[serde(rename = "AI_Confidence", serialize_with = "two_decimals")]
    pub confidence: f64,

    #[serde(rename = "Rainfall_mm")]
    pub rainfall_mm: f64,
    #[serde(rename = "Humidity_%")]
    pub humidity_pct: f64,
    #[serde(rename = "Temperature_C")]
    pub temperature_c: f64,
    #[serde(rename = "Wind_Speed_kmph")]
    pub wind_speed_kmph: f64,
    #[serde(rename = "Soil_Moisture_%")]
    pub soil_moisture_pct: f64,
    #[serde(rename = "Magnitude")]
    pub magnitude: f64,
    #[serde(rename = "Depth_km")]
    pub depth_km: f64,
}

impl PredictionRecord {
    pub fn new(
        timestamp: NaiveDateTime,
        logical_hazard: HazardClass,
        classifier_hazard: HazardClass,
        confidence: f64,
        reading: &EnvironmentalReading,
    ) -> Self {
        Self {
            timestamp,
            logical_hazard,
            classifier_hazard,
            confidence: round2(confidence),
            rainfall_mm: reading.rainfall_mm,
            humidity_pct: reading.humidity_pct,
            temperature_c: reading.temperature_c,
            wind_speed_kmph: reading.wind_speed_kmph,
            soil_moisture_pct: reading.soil_moisture_pct,
            magnitude: reading.magnitude,
            depth_km: reading.depth_km,
        }
    }

    /// Record stamped with the current local time (second precision)
    pub fn now(
        logical_hazard: HazardClass,
        classifier_hazard: HazardClass,
        confidence: f64,
        reading: &EnvironmentalReading,
    ) -> Self {
        let now = Local::now().naive_local();
        let timestamp = now.with_nanosecond(0).unwrap_or(now);
        Self::new(timestamp, logical_hazard, classifier_hazard, confidence, reading)
    }

    pub fn reading(&self) -> EnvironmentalReading {
        EnvironmentalReading {
            rainfall_mm: self.rainfall_mm,
            humidity_pct: self.humidity_pct,
            temperature_c: self.temperature_c,
            wind_speed_kmph: self.wind_speed_kmph,
            soil_moisture_pct: self.soil_moisture_pct,
            magnitude: self.magnitude,
            depth_km: self.depth_km,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn two_decimals<S: serde::Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.2}", value))
}

/// `YYYY-MM-DD HH:MM:SS`, local time
pub mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&timestamp.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(raw.trim(), FORMAT).map_err(serde::de::Error::custom)
    }
}
