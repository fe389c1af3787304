//! Disaster Risk Core - CLI Entry Point

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use disaster_risk_core::api::commands::{self, PredictRequest};
use disaster_risk_core::constants::{APP_NAME, APP_VERSION};
use disaster_risk_core::logic::assessment::{
    ExtremeRainfall, FireOrSmoke, GroundShaking, OceanicAnomaly, QuestionnaireAnswers,
    VolcanicActivity,
};
use disaster_risk_core::logic::config::AppConfig;
use disaster_risk_core::logic::features::EnvironmentalReading;

/// Disaster risk assessment from environmental readings
#[derive(Parser)]
#[command(name = "disaster-risk")]
#[command(about = "Rule-based + classifier disaster risk assessment", long_about = None)]
#[command(version)]
struct Cli {
    /// Model artifact bundle directory (overrides DISASTER_ARTIFACT_DIR)
    #[arg(long, global = true)]
    artifact_dir: Option<PathBuf>,

    /// Prediction log path (overrides DISASTER_LOG_PATH)
    #[arg(long, global = true)]
    log_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assess one set of readings and questionnaire answers
    Predict(PredictArgs),
    /// Prediction history analytics
    History,
    /// Preparedness guide for a hazard (None, Earthquake, Flood, Wildfire, Tsunami, Volcano)
    Guide { hazard: String },
    /// Engine, model and log status
    Status,
}

#[derive(clap::Args)]
struct PredictArgs {
    /// Rainfall (mm)
    #[arg(long, default_value_t = 0.0)]
    rainfall: f64,
    /// Humidity (%)
    #[arg(long, default_value_t = 50.0)]
    humidity: f64,
    /// Temperature (°C)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    temperature: f64,
    /// Wind speed (km/h)
    #[arg(long, default_value_t = 0.0)]
    wind_speed: f64,
    /// Soil moisture (%)
    #[arg(long, default_value_t = 0.0)]
    soil_moisture: f64,
    /// Seismic magnitude
    #[arg(long, default_value_t = 0.0)]
    magnitude: f64,
    /// Seismic depth (km)
    #[arg(long, default_value_t = 0.0)]
    depth: f64,

    /// Ground shaking: none | mild | strong
    #[arg(long, default_value = "none")]
    shaking: GroundShaking,
    /// Volcanic activity: none | smoke-ash | lava-flow
    #[arg(long, default_value = "none")]
    volcanic: VolcanicActivity,
    /// Extreme rainfall: none | heavy | torrential
    #[arg(long, default_value = "none")]
    extreme_rain: ExtremeRainfall,
    /// Oceanic anomaly: none | high-waves | coastal-flooding
    #[arg(long, default_value = "none")]
    oceanic: OceanicAnomaly,
    /// Fire or smoke: none | small-fire | large-wildfire
    #[arg(long, default_value = "none")]
    fire: FireOrSmoke,

    /// Do not record this prediction
    #[arg(long)]
    no_save: bool,
}

impl PredictArgs {
    fn to_request(&self) -> PredictRequest {
        PredictRequest {
            reading: EnvironmentalReading {
                rainfall_mm: self.rainfall,
                humidity_pct: self.humidity,
                temperature_c: self.temperature,
                wind_speed_kmph: self.wind_speed,
                soil_moisture_pct: self.soil_moisture,
                magnitude: self.magnitude,
                depth_km: self.depth,
            },
            answers: QuestionnaireAnswers {
                ground_shaking: self.shaking,
                volcanic_activity: self.volcanic,
                extreme_rainfall: self.extreme_rain,
                oceanic_anomaly: self.oceanic,
                fire_or_smoke: self.fire,
            },
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).context("Failed to serialise output")?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env().with_overrides(cli.artifact_dir, cli.log_path);

    log::info!("Starting {} v{}...", APP_NAME, APP_VERSION);
    log::debug!("Configuration: {:?}", config);

    match cli.command {
        Command::Predict(args) => {
            if args.no_save {
                config.auto_save = false;
            }
            let outcome = commands::predict(&config, &args.to_request())
                .map_err(|e| anyhow!(e))
                .context("Prediction failed")?;
            print_json(&outcome)
        }
        Command::History => {
            let report = commands::get_history(&config)
                .map_err(|e| anyhow!(e))
                .with_context(|| format!("Failed to read {}", config.log_path.display()))?;
            print_json(&report)
        }
        Command::Guide { hazard } => {
            let guide = commands::get_guide(&hazard).map_err(|e| anyhow!(e))?;
            print_json(guide)
        }
        Command::Status => {
            let status = commands::get_engine_status(&config).map_err(|e| anyhow!(e))?;
            print_json(&status)
        }
    }
}
