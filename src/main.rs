use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use wellpath::{JsonFormatter, StationInput, SurveyConfig, SurveyReport, TextFormatter, Trajectory, TrajectoryError};

#[derive(Parser)]
#[command(name = "wellpath")]
#[command(about = "Minimum-curvature directional survey calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file holding an array of survey stations
    #[arg(value_hint = clap::ValueHint::FilePath)]
    survey: PathBuf,

    /// JSON engine configuration (e.g. data/metric_config.json for deg/30 m)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: Format,

    /// Include the derived station table
    #[arg(short, long)]
    stations: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default level is overridden by RUST_LOG
    let env = Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    let config = match &cli.config {
        Some(path) => SurveyConfig::from_file(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => SurveyConfig::default(),
    };

    let json = std::fs::read_to_string(&cli.survey)
        .with_context(|| format!("Failed to read survey '{}'", cli.survey.display()))?;
    let inputs: Vec<StationInput> = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse survey '{}'", cli.survey.display()))?;

    let trajectory = match Trajectory::from_inputs_with_config(&inputs, config) {
        Ok(trajectory) => trajectory,
        Err(error @ TrajectoryError::InvalidSequence(_)) => {
            for message in error.messages() {
                eprintln!("{}", message);
            }
            bail!("Survey '{}' failed validation", cli.survey.display());
        }
        Err(error) => return Err(error.into()),
    };

    let report = SurveyReport {
        stations: if cli.stations { trajectory.stations().to_vec() } else { Vec::new() },
        summary: trajectory.summary(),
    };

    match cli.format {
        Format::Text => print!("{}", TextFormatter::new().format_report(&report)),
        Format::Json => println!("{}", JsonFormatter::pretty().format_report(&report)?),
    }

    Ok(())
}
