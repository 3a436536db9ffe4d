//! Aim Adapt - command line entry point
//!
//! Replays recorded sessions through the engine, runs synthetic players, or
//! prints the effective configuration.

use aim_adapt::core::error::{AdaptError, Result};
use aim_adapt::core::EngineConfig;
use aim_adapt::simulation::{simulate, SimulationConfig};
use aim_adapt::{create_initial_profile, PerformanceSample, SessionOutcome, SkillProfile, TrainingSession};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Adaptive difficulty engine for aim training
#[derive(Parser, Debug)]
#[command(name = "aim-adapt")]
#[command(about = "Analyze aim-training sessions and recommend the next difficulty")]
struct Cli {
    /// Engine config TOML (defaults are used when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Feed a JSON array of recorded sessions through one player's engine
    Replay {
        /// Path to the samples JSON file
        samples: PathBuf,

        /// Starting skill profile JSON (a fresh profile when omitted)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Difficulty the first session was played at
        #[arg(long)]
        difficulty: Option<f64>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Run seeded synthetic players through independent sessions
    Simulate {
        #[arg(long, default_value_t = 16)]
        players: u32,

        #[arg(long, default_value_t = 40)]
        sessions: u32,

        /// Random seed for deterministic runs
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("aim_adapt=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Command::Replay {
            samples,
            profile,
            difficulty,
            format,
        } => replay(config, &samples, profile.as_deref(), difficulty, format),
        Command::Simulate {
            players,
            sessions,
            seed,
            format,
        } => {
            let output = simulate(SimulationConfig {
                players,
                sessions_per_player: sessions,
                seed: seed.unwrap_or_else(rand::random),
                engine: config,
            });
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
                OutputFormat::Text => {
                    println!("{}", output.summary());
                    for r in &output.reports {
                        println!(
                            "  player {:>3}: skill {:5.1} -> {:5.1} | difficulty {:5.1} | rating {:5.1} | {} changes",
                            r.player_id,
                            r.starting_skill,
                            r.final_skill,
                            r.final_difficulty,
                            r.overall_rating,
                            r.difficulty_changes,
                        );
                    }
                }
            }
            Ok(())
        }
        Command::Config => {
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
    }
}

fn replay(
    config: EngineConfig,
    samples_path: &Path,
    profile_path: Option<&Path>,
    difficulty: Option<f64>,
    format: OutputFormat,
) -> Result<()> {
    let samples = load_samples(samples_path)?;
    tracing::info!(count = samples.len(), "Loaded samples");

    let profile: SkillProfile = match profile_path {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => create_initial_profile(),
    };
    let difficulty = difficulty.unwrap_or(profile.optimal_difficulty);
    let mut session = TrainingSession::with_profile(config, profile, difficulty);

    let outcomes: Vec<SessionOutcome> = samples
        .into_iter()
        .map(|sample| session.complete_session(sample))
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcomes)?),
        OutputFormat::Text => {
            for (i, outcome) in outcomes.iter().enumerate() {
                println!(
                    "#{:<3} {:<9} skill {:5.1} | {}",
                    i + 1,
                    outcome.analysis.trend.label(),
                    outcome.profile.overall_skill,
                    outcome.recommendation.summary()
                );
            }
            println!(
                "Next session difficulty: {:.1} (weakest: {:?})",
                session.difficulty(),
                session.profile().weakest_dimension()
            );
        }
    }

    Ok(())
}

fn load_samples(path: &Path) -> Result<Vec<PerformanceSample>> {
    let samples: Vec<PerformanceSample> = serde_json::from_str(&fs::read_to_string(path)?)?;
    for (i, sample) in samples.iter().enumerate() {
        sample.validate().map_err(|e| match e {
            AdaptError::InvalidSample(msg) => {
                AdaptError::InvalidSample(format!("sample {}: {}", i + 1, msg))
            }
            other => other,
        })?;
    }
    Ok(samples)
}
