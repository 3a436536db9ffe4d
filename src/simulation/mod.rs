//! Synthetic-player simulation
//!
//! Drives many independent training sessions with generated samples, for
//! tuning configs and sanity-checking the engine end to end.

pub mod player;
pub mod runner;

pub use player::SyntheticPlayer;
pub use runner::{simulate, PlayerReport, SimulationConfig, SimulationOutput, SimulationStats};
