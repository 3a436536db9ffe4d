//! Batch runs of synthetic players through independent training sessions

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::core::config::EngineConfig;
use crate::engine::TrainingSession;
use crate::simulation::player::SyntheticPlayer;
use crate::stats::average;

/// Configuration for a batch of synthetic players
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    pub players: u32,
    pub sessions_per_player: u32,
    pub seed: u64,
    pub engine: EngineConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            players: 16,
            sessions_per_player: 40,
            seed: 12345,
            engine: EngineConfig::default(),
        }
    }
}

/// How one synthetic player fared
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerReport {
    pub player_id: u64,
    pub starting_skill: f64,
    pub final_skill: f64,
    pub final_difficulty: f64,
    pub overall_rating: f64,
    pub confidence: f64,
    pub sessions: u32,
    pub difficulty_changes: u32,
    /// Mean accuracy over the last ten sessions
    pub late_accuracy: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationStats {
    pub players: u32,
    pub sessions_per_player: u32,
    pub simulation_time_ms: u64,
    pub mean_skill_gain: f64,
    pub mean_final_difficulty: f64,
    pub mean_late_accuracy: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub reports: Vec<PlayerReport>,
    pub statistics: SimulationStats,
}

impl SimulationOutput {
    fn new(reports: Vec<PlayerReport>, config: &SimulationConfig, elapsed: Duration) -> Self {
        let gains: Vec<f64> = reports.iter().map(|r| r.final_skill - r.starting_skill).collect();
        let difficulties: Vec<f64> = reports.iter().map(|r| r.final_difficulty).collect();
        let accuracies: Vec<f64> = reports.iter().map(|r| r.late_accuracy).collect();

        let statistics = SimulationStats {
            players: config.players,
            sessions_per_player: config.sessions_per_player,
            simulation_time_ms: elapsed.as_millis() as u64,
            mean_skill_gain: average(&gains),
            mean_final_difficulty: average(&difficulties),
            mean_late_accuracy: average(&accuracies),
        };

        Self {
            reports,
            statistics,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Simulated {} players x {} sessions in {}ms\nmean skill gain {:.1}, mean final difficulty {:.1}, late accuracy {:.1}%",
            self.statistics.players,
            self.statistics.sessions_per_player,
            self.statistics.simulation_time_ms,
            self.statistics.mean_skill_gain,
            self.statistics.mean_final_difficulty,
            self.statistics.mean_late_accuracy,
        )
    }
}

/// Play every player through its own session, in parallel
///
/// Player `i` draws from a generator seeded with `seed + i`, so results do
/// not depend on thread scheduling.
pub fn simulate(config: SimulationConfig) -> SimulationOutput {
    let start = Instant::now();

    let reports: Vec<PlayerReport> = (0..config.players as u64)
        .into_par_iter()
        .map(|id| {
            let rng = ChaCha8Rng::seed_from_u64(config.seed.wrapping_add(id));
            run_player(SyntheticPlayer::new(id, rng), &config)
        })
        .collect();

    let elapsed = start.elapsed();
    tracing::info!(
        players = config.players,
        elapsed_ms = elapsed.as_millis() as u64,
        "Simulation complete"
    );

    SimulationOutput::new(reports, &config, elapsed)
}

fn run_player(mut player: SyntheticPlayer, config: &SimulationConfig) -> PlayerReport {
    let starting_skill = player.true_skill;
    let mut session = TrainingSession::new(config.engine.clone());
    let mut accuracies = Vec::with_capacity(config.sessions_per_player as usize);
    let mut difficulty_changes = 0;

    for _ in 0..config.sessions_per_player {
        let before = session.difficulty();
        let sample = player.play(before);
        accuracies.push(sample.accuracy);
        session.complete_session(sample);
        if (session.difficulty() - before).abs() > f64::EPSILON {
            difficulty_changes += 1;
        }
    }

    let late = &accuracies[accuracies.len().saturating_sub(10)..];
    let profile = session.profile();

    PlayerReport {
        player_id: player.id,
        starting_skill,
        final_skill: player.true_skill,
        final_difficulty: session.difficulty(),
        overall_rating: profile.overall_skill,
        confidence: profile.confidence,
        sessions: profile.sessions_analyzed,
        difficulty_changes,
        late_accuracy: average(late),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> SimulationConfig {
        SimulationConfig {
            players: 4,
            sessions_per_player: 15,
            seed: 42,
            engine: EngineConfig::default(),
        }
    }

    #[test]
    fn test_simulation_is_deterministic() {
        let a = simulate(small());
        let b = simulate(small());
        assert_eq!(a.reports, b.reports);
    }

    #[test]
    fn test_reports_in_player_order() {
        let output = simulate(small());
        let ids: Vec<u64> = output.reports.iter().map(|r| r.player_id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert!(output.reports.iter().all(|r| r.sessions == 15));
    }

    #[test]
    fn test_difficulty_stays_in_range() {
        let output = simulate(small());
        for report in &output.reports {
            assert!((0.0..=100.0).contains(&report.final_difficulty));
            assert!((0.0..=100.0).contains(&report.overall_rating));
        }
    }

    #[test]
    fn test_no_players() {
        let output = simulate(SimulationConfig {
            players: 0,
            ..small()
        });
        assert!(output.reports.is_empty());
        assert_eq!(output.statistics.mean_skill_gain, 0.0);
    }
}
