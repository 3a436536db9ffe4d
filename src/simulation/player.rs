//! Synthetic players for exercising the engine without a game client
//!
//! A player has a hidden true skill that grows with practice, fastest when
//! the difficulty sits close to it. Each session's metrics are derived from
//! the gap between true skill and difficulty plus seeded noise.

use crate::core::types::{GameMode, PerformanceSample};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Shots fired in one synthetic session
const SHOTS_PER_SESSION: u32 = 60;

/// Challenge (skill minus difficulty) beyond which a session teaches nothing
const LEARNING_BAND: f64 = 50.0;

#[derive(Debug, Clone)]
pub struct SyntheticPlayer {
    pub id: u64,
    /// Hidden ability (0 to 100)
    pub true_skill: f64,
    /// Skill gained per session played at exactly the right difficulty
    pub learning_rate: f64,
    rng: ChaCha8Rng,
}

impl SyntheticPlayer {
    pub fn new(id: u64, mut rng: ChaCha8Rng) -> Self {
        let true_skill = rng.gen_range(10.0..70.0);
        let learning_rate = rng.gen_range(0.2..1.2);
        Self {
            id,
            true_skill,
            learning_rate,
            rng,
        }
    }

    /// Roughly normal noise in [-1, 1]
    fn noise(&mut self) -> f64 {
        (0..3).map(|_| self.rng.gen_range(-1.0f64..1.0)).sum::<f64>() / 3.0
    }

    /// Play one session at `difficulty` and report its metrics
    pub fn play(&mut self, difficulty: f64) -> PerformanceSample {
        let challenge = self.true_skill - difficulty;
        let mode = *GameMode::RATED
            .choose(&mut self.rng)
            .unwrap_or(&GameMode::Precision);

        let accuracy = (70.0 + challenge * 0.5 + self.noise() * 8.0).clamp(5.0, 100.0);
        let reaction_time_ms =
            (650.0 - self.true_skill * 4.0 + difficulty * 1.5 + self.noise() * 40.0)
                .clamp(120.0, 1100.0);
        let consistency =
            (55.0 + challenge * 0.3 + self.true_skill * 0.2 + self.noise() * 6.0).clamp(0.0, 100.0);

        let hits = (SHOTS_PER_SESSION as f64 * accuracy / 100.0).round() as u32;
        let perfect_shots = (hits as f64 * self.true_skill / 200.0).round() as u32;
        let streak = hits.min(self.rng.gen_range(1..=hits.max(1)));

        // Practice pays off most near the edge of ability
        let engagement = (1.0 - challenge.abs() / LEARNING_BAND).max(0.0);
        self.true_skill = (self.true_skill + self.learning_rate * engagement).min(100.0);

        PerformanceSample::new(mode, accuracy, reaction_time_ms, consistency)
            .with_shots(hits, SHOTS_PER_SESSION - hits)
            .with_perfect_shots(perfect_shots)
            .with_streak(streak)
            .with_score(hits * 100 + perfect_shots * 50)
            .with_difficulty(difficulty.clamp(0.0, 100.0))
    }
}
