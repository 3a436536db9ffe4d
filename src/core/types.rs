//! Core data types shared across the engine

use crate::core::constants::{RATING_MAX, RATING_MIN};
use crate::core::error::{AdaptError, Result};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Training mode a session was played in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Flick,
    Tracking,
    Precision,
    /// Advanced: several simultaneous targets
    MultiTarget,
    /// Advanced: flicks under a tight time limit
    SpeedFlick,
    /// Any mode without a dedicated skill rating
    #[serde(other)]
    Other,
}

impl GameMode {
    /// Modes with their own rating in the skill profile
    pub const RATED: [GameMode; 3] = [GameMode::Flick, GameMode::Tracking, GameMode::Precision];

    /// Modes recommended to high-skill players
    pub const ADVANCED: [GameMode; 2] = [GameMode::MultiTarget, GameMode::SpeedFlick];

    pub fn label(self) -> &'static str {
        match self {
            Self::Flick => "flick",
            Self::Tracking => "tracking",
            Self::Precision => "precision",
            Self::MultiTarget => "multi_target",
            Self::SpeedFlick => "speed_flick",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Metrics recorded for one completed training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSample {
    pub score: u32,
    /// Percentage of shots that hit (0-100)
    pub accuracy: f64,
    /// Mean reaction time in milliseconds
    pub reaction_time_ms: f64,
    pub hits: u32,
    pub misses: u32,
    /// Longest hit streak
    pub streak: u32,
    pub game_mode: GameMode,
    /// Difficulty the session was played at (0-100)
    pub difficulty: f64,
    pub duration_seconds: f64,
    pub perfect_shots: u32,
    /// Percentage consistency of shot timing (0-100)
    pub consistency: f64,
}

impl PerformanceSample {
    /// Create a sample from the metrics the engine reads; counters start at zero
    pub fn new(game_mode: GameMode, accuracy: f64, reaction_time_ms: f64, consistency: f64) -> Self {
        Self {
            score: 0,
            accuracy,
            reaction_time_ms,
            hits: 0,
            misses: 0,
            streak: 0,
            game_mode,
            difficulty: 0.0,
            duration_seconds: 60.0,
            perfect_shots: 0,
            consistency,
        }
    }

    pub fn with_score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    pub fn with_shots(mut self, hits: u32, misses: u32) -> Self {
        self.hits = hits;
        self.misses = misses;
        self
    }

    pub fn with_streak(mut self, streak: u32) -> Self {
        self.streak = streak;
        self
    }

    pub fn with_perfect_shots(mut self, perfect_shots: u32) -> Self {
        self.perfect_shots = perfect_shots;
        self
    }

    pub fn with_difficulty(mut self, difficulty: f64) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_duration(mut self, duration_seconds: f64) -> Self {
        self.duration_seconds = duration_seconds;
        self
    }

    pub fn total_shots(&self) -> u32 {
        self.hits + self.misses
    }

    /// Hits over total shots (0.0 to 1.0), 0 when nothing was fired
    pub fn hit_ratio(&self) -> f64 {
        match self.total_shots() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }

    /// Perfect shots as a percentage of hits, 0 with no hits
    pub fn perfect_shot_rate(&self) -> f64 {
        if self.hits == 0 {
            return 0.0;
        }
        (self.perfect_shots as f64 / self.hits as f64 * 100.0).clamp(RATING_MIN, RATING_MAX)
    }

    /// Check that the fields the engine reads are well-formed
    ///
    /// The engine itself never calls this; loaders at the edge do.
    pub fn validate(&self) -> Result<()> {
        let percentages = [
            ("accuracy", self.accuracy),
            ("consistency", self.consistency),
            ("difficulty", self.difficulty),
        ];
        for (name, value) in percentages {
            if !value.is_finite() || !(RATING_MIN..=RATING_MAX).contains(&value) {
                return Err(AdaptError::InvalidSample(format!(
                    "{name} ({value}) must be within [0, 100]"
                )));
            }
        }
        if !self.reaction_time_ms.is_finite() || self.reaction_time_ms <= 0.0 {
            return Err(AdaptError::InvalidSample(format!(
                "reaction_time_ms ({}) must be positive",
                self.reaction_time_ms
            )));
        }
        if !self.duration_seconds.is_finite() || self.duration_seconds < 0.0 {
            return Err(AdaptError::InvalidSample(format!(
                "duration_seconds ({}) must not be negative",
                self.duration_seconds
            )));
        }
        if self.perfect_shots > self.hits && self.hits > 0 {
            return Err(AdaptError::InvalidSample(format!(
                "perfect_shots ({}) exceeds hits ({})",
                self.perfect_shots, self.hits
            )));
        }
        Ok(())
    }
}

/// Milliseconds since the Unix epoch
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_ratio_without_shots() {
        let sample = PerformanceSample::new(GameMode::Flick, 80.0, 300.0, 70.0);
        assert_eq!(sample.hit_ratio(), 0.0);
        assert_eq!(sample.perfect_shot_rate(), 0.0);
    }

    #[test]
    fn test_derived_metrics() {
        let sample = PerformanceSample::new(GameMode::Precision, 80.0, 300.0, 70.0)
            .with_shots(40, 10)
            .with_perfect_shots(10);
        assert_eq!(sample.total_shots(), 50);
        assert!((sample.hit_ratio() - 0.8).abs() < 1e-9);
        assert!((sample.perfect_shot_rate() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_validate_rejects_out_of_range_accuracy() {
        let sample = PerformanceSample::new(GameMode::Flick, 120.0, 300.0, 70.0);
        assert!(matches!(sample.validate(), Err(AdaptError::InvalidSample(_))));
    }

    #[test]
    fn test_validate_rejects_non_positive_reaction() {
        let sample = PerformanceSample::new(GameMode::Flick, 80.0, 0.0, 70.0);
        assert!(sample.validate().is_err());
        let sample = PerformanceSample::new(GameMode::Flick, 80.0, f64::NAN, 70.0);
        assert!(sample.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        let sample = PerformanceSample::new(GameMode::Tracking, 75.0, 250.0, 65.0)
            .with_shots(30, 10)
            .with_perfect_shots(5)
            .with_difficulty(40.0);
        assert!(sample.validate().is_ok());
    }

    #[test]
    fn test_unknown_mode_deserializes_as_other() {
        let mode: GameMode = serde_json::from_str("\"gridshot\"").unwrap();
        assert_eq!(mode, GameMode::Other);
        let mode: GameMode = serde_json::from_str("\"speed_flick\"").unwrap();
        assert_eq!(mode, GameMode::SpeedFlick);
    }
}
