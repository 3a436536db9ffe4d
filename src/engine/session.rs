//! A player's training context
//!
//! Bundles the engine (and with it the player's history) with the profile
//! and the difficulty the next session will be played at.

use crate::core::config::EngineConfig;
use crate::core::types::PerformanceSample;
use crate::engine::{AdaptiveEngine, SessionOutcome};
use crate::profile::{create_initial_profile, SkillProfile};

#[derive(Debug, Clone)]
pub struct TrainingSession {
    engine: AdaptiveEngine,
    profile: SkillProfile,
    difficulty: f64,
}

impl TrainingSession {
    /// Fresh player starting at the initial profile's optimal difficulty
    pub fn new(config: EngineConfig) -> Self {
        let profile = create_initial_profile();
        let difficulty = profile.optimal_difficulty;
        Self {
            engine: AdaptiveEngine::new(config),
            profile,
            difficulty,
        }
    }

    /// Resume a known player
    pub fn with_profile(config: EngineConfig, profile: SkillProfile, difficulty: f64) -> Self {
        Self {
            engine: AdaptiveEngine::new(config),
            profile,
            difficulty: difficulty.clamp(0.0, 100.0),
        }
    }

    pub fn profile(&self) -> &SkillProfile {
        &self.profile
    }

    /// Difficulty the next session should be played at
    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    pub fn engine(&self) -> &AdaptiveEngine {
        &self.engine
    }

    /// Record a finished session and adopt the recommended difficulty
    pub fn complete_session(&mut self, sample: PerformanceSample) -> SessionOutcome {
        let outcome = self
            .engine
            .analyze_and_recommend(sample, &self.profile, self.difficulty);
        self.profile = outcome.profile.clone();
        self.difficulty = outcome.recommendation.target_difficulty;
        outcome
    }

    /// Forget everything learned about the player
    pub fn reset_profile(&mut self) {
        self.profile.reset();
        self.engine.clear_history();
        self.difficulty = self.profile.optimal_difficulty;
        tracing::info!("Reset skill profile");
    }
}

impl Default for TrainingSession {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::GameMode;

    #[test]
    fn test_new_session_starts_at_optimal() {
        let session = TrainingSession::default();
        assert_eq!(session.difficulty(), 25.0);
        assert!(session.engine().history().is_empty());
    }

    #[test]
    fn test_complete_session_adopts_target() {
        let mut session = TrainingSession::default();
        let outcome =
            session.complete_session(PerformanceSample::new(GameMode::Flick, 80.0, 250.0, 70.0));
        assert_eq!(session.difficulty(), outcome.recommendation.target_difficulty);
        assert_eq!(session.profile(), &outcome.profile);
    }

    #[test]
    fn test_bored_player_is_pushed_up() {
        let mut session = TrainingSession::default();
        for _ in 0..5 {
            session.complete_session(PerformanceSample::new(GameMode::Precision, 95.0, 180.0, 90.0));
        }
        // flat sessions above 85% push boredom past 70 from the fourth session on
        assert!(session.difficulty() > 25.0);
    }

    #[test]
    fn test_reset_profile() {
        let mut session = TrainingSession::default();
        for _ in 0..4 {
            session.complete_session(PerformanceSample::new(GameMode::Flick, 90.0, 200.0, 80.0));
        }
        session.reset_profile();
        assert_eq!(session.profile().sessions_analyzed, 0);
        assert_eq!(session.difficulty(), 25.0);
        assert!(session.engine().history().is_empty());
    }

    #[test]
    fn test_with_profile_clamps_difficulty() {
        let session = TrainingSession::with_profile(
            EngineConfig::default(),
            create_initial_profile(),
            140.0,
        );
        assert_eq!(session.difficulty(), 100.0);
    }
}
