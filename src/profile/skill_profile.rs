//! Per-player rolling skill estimate

use crate::core::constants::{
    CHALLENGE_OFFSET, COMFORT_OFFSET, INITIAL_CONFIDENCE, INITIAL_OPTIMAL_DIFFICULTY,
    INITIAL_RATING,
};
use crate::core::types::{now_millis, GameMode};
use serde::{Deserialize, Serialize};

/// A general (mode-independent) skill dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillDimension {
    Accuracy,
    Speed,
    Consistency,
}

/// Rolling skill estimate for one player
///
/// All ratings stay within [0, 100]. `challenge_threshold` and
/// `comfort_zone` are offsets of `optimal_difficulty` and are not clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillProfile {
    pub overall_skill: f64,
    pub accuracy_rating: f64,
    pub speed_rating: f64,
    pub consistency_rating: f64,
    pub flick_skill: f64,
    pub tracking_skill: f64,
    pub precision_skill: f64,
    /// Signed trend strength of the last analysis (-100 to 100)
    pub improvement_rate: f64,
    /// Grows with every analyzed session, saturating at 100
    pub confidence: f64,
    pub optimal_difficulty: f64,
    pub challenge_threshold: f64,
    pub comfort_zone: f64,
    /// Milliseconds since the Unix epoch
    pub last_updated: u64,
    pub sessions_analyzed: u32,
}

impl SkillProfile {
    /// Rating for a mode with its own skill, `None` for other modes
    pub fn mode_rating(&self, mode: GameMode) -> Option<f64> {
        match mode {
            GameMode::Flick => Some(self.flick_skill),
            GameMode::Tracking => Some(self.tracking_skill),
            GameMode::Precision => Some(self.precision_skill),
            _ => None,
        }
    }

    pub fn dimension_rating(&self, dimension: SkillDimension) -> f64 {
        match dimension {
            SkillDimension::Accuracy => self.accuracy_rating,
            SkillDimension::Speed => self.speed_rating,
            SkillDimension::Consistency => self.consistency_rating,
        }
    }

    /// General dimension with the lowest rating (first wins on ties)
    pub fn weakest_dimension(&self) -> SkillDimension {
        [
            SkillDimension::Accuracy,
            SkillDimension::Speed,
            SkillDimension::Consistency,
        ]
        .into_iter()
        .fold(SkillDimension::Accuracy, |weakest, dim| {
            if self.dimension_rating(dim) < self.dimension_rating(weakest) {
                dim
            } else {
                weakest
            }
        })
    }

    /// The six tracked ratings: three general, then three mode-specific
    pub fn tracked_ratings(&self) -> [f64; 6] {
        [
            self.accuracy_rating,
            self.speed_rating,
            self.consistency_rating,
            self.flick_skill,
            self.tracking_skill,
            self.precision_skill,
        ]
    }

    /// Discard everything learned and start over
    pub fn reset(&mut self) {
        *self = create_initial_profile();
    }
}

impl Default for SkillProfile {
    fn default() -> Self {
        create_initial_profile()
    }
}

/// Profile for a player the engine has never seen: low skill, low confidence
pub fn create_initial_profile() -> SkillProfile {
    SkillProfile {
        overall_skill: INITIAL_RATING,
        accuracy_rating: INITIAL_RATING,
        speed_rating: INITIAL_RATING,
        consistency_rating: INITIAL_RATING,
        flick_skill: INITIAL_RATING,
        tracking_skill: INITIAL_RATING,
        precision_skill: INITIAL_RATING,
        improvement_rate: 0.0,
        confidence: INITIAL_CONFIDENCE,
        optimal_difficulty: INITIAL_OPTIMAL_DIFFICULTY,
        challenge_threshold: INITIAL_OPTIMAL_DIFFICULTY + CHALLENGE_OFFSET,
        comfort_zone: INITIAL_OPTIMAL_DIFFICULTY - COMFORT_OFFSET,
        last_updated: now_millis(),
        sessions_analyzed: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_profile() {
        let profile = create_initial_profile();
        assert_eq!(profile.overall_skill, 30.0);
        assert_eq!(profile.confidence, 20.0);
        assert_eq!(profile.optimal_difficulty, 25.0);
        assert_eq!(profile.challenge_threshold, 45.0);
        assert_eq!(profile.comfort_zone, 15.0);
        assert_eq!(profile.sessions_analyzed, 0);
    }

    #[test]
    fn test_mode_rating() {
        let mut profile = create_initial_profile();
        profile.tracking_skill = 64.0;
        assert_eq!(profile.mode_rating(GameMode::Tracking), Some(64.0));
        assert_eq!(profile.mode_rating(GameMode::MultiTarget), None);
    }

    #[test]
    fn test_weakest_dimension() {
        let mut profile = create_initial_profile();
        assert_eq!(profile.weakest_dimension(), SkillDimension::Accuracy);
        profile.accuracy_rating = 80.0;
        profile.speed_rating = 55.0;
        profile.consistency_rating = 40.0;
        assert_eq!(profile.weakest_dimension(), SkillDimension::Consistency);
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut profile = create_initial_profile();
        profile.accuracy_rating = 90.0;
        profile.sessions_analyzed = 12;
        profile.confidence = 44.0;
        profile.reset();
        assert_eq!(profile.accuracy_rating, 30.0);
        assert_eq!(profile.sessions_analyzed, 0);
        assert_eq!(profile.confidence, 20.0);
    }
}
