//! Difficulty recommendations
//!
//! Rules are checked in priority order and the first match decides the
//! target difficulty:
//! 1. boredom risk above threshold: step up hard
//! 2. frustration risk above threshold: step down hard
//! 3. strong improving trend: step up
//! 4. strong declining trend: step down
//! 5. otherwise: settle on the profile's optimal difficulty

use crate::analysis::{PerformanceAnalysis, SkillGaps, Trend};
use crate::core::config::RecommendationConfig;
use crate::core::types::GameMode;
use crate::profile::SkillProfile;
use crate::recommend::GameplayMultipliers;
use crate::stats::clamp_rating;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentDirection {
    Increase,
    Decrease,
    Maintain,
}

impl AdjustmentDirection {
    pub fn label(self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::Maintain => "maintain",
        }
    }
}

/// Which rule produced a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationReason {
    PreventBoredom,
    ReduceFrustration,
    StrongImprovement,
    PerformanceDecline,
    StablePerformance,
}

impl RecommendationReason {
    pub fn label(self) -> &'static str {
        match self {
            Self::PreventBoredom => "prevent boredom",
            Self::ReduceFrustration => "reduce frustration",
            Self::StrongImprovement => "strong improvement",
            Self::PerformanceDecline => "performance decline",
            Self::StablePerformance => "stable performance",
        }
    }
}

/// Area a player should practice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    Accuracy,
    ReactionSpeed,
    Consistency,
    Stability,
}

impl FocusArea {
    pub fn label(self) -> &'static str {
        match self {
            Self::Accuracy => "Accuracy & precision",
            Self::ReactionSpeed => "Reaction speed",
            Self::Consistency => "Consistency",
            Self::Stability => "Performance stability",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyRecommendation {
    pub target_difficulty: f64,
    pub direction: AdjustmentDirection,
    pub reason: RecommendationReason,
    pub confidence: f64,
    pub multipliers: GameplayMultipliers,
    pub recommended_modes: Vec<GameMode>,
    pub focus_areas: Vec<FocusArea>,
}

impl DifficultyRecommendation {
    /// One-line human-readable description
    pub fn summary(&self) -> String {
        let focus = if self.focus_areas.is_empty() {
            "none".to_string()
        } else {
            self.focus_areas
                .iter()
                .map(|f| f.label())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let modes = self
            .recommended_modes
            .iter()
            .map(|m| m.label())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{} to {:.1} ({}, confidence {:.0}%) | modes: {} | focus: {}",
            self.direction.label(),
            self.target_difficulty,
            self.reason.label(),
            self.confidence,
            modes,
            focus
        )
    }
}

/// Pick the target difficulty for the next session
pub fn recommend(
    profile: &SkillProfile,
    analysis: &PerformanceAnalysis,
    current_difficulty: f64,
    config: &RecommendationConfig,
) -> DifficultyRecommendation {
    let step_up = |step: f64| (current_difficulty + step).min(100.0);
    let step_down = |step: f64| (current_difficulty - step).max(0.0);

    let (target_difficulty, direction, reason) = if analysis.boredom_risk > config.boredom_threshold
    {
        (
            step_up(config.risk_step),
            AdjustmentDirection::Increase,
            RecommendationReason::PreventBoredom,
        )
    } else if analysis.frustration_risk > config.frustration_threshold {
        (
            step_down(config.risk_step),
            AdjustmentDirection::Decrease,
            RecommendationReason::ReduceFrustration,
        )
    } else if analysis.trend == Trend::Improving
        && analysis.trend_strength > config.trend_strength_threshold
    {
        (
            step_up(config.trend_step),
            AdjustmentDirection::Increase,
            RecommendationReason::StrongImprovement,
        )
    } else if analysis.trend == Trend::Declining
        && analysis.trend_strength > config.trend_strength_threshold
    {
        (
            step_down(config.trend_step),
            AdjustmentDirection::Decrease,
            RecommendationReason::PerformanceDecline,
        )
    } else {
        (
            profile.optimal_difficulty,
            AdjustmentDirection::Maintain,
            RecommendationReason::StablePerformance,
        )
    };

    DifficultyRecommendation {
        target_difficulty,
        direction,
        reason,
        confidence: clamp_rating(profile.confidence + analysis.stability / 2.0),
        multipliers: GameplayMultipliers::for_difficulty(target_difficulty),
        recommended_modes: recommended_modes(profile, &analysis.skill_gaps, config),
        focus_areas: focus_areas(analysis, config),
    }
}

fn recommended_modes(
    profile: &SkillProfile,
    gaps: &SkillGaps,
    config: &RecommendationConfig,
) -> Vec<GameMode> {
    let mut modes = Vec::new();
    if gaps.accuracy < config.mode_gap_threshold {
        modes.push(GameMode::Precision);
    }
    if gaps.speed < config.mode_gap_threshold {
        modes.push(GameMode::Flick);
    }
    if gaps.consistency < config.mode_gap_threshold {
        modes.push(GameMode::Tracking);
    }
    if modes.is_empty() {
        modes.push(GameMode::Precision);
    }
    if profile.overall_skill > config.advanced_skill_threshold {
        modes.extend(GameMode::ADVANCED);
    }
    modes
}

fn focus_areas(analysis: &PerformanceAnalysis, config: &RecommendationConfig) -> Vec<FocusArea> {
    let gaps = &analysis.skill_gaps;
    let mut areas = Vec::new();
    if gaps.accuracy < config.focus_gap_threshold {
        areas.push(FocusArea::Accuracy);
    }
    if gaps.speed < config.focus_gap_threshold {
        areas.push(FocusArea::ReactionSpeed);
    }
    if gaps.consistency < config.focus_gap_threshold {
        areas.push(FocusArea::Consistency);
    }
    if analysis.stability < config.focus_stability_threshold {
        areas.push(FocusArea::Stability);
    }
    areas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::create_initial_profile;

    fn config() -> RecommendationConfig {
        RecommendationConfig::default()
    }

    #[test]
    fn test_boredom_wins_over_frustration() {
        let analysis = PerformanceAnalysis {
            boredom_risk: 80.0,
            frustration_risk: 80.0,
            ..PerformanceAnalysis::default()
        };
        let rec = recommend(&create_initial_profile(), &analysis, 50.0, &config());
        assert_eq!(rec.direction, AdjustmentDirection::Increase);
        assert_eq!(rec.reason, RecommendationReason::PreventBoredom);
        assert_eq!(rec.target_difficulty, 65.0);
    }

    #[test]
    fn test_frustration_steps_down_and_floors() {
        let analysis = PerformanceAnalysis {
            frustration_risk: 75.0,
            ..PerformanceAnalysis::default()
        };
        let rec = recommend(&create_initial_profile(), &analysis, 10.0, &config());
        assert_eq!(rec.direction, AdjustmentDirection::Decrease);
        assert_eq!(rec.target_difficulty, 0.0);
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        let analysis = PerformanceAnalysis {
            boredom_risk: 70.0,
            frustration_risk: 70.0,
            trend: Trend::Improving,
            trend_strength: 15.0,
            ..PerformanceAnalysis::default()
        };
        let rec = recommend(&create_initial_profile(), &analysis, 50.0, &config());
        assert_eq!(rec.direction, AdjustmentDirection::Maintain);
        assert_eq!(rec.target_difficulty, 25.0);
    }

    #[test]
    fn test_trend_rules() {
        let improving = PerformanceAnalysis {
            trend: Trend::Improving,
            trend_strength: 40.0,
            ..PerformanceAnalysis::default()
        };
        let rec = recommend(&create_initial_profile(), &improving, 95.0, &config());
        assert_eq!(rec.reason, RecommendationReason::StrongImprovement);
        assert_eq!(rec.target_difficulty, 100.0);

        let declining = PerformanceAnalysis {
            trend: Trend::Declining,
            trend_strength: 40.0,
            ..PerformanceAnalysis::default()
        };
        let rec = recommend(&create_initial_profile(), &declining, 50.0, &config());
        assert_eq!(rec.reason, RecommendationReason::PerformanceDecline);
        assert_eq!(rec.target_difficulty, 40.0);
    }

    #[test]
    fn test_confidence_uses_stability() {
        let analysis = PerformanceAnalysis {
            stability: 50.0,
            ..PerformanceAnalysis::default()
        };
        let rec = recommend(&create_initial_profile(), &analysis, 50.0, &config());
        assert_eq!(rec.confidence, 45.0);

        let mut profile = create_initial_profile();
        profile.confidence = 90.0;
        let rec = recommend(&profile, &PerformanceAnalysis::default(), 50.0, &config());
        assert_eq!(rec.confidence, 100.0);
    }

    #[test]
    fn test_modes_from_gaps() {
        let analysis = PerformanceAnalysis {
            skill_gaps: SkillGaps {
                accuracy: -25.0,
                speed: -30.0,
                consistency: -10.0,
            },
            ..PerformanceAnalysis::default()
        };
        let rec = recommend(&create_initial_profile(), &analysis, 50.0, &config());
        assert_eq!(rec.recommended_modes, vec![GameMode::Precision, GameMode::Flick]);
        assert_eq!(rec.focus_areas, vec![FocusArea::Accuracy, FocusArea::ReactionSpeed]);
    }

    #[test]
    fn test_modes_fallback_and_advanced() {
        let rec = recommend(
            &create_initial_profile(),
            &PerformanceAnalysis::default(),
            50.0,
            &config(),
        );
        assert_eq!(rec.recommended_modes, vec![GameMode::Precision]);
        assert!(rec.focus_areas.is_empty());

        let mut strong = create_initial_profile();
        strong.overall_skill = 80.0;
        let rec = recommend(&strong, &PerformanceAnalysis::default(), 50.0, &config());
        assert_eq!(
            rec.recommended_modes,
            vec![GameMode::Precision, GameMode::MultiTarget, GameMode::SpeedFlick]
        );
    }

    #[test]
    fn test_unstable_play_is_a_focus_area() {
        let analysis = PerformanceAnalysis {
            stability: 40.0,
            skill_gaps: SkillGaps {
                accuracy: 0.0,
                speed: 0.0,
                consistency: -16.0,
            },
            ..PerformanceAnalysis::default()
        };
        let rec = recommend(&create_initial_profile(), &analysis, 50.0, &config());
        assert_eq!(rec.focus_areas, vec![FocusArea::Consistency, FocusArea::Stability]);
    }

    #[test]
    fn test_summary_mentions_direction_and_reason() {
        let rec = recommend(
            &create_initial_profile(),
            &PerformanceAnalysis::default(),
            50.0,
            &config(),
        );
        let summary = rec.summary();
        assert!(summary.starts_with("maintain to 25.0"));
        assert!(summary.contains("stable performance"));
        assert!(summary.contains("focus: none"));
    }
}
