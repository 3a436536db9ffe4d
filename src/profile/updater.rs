//! Exponentially-smoothed skill profile updates
//!
//! Each rating moves toward the value observed in the latest session by a
//! fraction (the adaptation rate). Ratings for a mode only move when the
//! session was played in that mode.

use crate::analysis::{PerformanceAnalysis, Trend};
use crate::core::config::ProfileConfig;
use crate::core::constants::{REACTION_BEST_MS, REACTION_MS_PER_POINT};
use crate::core::types::{now_millis, GameMode, PerformanceSample};
use crate::profile::SkillProfile;
use crate::stats::{average, clamp_rating};

/// Map a reaction time to a speed rating: 100ms is 100, 1100ms is 0
pub fn reaction_time_to_rating(reaction_time_ms: f64) -> f64 {
    clamp_rating(100.0 - (reaction_time_ms - REACTION_BEST_MS) / REACTION_MS_PER_POINT)
}

/// Fraction of the gap between rating and observation closed per session
pub fn adaptation_rate(sessions_analyzed: u32, config: &ProfileConfig) -> f64 {
    let rate = config.base_adaptation_rate
        * (1.0 + sessions_analyzed as f64 * config.adaptation_session_factor);
    rate.min(config.max_adaptation_rate)
}

fn smooth(current: f64, observed: f64, rate: f64) -> f64 {
    clamp_rating(current + (observed - current) * rate)
}

/// Value a mode-specific rating observes for this sample
fn mode_observation(sample: &PerformanceSample, speed: f64) -> f64 {
    match sample.game_mode {
        GameMode::Flick => (sample.accuracy + speed) / 2.0,
        GameMode::Tracking => (sample.accuracy + sample.consistency) / 2.0,
        _ => (sample.accuracy + sample.perfect_shot_rate()) / 2.0,
    }
}

/// Fold one session into the profile, returning the updated profile
pub fn update_profile(
    profile: &SkillProfile,
    sample: &PerformanceSample,
    analysis: &PerformanceAnalysis,
    config: &ProfileConfig,
) -> SkillProfile {
    let rate = adaptation_rate(profile.sessions_analyzed, config);
    let observed_speed = reaction_time_to_rating(sample.reaction_time_ms);
    let observed_mode = mode_observation(sample, observed_speed);

    let mut next = profile.clone();
    next.accuracy_rating = smooth(profile.accuracy_rating, sample.accuracy, rate);
    next.speed_rating = smooth(profile.speed_rating, observed_speed, rate);
    next.consistency_rating = smooth(profile.consistency_rating, sample.consistency, rate);

    match sample.game_mode {
        GameMode::Flick => next.flick_skill = smooth(profile.flick_skill, observed_mode, rate),
        GameMode::Tracking => {
            next.tracking_skill = smooth(profile.tracking_skill, observed_mode, rate)
        }
        GameMode::Precision => {
            next.precision_skill = smooth(profile.precision_skill, observed_mode, rate)
        }
        _ => {}
    }

    next.overall_skill = clamp_rating(average(&next.tracked_ratings()));
    next.improvement_rate = match analysis.trend {
        Trend::Improving => analysis.trend_strength,
        Trend::Declining => -analysis.trend_strength,
        Trend::Stable => 0.0,
    };
    next.confidence = clamp_rating(profile.confidence + config.confidence_step);

    let mut optimal = next.overall_skill * config.optimal_difficulty_scale;
    if analysis.frustration_risk > config.risk_adjust_threshold {
        optimal -= config.risk_difficulty_adjust;
    }
    if analysis.boredom_risk > config.risk_adjust_threshold {
        optimal += config.risk_difficulty_adjust;
    }
    next.optimal_difficulty = clamp_rating(optimal);
    next.challenge_threshold = next.optimal_difficulty + config.challenge_offset;
    next.comfort_zone = next.optimal_difficulty - config.comfort_offset;

    next.sessions_analyzed = profile.sessions_analyzed.saturating_add(1);
    next.last_updated = now_millis().max(profile.last_updated);

    tracing::debug!(
        sessions = next.sessions_analyzed,
        rate,
        overall = next.overall_skill,
        optimal = next.optimal_difficulty,
        "Updated skill profile"
    );

    next
}
