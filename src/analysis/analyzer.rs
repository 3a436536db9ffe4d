//! Performance analysis over a player's recent history
//!
//! Compares the latest window of samples against the window before it to
//! classify the trend, then scores stability, skill gaps against baseline
//! expectations, and the risk that the current difficulty is frustrating or
//! boring the player.

use crate::core::config::{AnalysisConfig, Baselines};
use crate::core::constants::{
    RATING_MAX, STABILITY_STDDEV_PENALTY, TREND_STRENGTH_SCALE,
};
use crate::core::types::PerformanceSample;
use crate::stats::{average, clamp_rating, standard_deviation};
use serde::{Deserialize, Serialize};

/// Direction of recent performance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl Trend {
    pub fn label(self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
        }
    }
}

/// Percentage deviation of recent averages from baseline expectations
///
/// Positive is better than baseline for every metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGaps {
    pub accuracy: f64,
    pub speed: f64,
    pub consistency: f64,
}

impl SkillGaps {
    fn from_recent(accuracy: f64, reaction_ms: f64, consistency: f64, baselines: &Baselines) -> Self {
        Self {
            accuracy: (accuracy - baselines.accuracy) / baselines.accuracy * 100.0,
            // Lower reaction time is better
            speed: (baselines.reaction_ms - reaction_ms) / baselines.reaction_ms * 100.0,
            consistency: (consistency - baselines.consistency) / baselines.consistency * 100.0,
        }
    }
}

/// Averages over the recent window
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowAverages {
    pub accuracy: f64,
    pub reaction_time_ms: f64,
    pub consistency: f64,
}

/// Result of one analysis pass; recomputed from scratch on every call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    pub trend: Trend,
    /// |overall trend| x 10, clamped to [0, 100]
    pub trend_strength: f64,
    /// Signed mean of the per-metric deltas between windows
    pub overall_trend: f64,
    pub recent: WindowAverages,
    /// 100 minus twice the std dev of recent accuracy, floored at 0
    pub stability: f64,
    pub skill_gaps: SkillGaps,
    pub frustration_risk: f64,
    pub boredom_risk: f64,
    pub adaptation_needed: bool,
}

impl Default for PerformanceAnalysis {
    fn default() -> Self {
        Self {
            trend: Trend::Stable,
            trend_strength: 0.0,
            overall_trend: 0.0,
            recent: WindowAverages::default(),
            stability: RATING_MAX,
            skill_gaps: SkillGaps::default(),
            frustration_risk: 0.0,
            boredom_risk: 0.0,
            adaptation_needed: false,
        }
    }
}

/// Analyze a history ordered oldest first
pub fn analyze(history: &[PerformanceSample], config: &AnalysisConfig) -> PerformanceAnalysis {
    if history.len() < config.min_samples {
        tracing::trace!(samples = history.len(), "Cold start, using default analysis");
        return PerformanceAnalysis::default();
    }

    let window = config.window;
    let recent_start = history.len().saturating_sub(window);
    let older_start = recent_start.saturating_sub(window);
    let recent = &history[recent_start..];
    let older = match &history[older_start..recent_start] {
        [] => recent,
        older => older,
    };

    let recent_accuracy = accuracies(recent);
    let recent_avg = window_averages(recent);
    let older_avg = window_averages(older);

    let accuracy_delta = recent_avg.accuracy - older_avg.accuracy;
    // Reaction time improves as it decreases
    let reaction_delta = older_avg.reaction_time_ms - recent_avg.reaction_time_ms;
    let consistency_delta = recent_avg.consistency - older_avg.consistency;
    let overall_trend = (accuracy_delta + reaction_delta + consistency_delta) / 3.0;

    let trend = if overall_trend > config.trend_threshold {
        Trend::Improving
    } else if overall_trend < -config.trend_threshold {
        Trend::Declining
    } else {
        Trend::Stable
    };

    let stability =
        (RATING_MAX - STABILITY_STDDEV_PENALTY * standard_deviation(&recent_accuracy)).max(0.0);

    let analysis = PerformanceAnalysis {
        trend,
        trend_strength: clamp_rating(overall_trend.abs() * TREND_STRENGTH_SCALE),
        overall_trend,
        recent: recent_avg,
        stability: clamp_rating(stability),
        skill_gaps: SkillGaps::from_recent(
            recent_avg.accuracy,
            recent_avg.reaction_time_ms,
            recent_avg.consistency,
            &config.baselines,
        ),
        frustration_risk: frustration_risk(history, config),
        boredom_risk: boredom_risk(history, config),
        adaptation_needed: overall_trend.abs() > config.adaptation_threshold,
    };

    tracing::debug!(
        trend = analysis.trend.label(),
        strength = analysis.trend_strength,
        stability = analysis.stability,
        frustration = analysis.frustration_risk,
        boredom = analysis.boredom_risk,
        "Analyzed performance"
    );

    analysis
}

fn accuracies(samples: &[PerformanceSample]) -> Vec<f64> {
    samples.iter().map(|s| s.accuracy).collect()
}

fn window_averages(samples: &[PerformanceSample]) -> WindowAverages {
    let reactions: Vec<f64> = samples.iter().map(|s| s.reaction_time_ms).collect();
    let consistencies: Vec<f64> = samples.iter().map(|s| s.consistency).collect();
    WindowAverages {
        accuracy: average(&accuracies(samples)),
        reaction_time_ms: average(&reactions),
        consistency: average(&consistencies),
    }
}

fn tail(history: &[PerformanceSample], n: usize) -> &[PerformanceSample] {
    &history[history.len().saturating_sub(n)..]
}

/// Accuracy drops between consecutive latest samples plus low-accuracy sessions
fn frustration_risk(history: &[PerformanceSample], config: &AnalysisConfig) -> f64 {
    let latest = tail(history, config.frustration_window);
    let declines = latest
        .windows(2)
        .filter(|pair| pair[1].accuracy < pair[0].accuracy)
        .count();
    let low = latest
        .iter()
        .filter(|s| s.accuracy < config.frustration_low_accuracy)
        .count();

    clamp_rating(
        declines as f64 * config.frustration_decline_weight
            + low as f64 * config.frustration_low_accuracy_weight,
    )
}

/// High-accuracy sessions plus a bonus when results barely vary
fn boredom_risk(history: &[PerformanceSample], config: &AnalysisConfig) -> f64 {
    let latest = accuracies(tail(history, config.boredom_window));
    let high = latest
        .iter()
        .filter(|&&acc| acc > config.boredom_high_accuracy)
        .count();
    let mut risk = high as f64 * config.boredom_high_accuracy_weight;
    if standard_deviation(&latest) < config.boredom_flat_stddev {
        risk += config.boredom_flat_bonus;
    }
    clamp_rating(risk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::GameMode;

    fn sample(accuracy: f64) -> PerformanceSample {
        PerformanceSample::new(GameMode::Flick, accuracy, 300.0, 60.0)
    }

    fn run(accs: &[f64]) -> PerformanceAnalysis {
        let history: Vec<_> = accs.iter().map(|&a| sample(a)).collect();
        analyze(&history, &AnalysisConfig::default())
    }

    #[test]
    fn test_cold_start_returns_default() {
        assert_eq!(run(&[]), PerformanceAnalysis::default());
        assert_eq!(run(&[10.0]), PerformanceAnalysis::default());
        assert_eq!(run(&[10.0, 95.0]), PerformanceAnalysis::default());
    }

    #[test]
    fn test_no_older_window_means_zero_trend() {
        let analysis = run(&[50.0, 70.0, 90.0, 95.0]);
        assert_eq!(analysis.trend, Trend::Stable);
        assert_eq!(analysis.overall_trend, 0.0);
        assert_eq!(analysis.trend_strength, 0.0);
        assert!(!analysis.adaptation_needed);
    }

    #[test]
    fn test_improving_accuracy() {
        let mut accs = vec![60.0; 10];
        accs.extend(vec![75.0; 10]);
        let analysis = run(&accs);
        // accuracy delta 15, others 0 => overall 5
        assert_eq!(analysis.trend, Trend::Improving);
        assert!((analysis.overall_trend - 5.0).abs() < 1e-9);
        assert!((analysis.trend_strength - 50.0).abs() < 1e-9);
        assert!(!analysis.adaptation_needed);
    }

    #[test]
    fn test_declining_reaction_time() {
        let mut history: Vec<_> = (0..10)
            .map(|_| PerformanceSample::new(GameMode::Flick, 70.0, 250.0, 60.0))
            .collect();
        history.extend((0..10).map(|_| PerformanceSample::new(GameMode::Flick, 70.0, 280.0, 60.0)));
        let analysis = analyze(&history, &AnalysisConfig::default());
        // reaction slowed by 30ms => overall -10
        assert_eq!(analysis.trend, Trend::Declining);
        assert!(analysis.adaptation_needed);
        assert_eq!(analysis.trend_strength, 100.0);
    }

    #[test]
    fn test_partial_older_window() {
        // 13 samples: recent = last 10, older = first 3
        let mut accs = vec![40.0; 3];
        accs.extend(vec![52.0; 10]);
        let analysis = run(&accs);
        assert!((analysis.overall_trend - 4.0).abs() < 1e-9);
        assert_eq!(analysis.trend, Trend::Improving);
    }

    #[test]
    fn test_stability_penalizes_spread() {
        let analysis = run(&[60.0, 80.0, 60.0, 80.0]);
        // std dev 10 => stability 80
        assert!((analysis.stability - 80.0).abs() < 1e-9);
        let wild = run(&[0.0, 100.0, 0.0, 100.0]);
        assert_eq!(wild.stability, 0.0);
    }

    #[test]
    fn test_skill_gaps_against_baseline() {
        let history: Vec<_> = (0..5)
            .map(|_| PerformanceSample::new(GameMode::Tracking, 56.0, 500.0, 72.0))
            .collect();
        let analysis = analyze(&history, &AnalysisConfig::default());
        assert!((analysis.skill_gaps.accuracy - -20.0).abs() < 1e-9);
        assert!((analysis.skill_gaps.speed - -25.0).abs() < 1e-9);
        assert!((analysis.skill_gaps.consistency - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_frustration_risk() {
        // two declines (50) + three below 60 (60) => clamped to 100
        assert_eq!(run(&[70.0, 59.0, 55.0, 50.0]).frustration_risk, 100.0);
        // one decline (25) + one below 60 (20)
        assert!((run(&[70.0, 70.0, 80.0, 55.0]).frustration_risk - 45.0).abs() < 1e-9);
        // steady good play
        assert_eq!(run(&[70.0, 72.0, 74.0]).frustration_risk, 0.0);
    }

    #[test]
    fn test_boredom_risk() {
        // five above 85 (75) + flat (25)
        assert_eq!(run(&[90.0, 90.0, 90.0, 90.0, 90.0]).boredom_risk, 100.0);
        // spread out, two above 85
        let analysis = run(&[50.0, 90.0, 60.0, 95.0, 70.0]);
        assert!((analysis.boredom_risk - 30.0).abs() < 1e-9);
        // flat but mediocre
        let analysis = run(&[70.0, 71.0, 70.0, 71.0, 70.0]);
        assert!((analysis.boredom_risk - 25.0).abs() < 1e-9);
    }
}
