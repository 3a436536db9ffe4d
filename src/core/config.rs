//! Engine configuration loaded from TOML
//!
//! Every section defaults to the constants in `core::constants`, so a TOML
//! file only needs to name the values it overrides.

use crate::core::constants::*;
use crate::core::error::{AdaptError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Expected recent-window averages of an average player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Baselines {
    /// Accuracy percentage
    pub accuracy: f64,
    /// Reaction time in milliseconds (lower is better)
    pub reaction_ms: f64,
    /// Consistency percentage
    pub consistency: f64,
}

impl Default for Baselines {
    fn default() -> Self {
        Self {
            accuracy: BASELINE_ACCURACY,
            reaction_ms: BASELINE_REACTION_MS,
            consistency: BASELINE_CONSISTENCY,
        }
    }
}

/// Performance analyzer tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum samples retained by a history
    pub history_capacity: usize,
    /// Size of the recent and older comparison windows
    pub window: usize,
    /// Cold-start guard: fewer samples than this yield the default analysis
    pub min_samples: usize,
    /// Overall trend magnitude separating stable from improving/declining
    pub trend_threshold: f64,
    /// Overall trend magnitude above which adaptation is needed
    pub adaptation_threshold: f64,
    pub frustration_window: usize,
    pub frustration_decline_weight: f64,
    pub frustration_low_accuracy: f64,
    pub frustration_low_accuracy_weight: f64,
    pub boredom_window: usize,
    pub boredom_high_accuracy: f64,
    pub boredom_high_accuracy_weight: f64,
    pub boredom_flat_stddev: f64,
    pub boredom_flat_bonus: f64,
    pub baselines: Baselines,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            history_capacity: HISTORY_CAPACITY,
            window: ANALYSIS_WINDOW,
            min_samples: MIN_SAMPLES_FOR_ANALYSIS,
            trend_threshold: TREND_THRESHOLD,
            adaptation_threshold: ADAPTATION_TREND_THRESHOLD,
            frustration_window: FRUSTRATION_WINDOW,
            frustration_decline_weight: FRUSTRATION_DECLINE_WEIGHT,
            frustration_low_accuracy: FRUSTRATION_LOW_ACCURACY,
            frustration_low_accuracy_weight: FRUSTRATION_LOW_ACCURACY_WEIGHT,
            boredom_window: BOREDOM_WINDOW,
            boredom_high_accuracy: BOREDOM_HIGH_ACCURACY,
            boredom_high_accuracy_weight: BOREDOM_HIGH_ACCURACY_WEIGHT,
            boredom_flat_stddev: BOREDOM_FLAT_STDDEV,
            boredom_flat_bonus: BOREDOM_FLAT_BONUS,
            baselines: Baselines::default(),
        }
    }
}

/// Skill profile updater tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub base_adaptation_rate: f64,
    pub max_adaptation_rate: f64,
    pub adaptation_session_factor: f64,
    pub confidence_step: f64,
    pub optimal_difficulty_scale: f64,
    pub risk_adjust_threshold: f64,
    pub risk_difficulty_adjust: f64,
    pub challenge_offset: f64,
    pub comfort_offset: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            base_adaptation_rate: BASE_ADAPTATION_RATE,
            max_adaptation_rate: MAX_ADAPTATION_RATE,
            adaptation_session_factor: ADAPTATION_SESSION_FACTOR,
            confidence_step: CONFIDENCE_STEP,
            optimal_difficulty_scale: OPTIMAL_DIFFICULTY_SCALE,
            risk_adjust_threshold: RISK_ADJUST_THRESHOLD,
            risk_difficulty_adjust: RISK_DIFFICULTY_ADJUST,
            challenge_offset: CHALLENGE_OFFSET,
            comfort_offset: COMFORT_OFFSET,
        }
    }
}

/// Recommendation generator tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    pub boredom_threshold: f64,
    pub frustration_threshold: f64,
    pub risk_step: f64,
    pub trend_strength_threshold: f64,
    pub trend_step: f64,
    pub mode_gap_threshold: f64,
    pub focus_gap_threshold: f64,
    pub focus_stability_threshold: f64,
    pub advanced_skill_threshold: f64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            boredom_threshold: BOREDOM_RISK_THRESHOLD,
            frustration_threshold: FRUSTRATION_RISK_THRESHOLD,
            risk_step: RISK_DIFFICULTY_STEP,
            trend_strength_threshold: TREND_STRENGTH_THRESHOLD,
            trend_step: TREND_DIFFICULTY_STEP,
            mode_gap_threshold: MODE_GAP_THRESHOLD,
            focus_gap_threshold: FOCUS_GAP_THRESHOLD,
            focus_stability_threshold: FOCUS_STABILITY_THRESHOLD,
            advanced_skill_threshold: ADVANCED_SKILL_THRESHOLD,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub analysis: AnalysisConfig,
    pub profile: ProfileConfig,
    pub recommendation: RecommendationConfig,
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded engine config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let a = &self.analysis;
        if a.history_capacity == 0 {
            return Err(invalid("history_capacity must be at least 1"));
        }
        if a.window == 0 || a.window > a.history_capacity {
            return Err(invalid(format!(
                "window ({}) must be between 1 and history_capacity ({})",
                a.window, a.history_capacity
            )));
        }
        if a.baselines.accuracy <= 0.0
            || a.baselines.reaction_ms <= 0.0
            || a.baselines.consistency <= 0.0
        {
            return Err(invalid("baselines must be positive"));
        }
        if a.frustration_window == 0 || a.boredom_window == 0 {
            return Err(invalid("risk windows must be at least 1"));
        }

        let p = &self.profile;
        if p.base_adaptation_rate <= 0.0 {
            return Err(invalid("base_adaptation_rate must be positive"));
        }
        if p.max_adaptation_rate < p.base_adaptation_rate || p.max_adaptation_rate > 1.0 {
            return Err(invalid(format!(
                "max_adaptation_rate ({}) must be within [base_adaptation_rate ({}), 1.0]",
                p.max_adaptation_rate, p.base_adaptation_rate
            )));
        }

        let r = &self.recommendation;
        for (name, value) in [
            ("boredom_threshold", r.boredom_threshold),
            ("frustration_threshold", r.frustration_threshold),
            ("focus_stability_threshold", r.focus_stability_threshold),
            ("advanced_skill_threshold", r.advanced_skill_threshold),
        ] {
            if !(RATING_MIN..=RATING_MAX).contains(&value) {
                return Err(invalid(format!("{name} ({value}) must be within [0, 100]")));
            }
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> AdaptError {
    AdaptError::InvalidConfig(message.into())
}
