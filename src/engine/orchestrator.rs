//! Per-session pipeline: record, analyze, update, recommend

use crate::analysis::{analyze, PerformanceAnalysis, PerformanceHistory};
use crate::core::config::EngineConfig;
use crate::core::types::PerformanceSample;
use crate::profile::{update_profile, SkillProfile};
use crate::recommend::{recommend, AdjustmentDirection, DifficultyRecommendation};
use serde::{Deserialize, Serialize};

/// Everything one completed session produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionOutcome {
    pub profile: SkillProfile,
    pub recommendation: DifficultyRecommendation,
    pub analysis: PerformanceAnalysis,
}

/// Adaptive difficulty engine for a single player
///
/// Owns that player's performance history. Concurrent players each need
/// their own engine.
#[derive(Debug, Clone)]
pub struct AdaptiveEngine {
    config: EngineConfig,
    history: PerformanceHistory,
}

impl AdaptiveEngine {
    pub fn new(config: EngineConfig) -> Self {
        let history = PerformanceHistory::with_capacity(config.analysis.history_capacity);
        Self { config, history }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn history(&self) -> &PerformanceHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Run the full pipeline for one completed session
    ///
    /// Appends the sample to history, analyzes the history, folds the sample
    /// into the profile, then recommends a difficulty from the updated
    /// profile.
    pub fn analyze_and_recommend(
        &mut self,
        sample: PerformanceSample,
        profile: &SkillProfile,
        current_difficulty: f64,
    ) -> SessionOutcome {
        self.history.push(sample.clone());
        let analysis = analyze(self.history.as_slice(), &self.config.analysis);

        let profile = update_profile(profile, &sample, &analysis, &self.config.profile);
        let recommendation = recommend(
            &profile,
            &analysis,
            current_difficulty,
            &self.config.recommendation,
        );

        if recommendation.direction != AdjustmentDirection::Maintain {
            tracing::info!(
                from = current_difficulty,
                to = recommendation.target_difficulty,
                reason = recommendation.reason.label(),
                "Adjusting difficulty"
            );
        }

        SessionOutcome {
            profile,
            recommendation,
            analysis,
        }
    }
}

impl Default for AdaptiveEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
