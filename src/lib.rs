//! Aim Adapt - Adaptive skill and difficulty engine for aim training

pub mod analysis;
pub mod core;
pub mod engine;
pub mod profile;
pub mod recommend;
pub mod simulation;
pub mod stats;

pub use analysis::{analyze, PerformanceAnalysis, PerformanceHistory, SkillGaps, Trend};
pub use crate::core::{AdaptError, EngineConfig, GameMode, PerformanceSample, Result};
pub use engine::{AdaptiveEngine, SessionOutcome, TrainingSession};
pub use profile::{create_initial_profile, update_profile, SkillProfile};
pub use recommend::{
    recommend, AdjustmentDirection, DifficultyRecommendation, FocusArea, GameplayMultipliers,
    RecommendationReason,
};
