//! Difficulty recommendations and the gameplay multipliers they imply

pub mod generator;
pub mod multipliers;

pub use generator::{
    recommend, AdjustmentDirection, DifficultyRecommendation, FocusArea, RecommendationReason,
};
pub use multipliers::GameplayMultipliers;
