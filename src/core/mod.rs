pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::{AnalysisConfig, Baselines, EngineConfig, ProfileConfig, RecommendationConfig};
pub use error::{AdaptError, Result};
pub use types::{GameMode, PerformanceSample};
