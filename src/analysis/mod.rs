//! Performance history and trend analysis

pub mod analyzer;
pub mod history;

pub use analyzer::{analyze, PerformanceAnalysis, SkillGaps, Trend, WindowAverages};
pub use history::PerformanceHistory;
