//! Orchestration of the per-session pipeline

pub mod orchestrator;
pub mod session;

pub use orchestrator::{AdaptiveEngine, SessionOutcome};
pub use session::TrainingSession;
