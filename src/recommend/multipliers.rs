//! Gameplay multipliers derived from a target difficulty

use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// Scaling factors the target spawner applies to its own baseline values
///
/// Each field moves linearly with difficulty / 100; the size and lifetime
/// factors are floored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameplayMultipliers {
    /// Smaller targets are harder
    pub target_size: f64,
    /// Faster spawning is harder
    pub spawn_rate: f64,
    /// Shorter-lived targets are harder
    pub target_lifetime: f64,
    pub movement_speed: f64,
}

impl GameplayMultipliers {
    pub fn for_difficulty(difficulty: f64) -> Self {
        let ratio = difficulty / 100.0;
        Self {
            target_size: (TARGET_SIZE_MAX - ratio * TARGET_SIZE_RANGE).max(TARGET_SIZE_MIN),
            spawn_rate: SPAWN_RATE_BASE + ratio * SPAWN_RATE_RANGE,
            target_lifetime: (TARGET_LIFETIME_MAX - ratio * TARGET_LIFETIME_RANGE)
                .max(TARGET_LIFETIME_MIN),
            movement_speed: MOVEMENT_SPEED_BASE + ratio * MOVEMENT_SPEED_RANGE,
        }
    }
}
