//! Tuning constants for the adaptive engine
//!
//! These are the defaults behind `EngineConfig`. With an unmodified config
//! the engine reproduces exactly these numbers.

// === RATINGS ===

/// Lower bound of every rating and risk score
pub const RATING_MIN: f64 = 0.0;
/// Upper bound of every rating and risk score
pub const RATING_MAX: f64 = 100.0;

// === HISTORY ===

/// Maximum samples kept in a performance history
pub const HISTORY_CAPACITY: usize = 50;
/// Samples in the recent (and the older) comparison window
pub const ANALYSIS_WINDOW: usize = 10;
/// Below this many samples the analyzer returns the default analysis
pub const MIN_SAMPLES_FOR_ANALYSIS: usize = 3;

// === TREND ===

/// Overall trend above which performance counts as improving
/// (and below the negation of which it counts as declining)
pub const TREND_THRESHOLD: f64 = 2.0;
/// Multiplier from overall trend to trend strength
pub const TREND_STRENGTH_SCALE: f64 = 10.0;
/// Absolute overall trend above which adaptation is flagged
pub const ADAPTATION_TREND_THRESHOLD: f64 = 5.0;
/// Stability loses this many points per point of accuracy std dev
pub const STABILITY_STDDEV_PENALTY: f64 = 2.0;

// === BASELINES ===

pub const BASELINE_ACCURACY: f64 = 70.0;
pub const BASELINE_REACTION_MS: f64 = 400.0;
pub const BASELINE_CONSISTENCY: f64 = 60.0;

// === RISK ===

/// Frustration is judged over this many latest samples
pub const FRUSTRATION_WINDOW: usize = 3;
pub const FRUSTRATION_DECLINE_WEIGHT: f64 = 25.0;
pub const FRUSTRATION_LOW_ACCURACY: f64 = 60.0;
pub const FRUSTRATION_LOW_ACCURACY_WEIGHT: f64 = 20.0;

/// Boredom is judged over this many latest samples
pub const BOREDOM_WINDOW: usize = 5;
pub const BOREDOM_HIGH_ACCURACY: f64 = 85.0;
pub const BOREDOM_HIGH_ACCURACY_WEIGHT: f64 = 15.0;
/// Accuracy std dev below which results count as monotonous
pub const BOREDOM_FLAT_STDDEV: f64 = 5.0;
pub const BOREDOM_FLAT_BONUS: f64 = 25.0;

// === PROFILE ===

pub const BASE_ADAPTATION_RATE: f64 = 0.15;
pub const MAX_ADAPTATION_RATE: f64 = 0.3;
/// Per-session growth factor applied to the base adaptation rate
pub const ADAPTATION_SESSION_FACTOR: f64 = 0.01;
pub const CONFIDENCE_STEP: f64 = 2.0;
/// Fraction of overall skill used as optimal difficulty
pub const OPTIMAL_DIFFICULTY_SCALE: f64 = 0.8;
/// Risk score above which optimal difficulty is nudged
pub const RISK_ADJUST_THRESHOLD: f64 = 50.0;
pub const RISK_DIFFICULTY_ADJUST: f64 = 10.0;
pub const CHALLENGE_OFFSET: f64 = 20.0;
pub const COMFORT_OFFSET: f64 = 10.0;

/// Reaction time mapped to a speed rating of 100
pub const REACTION_BEST_MS: f64 = 100.0;
/// Milliseconds of reaction time per rating point
pub const REACTION_MS_PER_POINT: f64 = 10.0;

pub const INITIAL_RATING: f64 = 30.0;
pub const INITIAL_CONFIDENCE: f64 = 20.0;
pub const INITIAL_OPTIMAL_DIFFICULTY: f64 = 25.0;

// === RECOMMENDATION ===

pub const BOREDOM_RISK_THRESHOLD: f64 = 70.0;
pub const FRUSTRATION_RISK_THRESHOLD: f64 = 70.0;
/// Difficulty step used by the boredom and frustration rules
pub const RISK_DIFFICULTY_STEP: f64 = 15.0;
/// Trend strength above which the trend rules fire
pub const TREND_STRENGTH_THRESHOLD: f64 = 15.0;
/// Difficulty step used by the trend rules
pub const TREND_DIFFICULTY_STEP: f64 = 10.0;
/// Skill gap (percent) below which a training mode is recommended
pub const MODE_GAP_THRESHOLD: f64 = -20.0;
/// Skill gap (percent) below which a focus area is reported
pub const FOCUS_GAP_THRESHOLD: f64 = -15.0;
pub const FOCUS_STABILITY_THRESHOLD: f64 = 60.0;
/// Overall skill above which advanced modes are recommended
pub const ADVANCED_SKILL_THRESHOLD: f64 = 70.0;

// === MULTIPLIERS ===

pub const TARGET_SIZE_MAX: f64 = 1.2;
pub const TARGET_SIZE_RANGE: f64 = 0.8;
pub const TARGET_SIZE_MIN: f64 = 0.4;
pub const SPAWN_RATE_BASE: f64 = 0.8;
pub const SPAWN_RATE_RANGE: f64 = 0.4;
pub const TARGET_LIFETIME_MAX: f64 = 1.0;
pub const TARGET_LIFETIME_RANGE: f64 = 0.7;
pub const TARGET_LIFETIME_MIN: f64 = 0.3;
pub const MOVEMENT_SPEED_BASE: f64 = 0.5;
pub const MOVEMENT_SPEED_RANGE: f64 = 1.0;
