// Single source of truth for all default values.

// --- Reinforcement ---
pub const DEFAULT_STM_CAPACITY: usize = 5;
pub const DEFAULT_PROMOTION_THRESHOLD: f64 = 5.0;

// --- Learning ---
pub const DEFAULT_LEARNING_THRESHOLD: f64 = 3.0;
pub const DEFAULT_RECENT_WINDOW: usize = 5;

// --- Decay ---
pub const DEFAULT_DECAY_RATE: f64 = 0.1;
