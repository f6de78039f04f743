use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Learning classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    /// Occurrence count at which a token becomes learned (decay-exempt).
    pub learning_threshold: f64,
    /// Number of recently observed tokens kept for inspection.
    pub recent_window: usize,
    /// Amount subtracted from each non-learned count per decay pass.
    pub decay_rate: f64,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            learning_threshold: defaults::DEFAULT_LEARNING_THRESHOLD,
            recent_window: defaults::DEFAULT_RECENT_WINDOW,
            decay_rate: defaults::DEFAULT_DECAY_RATE,
        }
    }
}

impl LearningConfig {
    /// Reject values the policy has no defined behavior for.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.learning_threshold.is_finite() || self.learning_threshold < 1.0 {
            return Err(ConfigError::InvalidLearningThreshold {
                value: self.learning_threshold,
            });
        }
        if self.recent_window == 0 {
            return Err(ConfigError::ZeroRecentWindow);
        }
        if !self.decay_rate.is_finite() || self.decay_rate <= 0.0 {
            return Err(ConfigError::InvalidDecayRate {
                value: self.decay_rate,
            });
        }
        Ok(())
    }
}
