use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Reinforcement subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReinforcementConfig {
    /// Maximum number of traces held in the short-term tier.
    pub stm_capacity: usize,
    /// Effective weight at which a flushed trace is promoted to the
    /// long-term tier.
    pub promotion_threshold: f64,
}

impl Default for ReinforcementConfig {
    fn default() -> Self {
        Self {
            stm_capacity: defaults::DEFAULT_STM_CAPACITY,
            promotion_threshold: defaults::DEFAULT_PROMOTION_THRESHOLD,
        }
    }
}

impl ReinforcementConfig {
    /// Reject values the policy has no defined behavior for.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stm_capacity == 0 {
            return Err(ConfigError::ZeroStmCapacity);
        }
        if !self.promotion_threshold.is_finite() || self.promotion_threshold <= 0.0 {
            return Err(ConfigError::InvalidPromotionThreshold {
                value: self.promotion_threshold,
            });
        }
        Ok(())
    }
}
