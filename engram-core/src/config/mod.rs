//! Configuration for the engram subsystems.
//!
//! Defaults live in [`defaults`] as the single source of truth. All configs
//! deserialize with `#[serde(default)]` so a partial TOML file only
//! overrides what it names, and all values are validated once at
//! construction time — the engines never re-check them.

pub mod defaults;

mod learning_config;
mod reinforcement_config;

pub use learning_config::LearningConfig;
pub use reinforcement_config::ReinforcementConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration covering every subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngramConfig {
    pub reinforcement: ReinforcementConfig,
    pub learning: LearningConfig,
}

impl EngramConfig {
    /// Validate every subsystem config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.reinforcement.validate()?;
        self.learning.validate()?;
        Ok(())
    }

    /// Parse and validate a TOML configuration document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(EngramConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let config = EngramConfig {
            reinforcement: ReinforcementConfig {
                stm_capacity: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroStmCapacity)
        ));
    }

    #[test]
    fn non_positive_threshold_is_rejected() {
        let config = EngramConfig {
            reinforcement: ReinforcementConfig {
                promotion_threshold: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPromotionThreshold { .. })
        ));
    }

    #[test]
    fn non_positive_decay_rate_is_rejected() {
        let config = EngramConfig {
            learning: LearningConfig {
                decay_rate: -0.1,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDecayRate { .. })
        ));
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = EngramConfig::from_toml_str(
            r#"
            [reinforcement]
            stm_capacity = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.reinforcement.stm_capacity, 2);
        assert_eq!(
            config.reinforcement.promotion_threshold,
            defaults::DEFAULT_PROMOTION_THRESHOLD
        );
        assert_eq!(config.learning.recent_window, defaults::DEFAULT_RECENT_WINDOW);
    }

    #[test]
    fn invalid_toml_value_fails_validation() {
        let result = EngramConfig::from_toml_str(
            r#"
            [learning]
            learning_threshold = 0.5
            "#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::InvalidLearningThreshold { .. })
        ));
    }
}
