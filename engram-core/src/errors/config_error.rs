/// Configuration validation errors, surfaced once at construction time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("stm capacity must be at least 1")]
    ZeroStmCapacity,

    #[error("promotion threshold must be positive and finite, got {value}")]
    InvalidPromotionThreshold { value: f64 },

    #[error("learning threshold must be at least 1 and finite, got {value}")]
    InvalidLearningThreshold { value: f64 },

    #[error("recent-token window must be at least 1")]
    ZeroRecentWindow,

    #[error("decay rate must be positive and finite, got {value}")]
    InvalidDecayRate { value: f64 },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
