//! Error taxonomy for the engram crates.
//!
//! The policy engines have no recoverable-error surface of their own —
//! empty-state operations are no-ops and unknown identities read as
//! defaults. What remains is construction-time validation and lock
//! poisoning.

mod config_error;

pub use config_error::ConfigError;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum EngramError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("lock poisoned: {reason}")]
    LockPoisoned { reason: String },
}

/// Result alias used across the workspace.
pub type EngramResult<T> = Result<T, EngramError>;
