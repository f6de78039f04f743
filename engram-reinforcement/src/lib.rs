//! # engram-reinforcement
//!
//! The tiered reinforcement engine: a bounded short-term tier promotes
//! traces at or above the promotion threshold into the unbounded long-term
//! tier, feeding each promotion back into the adaptive weight table so
//! previously important identities re-promote faster.

pub mod adaptive;
pub mod engine;
pub mod long_term;
pub mod short_term;

pub use adaptive::AdaptiveWeights;
pub use engine::{ReinforcementEngine, TierSnapshot};
pub use long_term::LongTermTier;
pub use short_term::ShortTermTier;
