//! # engram-learning
//!
//! The word-learning instantiation of the tiered-reinforcement pattern:
//! occurrence counts per token, an absorbing learned set crossed at a
//! reinforcement threshold, and a bounded recent-token window. Decay is
//! applied through the [`engram_core::traits::IDecayPolicy`] seam so the
//! classifier never depends on a concrete decay engine.

pub mod classifier;

pub use classifier::{LearningClassifier, LearningSnapshot};
