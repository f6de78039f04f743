//! # engram-core
//!
//! Core types, traits, errors, and configuration for the engram tiered
//! memory system. Policy crates (reinforcement, decay, learning) build on
//! the definitions here and never on each other's internals.

pub mod config;
pub mod errors;
pub mod memory;
pub mod traits;

pub use config::EngramConfig;
pub use errors::{ConfigError, EngramError, EngramResult};
pub use memory::{Spike, Trace};
