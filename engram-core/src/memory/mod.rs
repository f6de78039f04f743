//! Memory trace types shared across the engram crates.

use serde::{Deserialize, Serialize};

/// A raw producer event: an identity plus the base weight it arrived with.
///
/// The identity doubles as the dedup/lookup key everywhere downstream —
/// in the adaptive weight table, the long-term frequency report, and the
/// learning classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spike {
    /// Identity of the observed item.
    pub id: String,
    /// Caller-assigned importance, before any adaptive adjustment.
    pub weight: f64,
}

impl Spike {
    pub fn new(id: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }
}

/// A stored memory trace.
///
/// The weight is the *effective* weight fixed at insertion time: the base
/// weight plus whatever adaptive bonus the identity had accumulated. It is
/// never recomputed after storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub id: String,
    pub weight: f64,
}

impl Trace {
    pub fn new(id: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }
}
