//! # engram
//!
//! Facade over the engram subsystems: one reinforcement engine, one
//! learning classifier, and one decay engine, wired from a single
//! validated config. Callers construct an instance explicitly and pass it
//! by reference — there is no global state.
//!
//! The two subsystems never share mutable state and sit behind
//! independent locks, so spike producers and token observers do not
//! contend with each other.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

pub use engram_core::{config, errors, memory, traits};
pub use engram_core::{EngramConfig, EngramError, EngramResult, Spike, Trace};
pub use engram_decay::DecayEngine;
pub use engram_learning::{LearningClassifier, LearningSnapshot};
pub use engram_reinforcement::{ReinforcementEngine, TierSnapshot};

use engram_core::traits::ISpikeProducer;

/// Combined read-only view over both subsystems.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Short-term traces, most recent first.
    pub short_term: Vec<Trace>,
    /// Long-term traces in promotion order.
    pub long_term: Vec<Trace>,
    /// Learned tokens.
    pub learned: BTreeSet<String>,
    /// Recently observed tokens, oldest first.
    pub recent_tokens: Vec<String>,
}

/// An explicitly constructed memory engine instance.
pub struct Engram {
    reinforcement: ReinforcementEngine,
    classifier: LearningClassifier,
    decay: DecayEngine,
}

impl Engram {
    /// Construct an instance; all config validation happens here.
    pub fn new(config: EngramConfig) -> EngramResult<Self> {
        let decay = DecayEngine::new(config.learning.decay_rate)?;
        Ok(Self {
            reinforcement: ReinforcementEngine::new(config.reinforcement)?,
            classifier: LearningClassifier::new(config.learning)?,
            decay,
        })
    }

    /// Construct with default configuration.
    pub fn with_defaults() -> EngramResult<Self> {
        Self::new(EngramConfig::default())
    }

    /// Insert an identity with a base weight into the short-term tier.
    pub fn insert(&self, id: impl Into<String>, base_weight: f64) -> EngramResult<()> {
        self.reinforcement.insert(id, base_weight)
    }

    /// Drain a producer into the short-term tier. Returns the number of
    /// spikes ingested.
    pub fn ingest(&self, producer: &mut dyn ISpikeProducer) -> EngramResult<usize> {
        let mut ingested = 0;
        while let Some(spike) = producer.next_spike() {
            self.reinforcement.insert(spike.id, spike.weight)?;
            ingested += 1;
        }
        Ok(ingested)
    }

    /// Promote qualifying short-term traces and clear the tier.
    pub fn flush(&self) -> EngramResult<()> {
        self.reinforcement.flush()
    }

    /// Observe one token. Returns `true` when this observation made the
    /// token learned.
    pub fn observe(&self, token: impl Into<String>) -> EngramResult<bool> {
        self.classifier.observe(token)
    }

    /// Observe every whitespace-separated token of a text. Returns the
    /// tokens this call newly learned.
    pub fn observe_text(&self, text: &str) -> EngramResult<Vec<String>> {
        self.classifier.observe_text(text)
    }

    /// Apply one decay pass at the configured rate. Returns the number of
    /// pruned tokens.
    pub fn decay(&self) -> EngramResult<usize> {
        self.classifier.decay(&self.decay)
    }

    /// The learned set, or `None` when nothing has been learned yet.
    pub fn recall(&self) -> EngramResult<Option<BTreeSet<String>>> {
        self.classifier.recall()
    }

    /// Identities promoted more than once, over the full current history.
    pub fn frequency_report(&self) -> EngramResult<BTreeMap<String, usize>> {
        self.reinforcement.frequency_report()
    }

    /// Combined snapshot. Each subsystem's lock is taken in turn, never
    /// nested.
    pub fn snapshot(&self) -> EngramResult<Snapshot> {
        let tiers = self.reinforcement.snapshot()?;
        let learning = self.classifier.snapshot()?;
        Ok(Snapshot {
            short_term: tiers.short_term,
            long_term: tiers.long_term,
            learned: learning.learned,
            recent_tokens: learning.recent_tokens,
        })
    }

    /// The underlying reinforcement engine.
    pub fn reinforcement(&self) -> &ReinforcementEngine {
        &self.reinforcement
    }

    /// The underlying learning classifier.
    pub fn classifier(&self) -> &LearningClassifier {
        &self.classifier
    }

    /// The underlying decay engine.
    pub fn decay_engine(&self) -> &DecayEngine {
        &self.decay
    }
}
