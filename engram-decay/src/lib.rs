//! # engram-decay
//!
//! One-pass decay over occurrence tables. Non-learned counts lose a fixed
//! rate per pass, floored at zero; an entry whose post-decrement count is
//! exactly zero is pruned. Learned identities are frozen. Repeated passes
//! compound linearly — decay is not wall-clock driven.

use std::collections::{BTreeMap, BTreeSet};

use engram_core::config::defaults;
use engram_core::errors::{ConfigError, EngramResult};
use engram_core::traits::IDecayPolicy;

/// Fixed-rate decay engine.
#[derive(Debug, Clone)]
pub struct DecayEngine {
    rate: f64,
}

impl DecayEngine {
    /// Create a decay engine. The rate must be positive and finite.
    pub fn new(rate: f64) -> EngramResult<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ConfigError::InvalidDecayRate { value: rate }.into());
        }
        Ok(Self { rate })
    }

    /// Amount subtracted from each non-learned count per pass.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Default for DecayEngine {
    fn default() -> Self {
        Self {
            rate: defaults::DEFAULT_DECAY_RATE,
        }
    }
}

impl IDecayPolicy for DecayEngine {
    fn decay(&self, occurrences: &mut BTreeMap<String, f64>, learned: &BTreeSet<String>) -> usize {
        let tracked: Vec<String> = occurrences.keys().cloned().collect();
        let mut pruned = 0;

        for id in tracked {
            if learned.contains(&id) {
                continue;
            }
            // An identity already absent is skipped, not an error.
            let next = match occurrences.get(&id) {
                Some(count) => (count - self.rate).max(0.0),
                None => continue,
            };
            if next == 0.0 {
                occurrences.remove(&id);
                pruned += 1;
            } else {
                occurrences.insert(id, next);
            }
        }

        pruned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries
            .iter()
            .map(|(id, count)| (id.to_string(), *count))
            .collect()
    }

    #[test]
    fn rejects_non_positive_rate() {
        assert!(DecayEngine::new(0.0).is_err());
        assert!(DecayEngine::new(-1.0).is_err());
        assert!(DecayEngine::new(f64::NAN).is_err());
    }

    #[test]
    fn subtracts_rate_from_tracked_counts() {
        let engine = DecayEngine::new(0.1).unwrap();
        let mut counts = table(&[("a", 2.0)]);
        engine.decay(&mut counts, &BTreeSet::new());
        assert!((counts["a"] - 1.9).abs() < 1e-12);
    }

    #[test]
    fn prunes_counts_that_reach_zero() {
        let engine = DecayEngine::new(1.0).unwrap();
        let mut counts = table(&[("y", 1.0)]);
        let pruned = engine.decay(&mut counts, &BTreeSet::new());
        assert_eq!(pruned, 1);
        assert!(!counts.contains_key("y"));
    }

    #[test]
    fn learned_identities_are_frozen() {
        let engine = DecayEngine::new(1.0).unwrap();
        let mut counts = table(&[("known", 3.0)]);
        let learned: BTreeSet<String> = ["known".to_string()].into_iter().collect();
        let pruned = engine.decay(&mut counts, &learned);
        assert_eq!(pruned, 0);
        assert_eq!(counts["known"], 3.0);
    }

    #[test]
    fn empty_table_is_a_noop() {
        let engine = DecayEngine::default();
        let mut counts = BTreeMap::new();
        assert_eq!(engine.decay(&mut counts, &BTreeSet::new()), 0);
        assert!(counts.is_empty());
    }

    #[test]
    fn repeated_passes_compound_linearly() {
        let engine = DecayEngine::new(0.5).unwrap();
        let mut counts = table(&[("a", 2.0)]);
        let learned = BTreeSet::new();
        engine.decay(&mut counts, &learned);
        engine.decay(&mut counts, &learned);
        assert!((counts["a"] - 1.0).abs() < 1e-12);
    }

    proptest! {
        // Decay floor: no negative counts survive a pass, and nothing that
        // hit zero stays in the table.
        #[test]
        fn counts_stay_positive_after_any_pass(
            entries in prop::collection::btree_map("[a-z]{1,4}", 0.0f64..10.0, 0..20),
            rate in 0.01f64..5.0,
        ) {
            let engine = DecayEngine::new(rate).unwrap();
            let mut counts = entries;
            engine.decay(&mut counts, &BTreeSet::new());
            for count in counts.values() {
                prop_assert!(*count > 0.0);
            }
        }
    }
}
