//! Occurrence-count learning classifier.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::sync::{Mutex, MutexGuard};

use engram_core::config::LearningConfig;
use engram_core::errors::{EngramError, EngramResult};
use engram_core::traits::IDecayPolicy;
use serde::Serialize;
use tracing::{debug, info};

/// Read-only copy of the classifier state.
#[derive(Debug, Clone, Serialize)]
pub struct LearningSnapshot {
    /// Occurrence counts, learned tokens included (their counts are frozen).
    pub occurrences: BTreeMap<String, f64>,
    pub learned: BTreeSet<String>,
    /// Recently observed tokens, oldest first.
    pub recent_tokens: Vec<String>,
}

#[derive(Debug)]
struct LearnState {
    occurrences: BTreeMap<String, f64>,
    learned: BTreeSet<String>,
    recent: VecDeque<String>,
}

/// Tracks occurrence counts per token and marks a token learned once its
/// count crosses the learning threshold.
///
/// Per-token state machine: unseen → counting → learned. Learned is
/// absorbing — no subsequent decay or observation removes a token from the
/// set. The classifier owns its state behind its own lock, independent of
/// the reinforcement engine's; observe and decay serialize with each other.
pub struct LearningClassifier {
    config: LearningConfig,
    state: Mutex<LearnState>,
}

impl LearningClassifier {
    /// Create a classifier. The config is validated here, once.
    pub fn new(config: LearningConfig) -> EngramResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: Mutex::new(LearnState {
                occurrences: BTreeMap::new(),
                learned: BTreeSet::new(),
                recent: VecDeque::new(),
            }),
        })
    }

    pub fn config(&self) -> &LearningConfig {
        &self.config
    }

    fn lock(&self) -> EngramResult<MutexGuard<'_, LearnState>> {
        self.state.lock().map_err(|e| EngramError::LockPoisoned {
            reason: format!("learning state: {e}"),
        })
    }

    /// Observe one token. Returns `true` when this observation crossed the
    /// learning threshold.
    pub fn observe(&self, token: impl Into<String>) -> EngramResult<bool> {
        let token = token.into();
        let mut state = self.lock()?;

        let count = {
            let count = state.occurrences.entry(token.clone()).or_insert(0.0);
            *count += 1.0;
            *count
        };

        state.recent.push_back(token.clone());
        while state.recent.len() > self.config.recent_window {
            state.recent.pop_front();
        }

        if count >= self.config.learning_threshold && !state.learned.contains(&token) {
            info!(token = %token, count, "token learned");
            state.learned.insert(token);
            return Ok(true);
        }
        Ok(false)
    }

    /// Observe every whitespace-separated token of a text. Returns the
    /// tokens this call newly learned, in observation order.
    pub fn observe_text(&self, text: &str) -> EngramResult<Vec<String>> {
        let mut newly_learned = Vec::new();
        for token in text.split_whitespace() {
            if self.observe(token)? {
                newly_learned.push(token.to_string());
            }
        }
        Ok(newly_learned)
    }

    /// Apply one decay pass under the classifier's lock. Returns the number
    /// of pruned tokens.
    pub fn decay(&self, policy: &dyn IDecayPolicy) -> EngramResult<usize> {
        let mut state = self.lock()?;
        let state = &mut *state;
        let pruned = policy.decay(&mut state.occurrences, &state.learned);
        if pruned > 0 {
            debug!(pruned, "pruned decayed tokens");
        }
        Ok(pruned)
    }

    /// The learned set, or `None` when nothing has been learned yet.
    pub fn recall(&self) -> EngramResult<Option<BTreeSet<String>>> {
        let state = self.lock()?;
        if state.learned.is_empty() {
            Ok(None)
        } else {
            Ok(Some(state.learned.clone()))
        }
    }

    /// Read-only copy of the classifier state, taken under the lock.
    pub fn snapshot(&self) -> EngramResult<LearningSnapshot> {
        let state = self.lock()?;
        Ok(LearningSnapshot {
            occurrences: state.occurrences.clone(),
            learned: state.learned.clone(),
            recent_tokens: state.recent.iter().cloned().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engram_decay::DecayEngine;

    fn make_classifier() -> LearningClassifier {
        LearningClassifier::new(LearningConfig::default()).unwrap()
    }

    #[test]
    fn token_is_learned_on_third_observation_not_before() {
        let classifier = make_classifier();
        assert!(!classifier.observe("x").unwrap());
        assert!(!classifier.observe("x").unwrap());
        assert!(classifier.recall().unwrap().is_none());
        assert!(classifier.observe("x").unwrap());
        let learned = classifier.recall().unwrap().unwrap();
        assert!(learned.contains("x"));
    }

    #[test]
    fn learning_is_reported_once() {
        let classifier = make_classifier();
        for _ in 0..3 {
            classifier.observe("x").unwrap();
        }
        // Fourth observation: already learned, not reported again.
        assert!(!classifier.observe("x").unwrap());
    }

    #[test]
    fn single_observation_decays_away_at_full_rate() {
        let classifier = make_classifier();
        classifier.observe("y").unwrap();
        let policy = DecayEngine::new(1.0).unwrap();
        let pruned = classifier.decay(&policy).unwrap();
        assert_eq!(pruned, 1);
        assert!(!classifier.snapshot().unwrap().occurrences.contains_key("y"));
    }

    #[test]
    fn learned_tokens_survive_decay() {
        let classifier = make_classifier();
        for _ in 0..3 {
            classifier.observe("keep").unwrap();
        }
        let policy = DecayEngine::new(10.0).unwrap();
        classifier.decay(&policy).unwrap();
        classifier.decay(&policy).unwrap();

        let snap = classifier.snapshot().unwrap();
        assert!(snap.learned.contains("keep"));
        assert_eq!(snap.occurrences.get("keep"), Some(&3.0));
    }

    #[test]
    fn decay_on_empty_state_is_a_noop() {
        let classifier = make_classifier();
        let policy = DecayEngine::default();
        assert_eq!(classifier.decay(&policy).unwrap(), 0);
    }

    #[test]
    fn recall_is_none_until_something_is_learned() {
        let classifier = make_classifier();
        assert!(classifier.recall().unwrap().is_none());
    }

    #[test]
    fn recent_window_keeps_only_the_newest_tokens() {
        let classifier = make_classifier();
        for token in ["a", "b", "c", "d", "e", "f"] {
            classifier.observe(token).unwrap();
        }
        let snap = classifier.snapshot().unwrap();
        assert_eq!(snap.recent_tokens, vec!["b", "c", "d", "e", "f"]);
    }

    #[test]
    fn observe_text_splits_on_whitespace_and_reports_new_learnings() {
        let classifier = make_classifier();
        let newly = classifier.observe_text("a a a b b").unwrap();
        assert_eq!(newly, vec!["a".to_string()]);
        let snap = classifier.snapshot().unwrap();
        assert_eq!(snap.occurrences.get("b"), Some(&2.0));
    }

    #[test]
    fn rejects_invalid_config() {
        assert!(LearningClassifier::new(LearningConfig {
            recent_window: 0,
            ..Default::default()
        })
        .is_err());
    }
}
