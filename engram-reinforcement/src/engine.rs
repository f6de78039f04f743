//! ReinforcementEngine: single-lock orchestration of insert, flush, and
//! promotion.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use engram_core::config::ReinforcementConfig;
use engram_core::errors::{EngramError, EngramResult};
use engram_core::Trace;
use serde::Serialize;
use tracing::{debug, info};

use crate::adaptive::AdaptiveWeights;
use crate::long_term::LongTermTier;
use crate::short_term::ShortTermTier;

/// Read-only copy of both tiers.
#[derive(Debug, Clone, Serialize)]
pub struct TierSnapshot {
    /// Short-term traces, most recent first.
    pub short_term: Vec<Trace>,
    /// Long-term traces in promotion order.
    pub long_term: Vec<Trace>,
}

/// Everything guarded by the engine's lock. The three structures only ever
/// change together, inside one critical section.
#[derive(Debug)]
struct TierState {
    short_term: ShortTermTier,
    long_term: LongTermTier,
    adaptive: AdaptiveWeights,
}

/// Orchestrates insertion, overflow-triggered promotion, and adaptive
/// reinforcement.
///
/// All tier mutation happens under one exclusive lock held for the whole
/// insert, so a flush triggered by an overflowing insert is atomic to
/// every other caller: nobody observes the transiently empty tier between
/// the flush and the refill.
pub struct ReinforcementEngine {
    config: ReinforcementConfig,
    state: Mutex<TierState>,
}

impl ReinforcementEngine {
    /// Create an engine. The config is validated here, once.
    pub fn new(config: ReinforcementConfig) -> EngramResult<Self> {
        config.validate()?;
        let state = TierState {
            short_term: ShortTermTier::new(config.stm_capacity),
            long_term: LongTermTier::new(),
            adaptive: AdaptiveWeights::new(),
        };
        Ok(Self {
            config,
            state: Mutex::new(state),
        })
    }

    pub fn config(&self) -> &ReinforcementConfig {
        &self.config
    }

    fn lock(&self) -> EngramResult<MutexGuard<'_, TierState>> {
        self.state.lock().map_err(|e| EngramError::LockPoisoned {
            reason: format!("reinforcement state: {e}"),
        })
    }

    /// Insert an identity with a base weight.
    ///
    /// The effective weight is fixed before any flush this call triggers,
    /// so the bonus read here never includes the same call's promotions.
    /// When the tier is full the fresh trace skips the threshold check and
    /// becomes the sole head of the refilled tier.
    pub fn insert(&self, id: impl Into<String>, base_weight: f64) -> EngramResult<()> {
        let id = id.into();
        let mut state = self.lock()?;

        let effective = base_weight + f64::from(state.adaptive.bonus(&id));
        let trace = Trace::new(id, effective);

        if state.short_term.is_full() {
            Self::flush_locked(&mut state, self.config.promotion_threshold);
        }
        debug!(id = %trace.id, weight = trace.weight, "stored short-term trace");
        state.short_term.push_front(trace);
        Ok(())
    }

    /// Promote qualifying short-term traces and clear the tier.
    /// A no-op on an empty tier.
    pub fn flush(&self) -> EngramResult<()> {
        let mut state = self.lock()?;
        Self::flush_locked(&mut state, self.config.promotion_threshold);
        Ok(())
    }

    fn flush_locked(state: &mut TierState, threshold: f64) {
        if state.short_term.is_empty() {
            return;
        }

        let TierState {
            short_term,
            long_term,
            adaptive,
        } = state;

        let mut promoted = 0usize;
        let mut discarded = 0usize;
        for trace in short_term.drain() {
            if trace.weight >= threshold {
                adaptive.reinforce(&trace.id);
                info!(id = %trace.id, weight = trace.weight, "promoted trace to long-term tier");
                long_term.append(trace);
                promoted += 1;
            } else {
                discarded += 1;
            }
        }
        debug!(promoted, discarded, "flushed short-term tier");
    }

    /// Read-only copy of both tiers, taken under the lock.
    pub fn snapshot(&self) -> EngramResult<TierSnapshot> {
        let state = self.lock()?;
        Ok(TierSnapshot {
            short_term: state.short_term.to_vec(),
            long_term: state.long_term.to_vec(),
        })
    }

    /// Identities promoted more than once, over the full current history.
    pub fn frequency_report(&self) -> EngramResult<BTreeMap<String, usize>> {
        Ok(self.lock()?.long_term.frequency_report())
    }

    /// Current adaptive bonus for an identity (0 when never promoted).
    pub fn adaptive_bonus(&self, id: &str) -> EngramResult<u32> {
        Ok(self.lock()?.adaptive.bonus(id))
    }
}
