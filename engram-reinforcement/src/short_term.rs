//! Bounded, most-recent-first short-term tier.

use std::collections::VecDeque;

use engram_core::Trace;

/// Bounded buffer of recent traces, newest at the head.
///
/// Holds `len ≤ capacity` after every completed operation. Overflow
/// handling lives in the engine, which flushes before refilling — the tier
/// itself never drops a trace silently.
#[derive(Debug)]
pub struct ShortTermTier {
    traces: VecDeque<Trace>,
    capacity: usize,
}

impl ShortTermTier {
    pub fn new(capacity: usize) -> Self {
        Self {
            traces: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.traces.len() >= self.capacity
    }

    /// Store a trace at the head. The caller flushes first when full.
    pub fn push_front(&mut self, trace: Trace) {
        self.traces.push_front(trace);
    }

    /// Drain head → tail (most recent first), leaving the tier empty.
    pub fn drain(&mut self) -> impl Iterator<Item = Trace> + '_ {
        self.traces.drain(..)
    }

    /// Copy of the current contents, head first.
    pub fn to_vec(&self) -> Vec<Trace> {
        self.traces.iter().cloned().collect()
    }
}
