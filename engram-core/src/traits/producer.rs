use crate::memory::Spike;

/// A producer of spike events feeding the reinforcement engine.
///
/// Producers are external collaborators; the engine makes no assumption
/// about arrival distribution or timing.
pub trait ISpikeProducer {
    /// Produce the next spike, or `None` once the source is exhausted.
    fn next_spike(&mut self) -> Option<Spike>;
}
