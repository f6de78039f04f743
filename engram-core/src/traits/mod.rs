mod decay_policy;
mod producer;

pub use decay_policy::IDecayPolicy;
pub use producer::ISpikeProducer;
