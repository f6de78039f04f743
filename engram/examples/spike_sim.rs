//! Synthetic spike driver: feeds deterministic bursts into an engram
//! instance, teaches it a short text, and dumps the resulting state.
//!
//! Run with `RUST_LOG=debug cargo run --example spike_sim` to see the
//! promotion and learning events.

use engram::traits::ISpikeProducer;
use engram::{Engram, EngramResult, Spike};

/// Deterministic burst producer standing in for a live signal source.
struct BurstProducer {
    remaining: usize,
    seed: u64,
}

impl BurstProducer {
    fn new(spikes: usize) -> Self {
        Self {
            remaining: spikes,
            seed: 0x5eed,
        }
    }
}

impl ISpikeProducer for BurstProducer {
    fn next_spike(&mut self) -> Option<Spike> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        // xorshift keeps the demo deterministic without a rand dependency.
        self.seed ^= self.seed << 13;
        self.seed ^= self.seed >> 7;
        self.seed ^= self.seed << 17;
        let intensity = (self.seed % 5 + 1) as f64;
        Some(Spike::new(format!("spike-{intensity}"), intensity))
    }
}

fn main() -> EngramResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let engram = Engram::with_defaults()?;

    let mut producer = BurstProducer::new(40);
    let ingested = engram.ingest(&mut producer)?;
    engram.flush()?;

    engram.observe_text("the cat sat on the mat and the cat ran off the mat")?;
    engram.decay()?;

    println!("ingested {ingested} spikes");

    let snapshot = engram.snapshot()?;
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).expect("snapshot serializes")
    );

    println!("recurring promotions:");
    for (id, count) in engram.frequency_report()? {
        println!("  {id}: {count}");
    }

    match engram.recall()? {
        Some(learned) => println!("learned: {learned:?}"),
        None => println!("nothing learned yet"),
    }

    Ok(())
}
