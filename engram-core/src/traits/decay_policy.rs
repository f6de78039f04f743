use std::collections::{BTreeMap, BTreeSet};

/// A decay pass over an occurrence table.
///
/// Implementations subtract from non-learned counts and prune entries that
/// reach zero. The state owner applies the pass under its own lock; the
/// policy itself is stateless with respect to the table.
pub trait IDecayPolicy: Send + Sync {
    /// Apply one decay pass. Identities in `learned` are exempt — their
    /// counts are frozen. Returns the number of pruned identities.
    fn decay(&self, occurrences: &mut BTreeMap<String, f64>, learned: &BTreeSet<String>) -> usize;
}
