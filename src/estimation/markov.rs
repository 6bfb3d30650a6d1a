//! Order-1 Markov frequency model.
//!
//! Each observed symbol is scored against the empirical distribution
//! of symbols that followed the same predecessor so far. A symbol that
//! keeps appearing in the same context contributes almost nothing; a
//! symbol that is new in its context contributes close to
//! `log2(count(prev))` bits.

use std::collections::HashMap;

/// Previous-symbol sentinel used before the first real observation.
pub const SENTINEL_SYMBOL: u8 = 0x00;

/// Occurrence counts for single symbols and adjacent symbol pairs.
///
/// Counts only ever increase and are never reset for the lifetime of
/// a session. The pair count for `(prev, cur)` can never exceed the
/// single count for `prev`, since both are incremented together.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    singles: HashMap<u8, u64>,
    pairs: HashMap<[u8; 2], u64>,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the occurrence count for a single symbol.
    pub fn single(&self, sym: u8) -> u64 {
        self.singles.get(&sym).copied().unwrap_or(0)
    }

    /// Returns the occurrence count for an adjacent symbol pair.
    pub fn pair(&self, prev: u8, cur: u8) -> u64 {
        self.pairs.get(&[prev, cur]).copied().unwrap_or(0)
    }

    /// Records one observation, incrementing the prefix and pair
    /// counts together.
    ///
    /// Returns the post-increment `(single, pair)` counts. The two
    /// increments must never be reordered or split across
    /// observations; the ratio of the returned counts is what keeps
    /// each per-symbol contribution non-negative.
    fn record(&mut self, prev: u8, cur: u8) -> (u64, u64) {
        let single = self.singles.entry(prev).or_insert(0);
        *single += 1;
        let single = *single;

        let pair = self.pairs.entry([prev, cur]).or_insert(0);
        *pair += 1;

        (single, *pair)
    }

    /// Number of distinct single symbols seen so far.
    pub fn distinct_symbols(&self) -> usize {
        self.singles.len()
    }

    /// Number of distinct adjacent pairs seen so far.
    pub fn distinct_pairs(&self) -> usize {
        self.pairs.len()
    }
}

/// Running estimate of information contributed by an input stream.
///
/// For each observation `(prev, cur)` the estimator adds
/// `log2(count(prev) / count(prev, cur))`, computed from the
/// post-increment counts. Floating-point noise can make an individual
/// term fractionally negative when the ratio is exactly 1; such terms
/// are clamped to zero so the cumulative total never decreases.
#[derive(Debug, Default)]
pub struct MarkovEstimator {
    table: FrequencyTable,
    total_bits: f64,
    observations: u64,
}

impl MarkovEstimator {
    /// Creates a fresh estimator with empty frequency counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores one observation and returns the cumulative bit estimate.
    pub fn observe(&mut self, prev: u8, cur: u8) -> f64 {
        let (single, pair) = self.table.record(prev, cur);

        let increment = ((single as f64) / (pair as f64)).log2().max(0.0);
        self.total_bits += increment;
        self.observations += 1;

        tracing::trace!(
            prev,
            cur,
            increment,
            total_bits = self.total_bits,
            "Scored observation"
        );

        self.total_bits
    }

    /// Returns the cumulative bit estimate.
    pub fn total_bits(&self) -> f64 {
        self.total_bits
    }

    /// Returns the number of observations scored.
    pub fn observations(&self) -> u64 {
        self.observations
    }

    /// Returns the underlying frequency counts.
    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(estimator: &mut MarkovEstimator, symbols: &[u8]) -> f64 {
        let mut prev = SENTINEL_SYMBOL;
        let mut bits = 0.0;
        for &cur in symbols {
            bits = estimator.observe(prev, cur);
            prev = cur;
        }
        bits
    }

    #[test]
    fn test_first_observation_contributes_nothing() {
        let mut estimator = MarkovEstimator::new();
        let bits = estimator.observe(SENTINEL_SYMBOL, b'a');

        // count(prev) == count(pair) == 1, so log2(1) == 0
        assert_eq!(bits, 0.0);
    }

    #[test]
    fn test_new_symbol_in_known_context_contributes() {
        let mut estimator = MarkovEstimator::new();

        // 'a' followed by 'x', then 'a' followed by 'y':
        // second observation sees count(a) == 2, count(a,y) == 1.
        estimator.observe(b'a', b'x');
        let bits = estimator.observe(b'a', b'y');

        assert!((bits - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_sequence_total() {
        let mut estimator = MarkovEstimator::new();
        let bits = feed(&mut estimator, b"abacab");

        // Worked by hand: only the (a,c) and final (a,b) observations
        // contribute, summing to log2(3).
        assert!((bits - 3f64.log2()).abs() < 1e-12);
        assert_eq!(estimator.observations(), 6);
    }

    #[test]
    fn test_repeated_symbol_contributes_nothing() {
        let mut estimator = MarkovEstimator::new();
        let bits = feed(&mut estimator, &[b'a'; 100]);

        // A held-down key always repeats its context: every pair count
        // tracks its prefix count exactly.
        assert_eq!(bits, 0.0);
    }

    #[test]
    fn test_trajectories_are_repeatable() {
        let symbols = b"the quick brown fox jumps over the lazy dog";

        let mut first = MarkovEstimator::new();
        let mut second = MarkovEstimator::new();

        let mut prev = SENTINEL_SYMBOL;
        for &cur in symbols.iter() {
            assert_eq!(first.observe(prev, cur), second.observe(prev, cur));
            prev = cur;
        }
    }

    #[test]
    fn test_cumulative_estimate_never_decreases() {
        let mut estimator = MarkovEstimator::new();
        let mut prev = SENTINEL_SYMBOL;
        let mut last = 0.0;

        for &cur in b"aaabbbababab abab keyboard mash ee".iter() {
            let bits = estimator.observe(prev, cur);
            assert!(bits >= last);
            last = bits;
            prev = cur;
        }
    }

    #[test]
    fn test_pair_count_never_exceeds_prefix_count() {
        let mut estimator = MarkovEstimator::new();
        let mut prev = SENTINEL_SYMBOL;

        for &cur in b"mississippi riverbank mississippi".iter() {
            estimator.observe(prev, cur);
            let table = estimator.table();
            assert!(table.pair(prev, cur) <= table.single(prev));
            prev = cur;
        }
    }
}
