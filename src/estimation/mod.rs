//! Online entropy estimation for keystroke streams.
//!
//! This module scores how much unpredictability a stream of input
//! symbols has contributed, using an empirical order-1 Markov model.
//! The estimate is a heuristic gate for the collection loop, not a
//! cryptographic proof of entropy.

mod markov;

pub use markov::{FrequencyTable, MarkovEstimator, SENTINEL_SYMBOL};
