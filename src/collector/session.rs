//! The collection session loop.

use super::clock::Clock;
use crate::conditioning::{ByteHasher, DigestAlgorithm, EntropyBytes};
use crate::config::ConfigError;
use crate::estimation::{MarkovEstimator, SENTINEL_SYMBOL};
use crate::keys::{KeySource, KeySourceError};
use rand_core::{OsRng, RngCore};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Domain separator absorbed before any other input.
/// Ensures the hash context is distinct from other uses.
const SESSION_DOMAIN: &[u8] = b"keystroke-entropy-session-v1";

/// OS seed material absorbed at session start.
const OS_SEED_LEN: usize = 64;

/// Errors that can occur during collection.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("keystroke source failed: {0}")]
    Source(#[from] KeySourceError),
}

/// Configuration for one collection session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Output entropy length in bits (multiple of 32, in [160, 256]).
    pub entropy_bits: usize,
    /// Estimated keystroke bits to accumulate before stopping.
    pub target_bits: f64,
    /// Discard keystrokes whose 3-symbol window was already seen.
    ///
    /// Off by default; when enabled, a user idly cycling the same few
    /// keys stops registering as contributed entropy while the
    /// keystrokes are still consumed from the terminal.
    pub dedup: bool,
    /// Digest algorithm for session conditioning.
    pub algorithm: DigestAlgorithm,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            entropy_bits: 160,
            target_bits: 256.0,
            dedup: false,
            algorithm: DigestAlgorithm::default(),
        }
    }
}

impl CollectorConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entropy_bits % 32 != 0 || !(160..=256).contains(&self.entropy_bits) {
            return Err(ConfigError::EntropyBits(self.entropy_bits));
        }
        if !self.target_bits.is_finite() || self.target_bits <= 0.0 {
            return Err(ConfigError::TargetBits(self.target_bits));
        }
        Ok(())
    }

    /// Output length in bytes.
    pub fn entropy_len(&self) -> usize {
        self.entropy_bits / 8
    }
}

/// Rejects 3-symbol windows already seen this session.
#[derive(Debug, Default)]
struct DedupFilter {
    seen: HashSet<[u8; 3]>,
}

impl DedupFilter {
    /// Returns true if the window is new and was recorded.
    fn accept(&mut self, window: [u8; 3]) -> bool {
        self.seen.insert(window)
    }
}

/// Drives one interactive entropy collection session.
///
/// The estimator, the dedup window set and the hasher state are all
/// owned by the session and discarded when it ends; restarting always
/// re-collects from scratch. The hasher is seeded from the OS random
/// source, so the output supplements rather than replaces system
/// randomness.
pub struct Collector {
    config: CollectorConfig,
}

impl Collector {
    /// Creates a collector after validating the configuration.
    pub fn new(config: CollectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Runs the collection loop to completion.
    ///
    /// Blocks on `source` for each keystroke; `progress` is invoked
    /// with `(bits, target)` before every read and once after the
    /// target is reached, purely for display. Any source error aborts
    /// the session with no output. The hasher is finalized exactly
    /// once, on the success path.
    pub fn collect<S, C, F>(
        self,
        source: &mut S,
        clock: &mut C,
        mut progress: F,
    ) -> Result<EntropyBytes, CollectError>
    where
        S: KeySource + ?Sized,
        C: Clock + ?Sized,
        F: FnMut(f64, f64),
    {
        let target = self.config.target_bits;
        let out_len = self.config.entropy_len();

        let mut hasher = ByteHasher::new(self.config.algorithm);
        hasher.absorb(SESSION_DOMAIN);

        let mut seed = [0u8; OS_SEED_LEN];
        OsRng.fill_bytes(&mut seed);
        hasher.absorb(&seed);

        let mut estimator = MarkovEstimator::new();
        let mut dedup = self.config.dedup.then(DedupFilter::default);
        // (prev_prev, prev), seeded with the sentinel symbol.
        let mut window = [SENTINEL_SYMBOL; 2];
        let mut bits = 0.0;
        let mut discarded: u64 = 0;

        while bits < target {
            progress(bits, target);
            let cur = source.next_key()?;

            if let Some(filter) = dedup.as_mut() {
                if !filter.accept([window[0], window[1], cur]) {
                    // Symbol is consumed but contributes nothing: no
                    // estimator update, no digest input, no window slide.
                    discarded += 1;
                    tracing::trace!(cur, "Discarded repeated window");
                    continue;
                }
            }

            bits = estimator.observe(window[1], cur);
            hasher.absorb(&clock.now_nanos().to_le_bytes());
            hasher.absorb(&[cur]);
            window = [window[1], cur];
        }
        progress(bits, target);

        tracing::debug!(
            bits,
            target,
            keystrokes = estimator.observations(),
            discarded,
            out_len,
            "Collection session complete"
        );

        Ok(hasher.finalize(out_len))
    }
}
