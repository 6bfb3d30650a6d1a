//! Keystroke Entropy Library
//!
//! Generates a human-memorable mnemonic phrase backing a cryptographic
//! seed, using keystroke content and timing as the entropy source.
//!
//! # Architecture
//!
//! The system follows an explicit data flow:
//!
//! ```text
//! keys → collector → conditioning → mnemonic
//!            ↓
//!       estimation (bit accounting)
//! ```
//!
//! # Design Principles
//!
//! - **Heuristic gate, not a proof**: the order-1 Markov estimator only
//!   decides how long to keep reading keystrokes
//! - **Supplements OS entropy**: the session hash is seeded from the
//!   operating system's random source before any keystroke arrives
//! - **Uses standard primitives**: BLAKE3/SHA-512 for conditioning,
//!   SHA-256 for the phrase checksum
//! - **No partial output**: a failed session aborts without a phrase
//!
//! # Example
//!
//! ```
//! use keystroke_entropy::{
//!     collector::{Collector, CollectorConfig, FakeClock},
//!     keys::ScriptedKeys,
//!     mnemonic::{Dictionary, MnemonicEncoder},
//! };
//!
//! let config = CollectorConfig {
//!     target_bits: 20.0,
//!     ..Default::default()
//! };
//! let collector = Collector::new(config).unwrap();
//!
//! let mut keys = ScriptedKeys::new(*b"the quick brown fox jumps over the lazy dog");
//! let mut clock = FakeClock::new(0, 1_000_000);
//!
//! let entropy = collector.collect(&mut keys, &mut clock, |_, _| {}).unwrap();
//!
//! let encoder = MnemonicEncoder::new(Dictionary::english());
//! let phrase = encoder.encode(&entropy);
//! assert_eq!(phrase.word_count(), 15); // 160 bits + 5 checksum bits
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod collector;
pub mod conditioning;
pub mod config;
pub mod estimation;
pub mod keys;
pub mod mnemonic;
pub mod progress;

// Re-export commonly used types at crate root
pub use collector::{CollectError, Collector, CollectorConfig, MonotonicClock};
pub use conditioning::{ByteHasher, DigestAlgorithm, EntropyBytes};
pub use config::{ConfigError, FileConfig};
pub use estimation::{FrequencyTable, MarkovEstimator};
pub use keys::{KeySource, KeySourceError, ScriptedKeys, TerminalKeys};
pub use mnemonic::{Dictionary, MnemonicEncoder, MnemonicPhrase};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
