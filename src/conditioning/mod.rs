//! Entropy conditioning via cryptographic hashing.
//!
//! This module turns the absorbed session transcript (OS seed
//! material, keystroke bytes, timestamps) into a fixed-length block
//! of output bytes. It uses well-established hash functions; the
//! collection loop decides *when* enough input has been absorbed.

mod hash;

pub use hash::{ByteHasher, DigestAlgorithm, EntropyBytes};
