//! Incremental hashing of the session transcript.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};
use std::str::FromStr;

/// Supported digest algorithms for session conditioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// BLAKE3 in XOF mode - fast, arbitrary output length, default.
    #[default]
    Blake3,
    /// SHA-512 truncated to the requested length (at most 64 bytes).
    Sha512,
}

impl FromStr for DigestAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blake3" => Ok(Self::Blake3),
            "sha512" => Ok(Self::Sha512),
            other => Err(format!("unknown digest algorithm: {other}")),
        }
    }
}

/// Fixed-length entropy output of a collection session.
///
/// Produced once per session, never mutated, and fed to the mnemonic
/// encoder. The raw bytes are deliberately left out of the `Debug`
/// representation.
#[derive(Clone, PartialEq, Eq)]
pub struct EntropyBytes {
    data: Vec<u8>,
}

impl EntropyBytes {
    /// Wraps entropy bytes produced elsewhere (e.g. for re-encoding a
    /// known value as a phrase).
    pub fn from_raw(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Returns the entropy bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the number of bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of bits.
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.data.len() * 8
    }
}

impl std::fmt::Debug for EntropyBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntropyBytes")
            .field("bytes", &self.data.len())
            .finish_non_exhaustive()
    }
}

enum HasherState {
    Blake3(blake3::Hasher),
    Sha512(Sha512),
}

/// Incremental byte hasher absorbing arbitrary chunks.
///
/// The hasher is finalized exactly once, consuming it; the output
/// length is chosen at finalization. SHA-512 output is truncation of
/// the 64-byte digest, so it cannot produce more than 64 bytes.
pub struct ByteHasher {
    state: HasherState,
}

impl ByteHasher {
    /// Creates a hasher using the given algorithm.
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        let state = match algorithm {
            DigestAlgorithm::Blake3 => HasherState::Blake3(blake3::Hasher::new()),
            DigestAlgorithm::Sha512 => HasherState::Sha512(Sha512::new()),
        };
        Self { state }
    }

    /// Absorbs one chunk of bytes.
    pub fn absorb(&mut self, chunk: &[u8]) {
        match &mut self.state {
            HasherState::Blake3(h) => {
                h.update(chunk);
            }
            HasherState::Sha512(h) => h.update(chunk),
        }
    }

    /// Finalizes into exactly `out_len` bytes.
    pub fn finalize(self, out_len: usize) -> EntropyBytes {
        let data = match self.state {
            HasherState::Blake3(h) => {
                let mut out = vec![0u8; out_len];
                h.finalize_xof().fill(&mut out);
                out
            }
            HasherState::Sha512(h) => {
                assert!(out_len <= 64, "SHA-512 output is at most 64 bytes");
                h.finalize()[..out_len].to_vec()
            }
        };

        EntropyBytes { data }
    }
}

impl Default for ByteHasher {
    fn default() -> Self {
        Self::new(DigestAlgorithm::default())
    }
}
