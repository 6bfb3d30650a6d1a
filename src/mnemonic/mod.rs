//! Mnemonic phrase encoding.
//!
//! This module converts collected entropy bytes into a checksummed,
//! human-memorable word phrase following the BIP-39 bit layout:
//! entropy plus `entropy_bits / 32` checksum bits, sliced into 11-bit
//! indices into a fixed 2048-word dictionary.

mod dictionary;
mod encoder;

pub use dictionary::{Dictionary, DICTIONARY_WORDS};
pub use encoder::{MnemonicEncoder, MnemonicPhrase};
