//! Entropy-to-phrase encoding.

use super::dictionary::Dictionary;
use crate::conditioning::EntropyBytes;
use sha2::{Digest, Sha256};
use std::fmt;

/// Ordered word sequence encoding entropy plus checksum.
///
/// Derived deterministically from the entropy bytes; `Display`
/// renders the space-joined line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MnemonicPhrase {
    words: Vec<String>,
}

impl MnemonicPhrase {
    /// Returns the words in slice order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl fmt::Display for MnemonicPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

/// Deterministic entropy-to-phrase encoder over a fixed dictionary.
pub struct MnemonicEncoder {
    dictionary: Dictionary,
}

impl MnemonicEncoder {
    /// Creates an encoder over the given dictionary.
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    /// Returns the dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Encodes entropy bytes into a mnemonic phrase.
    ///
    /// A SHA-256 checksum of the entropy contributes one extra bit per
    /// 32 entropy bits; the concatenation is read as a big-endian
    /// bitstream (MSB of byte 0 first) and sliced into 11-bit
    /// dictionary indices.
    ///
    /// # Panics
    ///
    /// The entropy length must be a non-zero multiple of 4 bytes, no
    /// longer than 32 bytes. Anything else is a programmer error, not
    /// a recoverable condition.
    pub fn encode(&self, entropy: &EntropyBytes) -> MnemonicPhrase {
        let data = entropy.as_bytes();
        assert!(
            !data.is_empty() && data.len() % 4 == 0 && data.len() <= 32,
            "entropy length must be a non-zero multiple of 4 bytes up to 32, got {}",
            data.len()
        );

        let checksum = Sha256::digest(data);
        let mut stream = Vec::with_capacity(data.len() + checksum.len());
        stream.extend_from_slice(data);
        stream.extend_from_slice(&checksum);

        // entropy bits plus one checksum bit per 32 entropy bits;
        // always a whole number of 11-bit groups.
        let total_bits = data.len() * 8 + data.len() * 8 / 32;
        let word_count = total_bits / 11;
        debug_assert_eq!(total_bits % 11, 0);

        let words = (0..word_count)
            .map(|group| {
                let index = (0..11).fold(0usize, |acc, bit| {
                    let pos = group * 11 + bit;
                    let b = (stream[pos / 8] >> (7 - pos % 8)) & 1;
                    (acc << 1) | b as usize
                });
                self.dictionary.word(index).to_string()
            })
            .collect();

        MnemonicPhrase { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn encoder() -> MnemonicEncoder {
        MnemonicEncoder::new(Dictionary::english())
    }

    fn entropy_from_hex(hex: &str) -> EntropyBytes {
        let bytes = (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
            .collect();
        EntropyBytes::from_raw(bytes)
    }

    #[test]
    fn test_known_vector_1() {
        let phrase = encoder().encode(&entropy_from_hex(
            "3f9284bcb5c089863d0c7068a83893944e3b0d48dacf5e60d65b9e27942dfe2b",
        ));
        assert_eq!(
            phrase.to_string(),
            "display neither connect high ancient seek vintage mix hamster dove \
             ceiling chuckle together mammal casino fly fury allow notice detail \
             junk black weather jaguar"
        );
    }

    #[test]
    fn test_known_vector_2() {
        let phrase = encoder().encode(&entropy_from_hex(
            "335ab07f496eba24ce9671e2c117a5ce0140ee2263aad6f1052c94ac95a37544",
        ));
        assert_eq!(
            phrase.to_string(),
            "crew stereo cabin name two bar demise soda tissue anger truly orchard \
             beef jacket maze inspire street market enroll citizen sing spider \
             steak manage"
        );
    }

    #[test]
    fn test_known_vector_3() {
        let phrase = encoder().encode(&entropy_from_hex(
            "5737726319c3e98229dc27d261e8241593a8cbad0b2aaa5ebf23eae16c0e2abe",
        ));
        assert_eq!(
            phrase.to_string(),
            "fire romance occur crime direct scissors polar lumber sponsor aunt \
             animal clinic dentist grape reflect grab prevent vote similar still \
             bitter alpha priority scissors"
        );
    }

    #[test]
    fn test_length_law() {
        for (len, words) in [(16, 12), (20, 15), (24, 18), (28, 21), (32, 24)] {
            let entropy = EntropyBytes::from_raw(vec![0xA5; len]);
            assert_eq!(encoder().encode(&entropy).word_count(), words);
            // The layout uses every bit: entropy_bits * 33 / 32 must
            // divide cleanly into 11-bit groups.
            assert_eq!(len * 8 * 33 % (32 * 11), 0);
        }
    }

    #[test]
    fn test_all_zero_entropy() {
        // 16 zero bytes is the classic BIP-39 degenerate case: all
        // index groups but the last are zero.
        let phrase = encoder().encode(&EntropyBytes::from_raw(vec![0u8; 16]));
        assert_eq!(
            phrase.to_string(),
            "abandon abandon abandon abandon abandon abandon abandon abandon \
             abandon abandon abandon about"
        );
    }

    #[test]
    #[should_panic(expected = "multiple of 4")]
    fn test_unaligned_entropy_panics() {
        encoder().encode(&EntropyBytes::from_raw(vec![0u8; 17]));
    }

    #[test]
    #[should_panic(expected = "multiple of 4")]
    fn test_empty_entropy_panics() {
        encoder().encode(&EntropyBytes::from_raw(Vec::new()));
    }

    proptest! {
        #[test]
        fn prop_encode_is_deterministic(bytes in proptest::collection::vec(any::<u8>(), 32)) {
            let entropy = EntropyBytes::from_raw(bytes);
            let enc = encoder();
            prop_assert_eq!(enc.encode(&entropy), enc.encode(&entropy));
        }

        #[test]
        fn prop_single_bit_changes_phrase(
            bytes in proptest::collection::vec(any::<u8>(), 20),
            flip in 0usize..160,
        ) {
            let mut flipped = bytes.clone();
            flipped[flip / 8] ^= 1 << (flip % 8);

            let enc = encoder();
            let a = enc.encode(&EntropyBytes::from_raw(bytes));
            let b = enc.encode(&EntropyBytes::from_raw(flipped));
            prop_assert_ne!(a, b);
        }
    }
}
