//! The fixed 2048-word dictionary.

use crate::config::ConfigError;
use std::path::Path;

/// Required dictionary size: one word per 11-bit index.
pub const DICTIONARY_WORDS: usize = 2048;

/// Ordered, immutable word list with exactly 2048 entries.
///
/// Index 0..2047 maps directly to an 11-bit group of the encoded
/// bitstream. Construction fails fast on a wrong word count, before
/// any collection work begins.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Returns the embedded BIP-39 English word list.
    pub fn english() -> Self {
        Self {
            words: bip39::Language::English
                .word_list()
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }

    /// Builds a dictionary from lines of text, one word per line,
    /// trimmed of surrounding whitespace.
    ///
    /// A blank line anywhere is malformed; an ordinary trailing
    /// newline never produces one.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::with_capacity(DICTIONARY_WORDS);
        for (lineno, line) in lines.into_iter().enumerate() {
            let word = line.as_ref().trim();
            if word.is_empty() {
                return Err(ConfigError::BlankLine(lineno + 1));
            }
            words.push(word.to_string());
        }

        if words.len() != DICTIONARY_WORDS {
            return Err(ConfigError::WordCount(words.len()));
        }
        Ok(Self { words })
    }

    /// Loads a dictionary from a plain-text file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileRead(e.to_string()))?;
        let dictionary = Self::from_lines(content.lines())?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded word list");
        Ok(dictionary)
    }

    /// Returns the word at the given index.
    ///
    /// Panics if `index >= 2048`; encoded 11-bit groups can never
    /// exceed that.
    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// Returns the number of words (always 2048).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns false; the dictionary is never empty by construction.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_has_expected_words() {
        let dictionary = Dictionary::english();
        assert_eq!(dictionary.len(), DICTIONARY_WORDS);
        assert_eq!(dictionary.word(0), "abandon");
        assert_eq!(dictionary.word(2047), "zoo");
    }

    #[test]
    fn test_wrong_count_fails_fast() {
        for count in [2047, 2049] {
            let lines: Vec<String> = (0..count).map(|i| format!("word{i}")).collect();
            assert!(matches!(
                Dictionary::from_lines(&lines),
                Err(ConfigError::WordCount(found)) if found == count
            ));
        }
    }

    #[test]
    fn test_blank_interior_line_is_malformed() {
        // 2049 lines where one is blank must not pass the count
        // check by silently dropping the blank.
        let mut lines: Vec<String> = (0..DICTIONARY_WORDS).map(|i| format!("word{i}")).collect();
        lines.insert(1000, "   ".to_string());

        assert!(matches!(
            Dictionary::from_lines(&lines),
            Err(ConfigError::BlankLine(1001))
        ));
    }

    #[test]
    fn test_lines_are_trimmed() {
        let lines: Vec<String> = (0..DICTIONARY_WORDS)
            .map(|i| format!("  word{i}\t"))
            .collect();
        let dictionary = Dictionary::from_lines(&lines).unwrap();
        assert_eq!(dictionary.word(7), "word7");
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        assert!(matches!(
            Dictionary::from_file("/nonexistent/wordlist.txt"),
            Err(ConfigError::FileRead(_))
        ));
    }
}
