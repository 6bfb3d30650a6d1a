//! Keystroke source abstraction.

use std::collections::VecDeque;
use thiserror::Error;

/// Errors that can occur while reading keystrokes.
#[derive(Debug, Error)]
pub enum KeySourceError {
    #[error("keystroke stream closed")]
    Closed,
    #[error("interrupted by user")]
    Interrupted,
    #[error("terminal failure: {0}")]
    Terminal(String),
}

/// Trait for keystroke sources.
///
/// `next_key` blocks until one raw input byte is available. There is
/// no timeout and no cancellation beyond returning an error; a failed
/// read aborts the whole collection session.
pub trait KeySource {
    /// Blocks until the next raw input byte arrives.
    fn next_key(&mut self) -> Result<u8, KeySourceError>;
}

/// Scripted keystroke source for testing.
///
/// Replays a fixed byte sequence, then reports the stream as closed.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<u8>,
}

impl ScriptedKeys {
    /// Creates a source replaying the given bytes in order.
    pub fn new(keys: impl Into<Vec<u8>>) -> Self {
        Self {
            keys: keys.into().into(),
        }
    }

    /// Returns how many scripted bytes remain.
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> Result<u8, KeySourceError> {
        self.keys.pop_front().ok_or(KeySourceError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_replay_in_order() {
        let mut keys = ScriptedKeys::new(*b"abc");

        assert_eq!(keys.next_key().unwrap(), b'a');
        assert_eq!(keys.next_key().unwrap(), b'b');
        assert_eq!(keys.next_key().unwrap(), b'c');
        assert!(matches!(keys.next_key(), Err(KeySourceError::Closed)));
    }

    #[test]
    fn test_remaining_counts_down() {
        let mut keys = ScriptedKeys::new(*b"xy");
        assert_eq!(keys.remaining(), 2);
        keys.next_key().unwrap();
        assert_eq!(keys.remaining(), 1);
    }
}
