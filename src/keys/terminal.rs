//! Raw-mode terminal keystroke source.
//!
//! Raw mode is acquired when the source is constructed and released
//! in `Drop`, so the terminal is restored on every exit path: normal
//! completion, error propagation, and panic unwinding.

use super::source::{KeySource, KeySourceError};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, ErrorKind, Read};

const CTRL_C: u8 = 0x03;
const CTRL_D: u8 = 0x04;

/// Scoped raw-mode switch.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> Result<Self, KeySourceError> {
        enable_raw_mode().map_err(|e| KeySourceError::Terminal(e.to_string()))?;
        tracing::debug!("Terminal switched to raw mode");
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            tracing::warn!(error = %e, "Failed to restore terminal mode");
        } else {
            tracing::debug!("Terminal mode restored");
        }
    }
}

/// Keystroke source reading unbuffered bytes from the terminal.
///
/// In raw mode Ctrl-C arrives as an ordinary byte rather than a
/// signal; it is surfaced as [`KeySourceError::Interrupted`] (as is
/// Ctrl-D) so the session aborts cleanly with the terminal restored.
pub struct TerminalKeys {
    stdin: io::Stdin,
    _guard: RawModeGuard,
}

impl TerminalKeys {
    /// Switches the terminal to raw mode and returns the source.
    pub fn acquire() -> Result<Self, KeySourceError> {
        Ok(Self {
            stdin: io::stdin(),
            _guard: RawModeGuard::acquire()?,
        })
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> Result<u8, KeySourceError> {
        let mut buf = [0u8; 1];
        loop {
            match self.stdin.read(&mut buf) {
                Ok(0) => return Err(KeySourceError::Closed),
                Ok(_) => {
                    return match buf[0] {
                        CTRL_C | CTRL_D => Err(KeySourceError::Interrupted),
                        byte => Ok(byte),
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(KeySourceError::Terminal(e.to_string())),
            }
        }
    }
}
