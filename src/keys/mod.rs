//! Keystroke input sources.
//!
//! This module provides the blocking one-byte-at-a-time input
//! abstraction the collector drains, with a raw-mode terminal
//! implementation for interactive use and a scripted implementation
//! for tests. The keystroke stream is raw material for the estimator
//! and the hasher, never a source of entropy claims by itself.

mod source;
mod terminal;

pub use source::{KeySource, KeySourceError, ScriptedKeys};
pub use terminal::TerminalKeys;
