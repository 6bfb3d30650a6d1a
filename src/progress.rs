//! Console progress display.
//!
//! Fire-and-forget: the collector invokes this through a callback and
//! never depends on it succeeding. Drawing uses carriage-return
//! redraws on stderr so the final phrase on stdout stays clean.

use std::io::{self, Write};

/// Textual progress bar for the collection loop.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    width: usize,
}

impl ProgressBar {
    /// Creates a bar of the given character width.
    pub fn new(width: usize) -> Self {
        Self { width: width.max(1) }
    }

    /// Formats one progress line for the given bit counts.
    pub fn render(&self, bits: f64, target: f64) -> String {
        let fraction = (bits / target).clamp(0.0, 1.0);
        let filled = (self.width as f64 * fraction) as usize;
        format!(
            "{:5.1}% |{}{}| {:.0}/{:.0} bits",
            fraction * 100.0,
            "█".repeat(filled),
            " ".repeat(self.width - filled),
            bits,
            target
        )
    }

    /// Redraws the bar in place on stderr.
    pub fn draw(&self, bits: f64, target: f64) {
        let mut stderr = io::stderr();
        // Display failures never affect collection.
        let _ = write!(stderr, "\r{}", self.render(bits, target));
        let _ = stderr.flush();
    }

    /// Ends the progress line (raw mode needs an explicit \r\n).
    pub fn finish(&self) {
        let _ = write!(io::stderr(), "\r\n");
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new(50)
    }
}
