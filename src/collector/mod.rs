//! Interactive entropy collection.
//!
//! This module drives the session loop: it drains one keystroke at a
//! time from a [`KeySource`](crate::keys::KeySource), scores it with
//! the Markov estimator, absorbs it (with a monotonic timestamp) into
//! the session hasher, and stops once the cumulative estimate crosses
//! the configured target.

mod clock;
mod session;

pub use clock::{Clock, FakeClock, MonotonicClock};
pub use session::{CollectError, Collector, CollectorConfig};
