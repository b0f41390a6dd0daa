//! Minute-aligned periodic render tick.
//!
//! The face only changes on minute boundaries, so instead of firing every
//! 60 s from whenever the loop happened to start, the tick is aligned to the
//! next wall-clock minute: the delay to the next fire is
//! `interval - now_ms % interval`. Rescheduling from the wall clock after
//! each firing means the tick can never drift away from the boundary, no
//! matter how long a frame took.
//!
//! The ticker is polled from the single-threaded frame loop; there is no
//! timer thread and nothing to cancel asynchronously. Dropping the ticker
//! is teardown.

use std::time::{Duration, Instant};

use crate::config::UPDATE_INTERVAL_MS;

/// Delay from `wall_ms` (unix milliseconds) to the next interval boundary.
///
/// Exactly on a boundary the full interval is returned: the tick for that
/// boundary has just fired.
pub const fn delay_to_next_tick(wall_ms: i64) -> Duration {
    let remainder = wall_ms.rem_euclid(UPDATE_INTERVAL_MS);
    Duration::from_millis((UPDATE_INTERVAL_MS - remainder) as u64)
}

/// Periodic tick whose deadline is re-derived from the wall clock after
/// every firing.
pub struct AlignedTicker {
    deadline: Instant,
}

impl AlignedTicker {
    /// Create a ticker whose first fire lands on the next minute boundary.
    pub fn new(now: Instant, wall_ms: i64) -> Self {
        Self {
            deadline: now + delay_to_next_tick(wall_ms),
        }
    }

    /// Returns `true` once per elapsed deadline and schedules the next one.
    ///
    /// Called every frame with the current monotonic and wall-clock time.
    pub fn poll(&mut self, now: Instant, wall_ms: i64) -> bool {
        if now < self.deadline {
            return false;
        }
        self.deadline = now + delay_to_next_tick(wall_ms);
        true
    }
}
