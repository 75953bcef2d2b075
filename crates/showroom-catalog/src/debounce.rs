//! Trailing-edge debouncing for rapid control input.
//!
//! Keyword boxes would otherwise recompute on every keystroke. A
//! [`Debouncer`] coalesces a burst of changes into one recompute: each
//! [`trigger`](Debouncer::trigger) pushes the deadline back, and
//! [`fire`](Debouncer::fire) reports true once the input has been quiet for
//! the whole delay.
//!
//! The debouncer does not own a timer. Callers pass the current [`Instant`]
//! from whatever event loop they run, which keeps it deterministic in tests.

use std::time::{Duration, Instant};

/// Quiet period before a keyword search runs.
pub const KEYWORD_DELAY: Duration = Duration::from_millis(300);

/// A trailing-edge debouncer driven by caller-supplied instants.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(KEYWORD_DELAY)
    }
}

impl Debouncer {
    /// Creates a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Returns the quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Records an input event at `now`, re-arming the deadline.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Abandons a pending fire.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns true if a fire is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns the instant the pending fire is due.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true exactly once when the deadline has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
