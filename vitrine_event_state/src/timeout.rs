// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cancellable one-shot deadlines.
//!
//! A [`Timeout`] is the deterministic counterpart of a deferred callback: the
//! host arms it with a delay, polls it with the current time, and re-arms it
//! from the firing site when a repeating behavior is wanted.
//!
//! ```
//! use vitrine_event_state::timeout::Timeout;
//!
//! let mut t = Timeout::new();
//! t.arm(1_000, 4_000);
//! assert!(!t.poll(4_999));
//! assert!(t.poll(5_000));
//! // Fired timeouts disarm themselves.
//! assert!(!t.poll(9_000));
//!
//! // Re-arming from the firing site gives a self-rescheduling task.
//! t.arm(5_000, 4_000);
//! assert_eq!(t.deadline(), Some(9_000));
//! assert!(t.cancel());
//! assert!(!t.poll(10_000));
//! ```

/// A one-shot deadline in host milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timeout {
    deadline: Option<u64>,
}

impl Timeout {
    /// Create a disarmed timeout.
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm (or re-arm) the timeout to fire `delay` milliseconds after `now`.
    pub fn arm(&mut self, now: u64, delay: u64) {
        self.deadline = Some(now.saturating_add(delay));
    }

    /// Disarm the timeout. Returns true if it was armed.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Returns true while a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any.
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Returns true exactly once when `now` has reached the deadline, disarming
    /// the timeout.
    pub fn poll(&mut self, now: u64) -> bool {
        if let Some(deadline) = self.deadline
            && now >= deadline
        {
            self.deadline = None;
            return true;
        }
        false
    }
}
