// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timed advancement.

use vitrine_event_state::timeout::Timeout;

/// A self-rescheduling timer that requests one advance per interval.
///
/// Manual navigation does not reset or pause it. Only [`stop`](Self::stop)
/// ends it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Autoplay {
    timeout: Timeout,
    interval_ms: u64,
}

impl Autoplay {
    /// Start a timer whose first advance is due `interval_ms` after `now`.
    pub fn start(now: u64, interval_ms: u64) -> Self {
        let mut timeout = Timeout::new();
        timeout.arm(now, interval_ms);
        Self {
            timeout,
            interval_ms,
        }
    }

    /// Returns true when an advance is due at `now`, rescheduling the next one
    /// a full interval after `now`.
    pub fn poll(&mut self, now: u64) -> bool {
        if self.timeout.poll(now) {
            self.timeout.arm(now, self.interval_ms);
            true
        } else {
            false
        }
    }

    /// Cancel the timer. Returns true if it was running.
    pub fn stop(&mut self) -> bool {
        self.timeout.cancel()
    }

    /// Whether an advance is pending.
    pub fn is_running(&self) -> bool {
        self.timeout.is_armed()
    }

    /// When the next advance is due.
    pub fn next_due(&self) -> Option<u64> {
        self.timeout.deadline()
    }

    /// Interval between advances.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}
