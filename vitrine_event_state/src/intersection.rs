// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Level-triggered intersection observation.
//!
//! Hosts measure how much of each observed target is visible inside its scroll
//! viewport and [report](IntersectionState::report) that ratio whenever it
//! changes. The state machine turns the stream of ratios into the entries an
//! intersection observer would deliver: one on the first report after a target
//! starts being observed, then one each time the target crosses the threshold
//! in either direction.
//!
//! ## Usage
//!
//! ```
//! use vitrine_event_state::intersection::IntersectionState;
//!
//! let mut state: IntersectionState<u32> = IntersectionState::new(0.6);
//! state.observe(2);
//!
//! // First report always yields an entry.
//! let entry = state.report(2, 0.1).unwrap();
//! assert!(!entry.is_intersecting);
//!
//! // Staying on the same side of the threshold yields nothing.
//! assert!(state.report(2, 0.3).is_none());
//!
//! // Crossing it does.
//! let entry = state.report(2, 0.75).unwrap();
//! assert!(entry.is_intersecting);
//! assert_eq!(entry.target, 2);
//! ```
//!
//! ## Rules
//!
//! 1. A target is intersecting when `ratio >= threshold`.
//! 2. Reports for targets that are not observed are ignored.
//! 3. Re-observing a target resets it, so its next report yields an entry.
//! 4. The threshold is clamped to `[0, 1]`; a NaN ratio counts as not visible.

use core::hash::Hash;
use hashbrown::HashMap;

/// An intersection change delivered to the host.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry<K> {
    /// Observed target.
    pub target: K,
    /// Visible fraction reported by the host.
    pub ratio: f64,
    /// Whether `ratio` reached the threshold.
    pub is_intersecting: bool,
}

/// Tracks per-target threshold state for a single observer.
#[derive(Clone, Debug)]
pub struct IntersectionState<K> {
    /// Last delivered intersecting state per observed target; `None` until the first report.
    targets: HashMap<K, Option<bool>>,
    threshold: f64,
}

impl<K: Eq + Hash + Clone> IntersectionState<K> {
    /// Create an observer with the given visibility threshold.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            targets: HashMap::new(),
            threshold,
        }
    }

    /// The effective threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start observing `target`, resetting any previous state for it.
    pub fn observe(&mut self, target: K) {
        self.targets.insert(target, None);
    }

    /// Stop observing `target`. Returns true if it was observed.
    pub fn unobserve(&mut self, target: &K) -> bool {
        self.targets.remove(target).is_some()
    }

    /// Returns true if `target` is observed.
    pub fn is_observed(&self, target: &K) -> bool {
        self.targets.contains_key(target)
    }

    /// Number of observed targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns true if nothing is observed.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Record a new visibility ratio for `target`.
    ///
    /// Returns an entry when the target's intersecting state is reported for
    /// the first time or differs from the last delivered one.
    pub fn report(&mut self, target: K, ratio: f64) -> Option<IntersectionEntry<K>> {
        let threshold = self.threshold;
        let last = self.targets.get_mut(&target)?;
        let is_intersecting = ratio >= threshold;
        if *last == Some(is_intersecting) {
            return None;
        }
        *last = Some(is_intersecting);
        Some(IntersectionEntry {
            target,
            ratio,
            is_intersecting,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unobserved_targets_are_ignored() {
        let mut state: IntersectionState<u32> = IntersectionState::new(0.5);
        assert!(state.report(7, 1.0).is_none());
        state.observe(7);
        assert!(state.report(7, 1.0).is_some());
        assert!(state.unobserve(&7));
        assert!(state.report(7, 0.0).is_none());
    }

    #[test]
    fn crossing_in_both_directions() {
        let mut state: IntersectionState<u32> = IntersectionState::new(0.5);
        state.observe(1);
        assert!(state.report(1, 0.5).is_some_and(|e| e.is_intersecting));
        assert!(state.report(1, 0.9).is_none());
        let leave = state.report(1, 0.49).unwrap();
        assert!(!leave.is_intersecting);
        assert!(state.report(1, 0.0).is_none());
        assert!(state.report(1, 0.51).is_some_and(|e| e.is_intersecting));
    }

    #[test]
    fn reobserve_resets() {
        let mut state: IntersectionState<u32> = IntersectionState::new(0.6);
        state.observe(3);
        assert!(state.report(3, 0.8).is_some());
        assert!(state.report(3, 0.8).is_none());
        state.observe(3);
        assert!(
            state.report(3, 0.8).is_some(),
            "re-observing must deliver a fresh entry"
        );
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(IntersectionState::<u8>::new(1.5).threshold(), 1.0);
        assert_eq!(IntersectionState::<u8>::new(-0.2).threshold(), 0.0);
        assert_eq!(IntersectionState::<u8>::new(f64::NAN).threshold(), 0.0);
    }

    #[test]
    fn nan_ratio_is_not_visible() {
        let mut state: IntersectionState<u8> = IntersectionState::new(0.5);
        state.observe(0);
        let entry = state.report(0, f64::NAN).unwrap();
        assert!(!entry.is_intersecting);
    }

    #[test]
    fn targets_are_independent() {
        let mut state: IntersectionState<u8> = IntersectionState::new(0.6);
        state.observe(0);
        state.observe(1);
        assert_eq!(state.len(), 2);
        assert!(state.report(0, 0.7).is_some());
        assert!(state.report(1, 0.7).is_some(), "first report per target");
        assert!(state.report(0, 0.7).is_none());
    }
}
