// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-slide bookkeeping and its visual projection.

use vitrine_dom::{Document, DomError, NodeId};

use crate::controls::Indicator;
use crate::slide::Slide;

/// The single source of truth for which slide is active.
///
/// The index is always within `0..len` once `len > 0`. Each committed
/// transition bumps [`revision`](Self::revision), so hosts can tell whether
/// anything happened between two observations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveSlide {
    index: usize,
    len: usize,
    revision: u64,
}

impl ActiveSlide {
    /// State for `len` slides, with slide 0 active.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            revision: 0,
        }
    }

    /// Active slide index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true for a carousel without slides.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of committed transitions.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Map a requested target onto a slide index.
    ///
    /// The correction is meant for one-step overshoots from previous/next:
    /// `-1` becomes the last slide and `len` becomes slide 0. Targets further
    /// out are outside the navigation contract; they are folded the same way
    /// (any negative to the last slide, any overshoot to slide 0) so the
    /// result stays in range.
    pub fn normalize(&self, target: isize) -> usize {
        match usize::try_from(target) {
            Err(_) => self.len.saturating_sub(1),
            Ok(t) if t >= self.len => 0,
            Ok(t) => t,
        }
    }

    /// The slide autoplay advances to.
    pub fn following(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.index + 1) % self.len
        }
    }

    pub(crate) fn commit(&mut self, index: usize) {
        debug_assert!(index < self.len.max(1), "active index out of range");
        self.index = index;
        self.revision += 1;
    }
}

/// Nodes touched when projecting the active index onto the document.
pub(crate) struct SlideView<'a> {
    pub(crate) block: NodeId,
    pub(crate) slides: &'a [Slide],
    pub(crate) indicators: &'a [Indicator],
    pub(crate) interactive_tags: &'a [String],
    /// Also move the `active` class (scroll-snap mode).
    pub(crate) mark_active_class: bool,
}

impl SlideView<'_> {
    /// Hide every slide but `active` from assistive technology, take their
    /// interactive descendants out of the tab order, and mark the matching
    /// indicator as the current position.
    pub(crate) fn apply(&self, doc: &mut Document, active: usize) -> Result<(), DomError> {
        for slide in self.slides {
            let is_active = slide.index == active;
            doc.set_attr(slide.node, "aria-hidden", if is_active { "false" } else { "true" })?;
            let interactive: Vec<NodeId> = doc
                .descendants(slide.node)
                .filter(|&n| {
                    doc.tag(n)
                        .is_some_and(|tag| self.interactive_tags.iter().any(|t| t == tag))
                })
                .collect();
            for node in interactive {
                if is_active {
                    doc.remove_attr(node, "tabindex");
                } else {
                    doc.set_attr(node, "tabindex", "-1")?;
                }
            }
            if self.mark_active_class {
                if is_active {
                    doc.add_class(slide.node, "active")?;
                } else {
                    doc.remove_class(slide.node, "active");
                }
            }
        }

        for indicator in self.indicators {
            if indicator.target == active {
                doc.set_attr(indicator.button, "disabled", "true")?;
            } else {
                doc.remove_attr(indicator.button, "disabled");
            }
        }

        doc.set_attr(self.block, "data-active-slide", &active.to_string())
    }
}
