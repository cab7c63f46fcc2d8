// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runtime of a decorated carousel.
//!
//! A [`Carousel`] is a small reducer over [`CarouselEvent`]s. Clicks, autoplay
//! ticks and viewport reports all funnel into the same active-slide state, and
//! the most recent event decides what is displayed. The host feeds events in
//! the order it observed them and performs the returned [`Effect`]s.

use hashbrown::HashMap;
use smallvec::SmallVec;
use tracing::{debug, warn};
use vitrine_dom::{Document, DomError, NodeId};
use vitrine_event_state::intersection::IntersectionState;

use crate::autoplay::Autoplay;
use crate::context::CarouselId;
use crate::controls::{Control, Controls};
use crate::slide::Slide;
use crate::state::{ActiveSlide, SlideView};
use crate::variant::Variant;

/// Class of the decorative backdrop element.
pub const BACKDROP_CLASS: &str = "carousel-bg-grey";

/// Input to [`Carousel::dispatch`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselEvent {
    /// The user activated `node` (or one of its descendants was the target).
    Click(NodeId),
    /// The visible fraction of a slide changed.
    Intersection {
        /// The slide's `li` element.
        slide: NodeId,
        /// Visible fraction in `[0, 1]`.
        ratio: f64,
    },
    /// Time passed; autoplay may advance.
    Tick,
    /// The viewport was resized and layout boxes were re-measured.
    Resize,
    /// Layout settled after the last transition.
    AfterLayout,
}

/// Work the host must perform on the carousel's behalf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Smoothly scroll `node` to the start of its scroll container.
    ScrollIntoView {
        /// Target slide element.
        node: NodeId,
    },
}

/// Effects produced by one event.
pub type Effects = SmallVec<[Effect; 1]>;

/// What drove a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cause {
    Decorate,
    Click,
    Autoplay,
    Viewport,
}

/// A decorated carousel block.
#[derive(Clone, Debug)]
pub struct Carousel {
    pub(crate) id: CarouselId,
    pub(crate) block: NodeId,
    pub(crate) variant: Variant,
    pub(crate) container: NodeId,
    pub(crate) slides_list: NodeId,
    pub(crate) slides: Vec<Slide>,
    pub(crate) slide_index: HashMap<NodeId, usize>,
    pub(crate) controls: Option<Controls>,
    pub(crate) bindings: HashMap<NodeId, Control>,
    pub(crate) active: ActiveSlide,
    pub(crate) autoplay: Option<Autoplay>,
    pub(crate) observer: Option<IntersectionState<NodeId>>,
    pub(crate) backdrop_enabled: bool,
    pub(crate) pending_backdrop: bool,
    pub(crate) backdrop: Option<NodeId>,
    pub(crate) interactive_tags: Vec<String>,
}

impl Carousel {
    /// Identifier assigned at decoration.
    pub fn id(&self) -> CarouselId {
        self.id
    }

    /// The decorated block element.
    pub fn block(&self) -> NodeId {
        self.block
    }

    /// Variant flags read from the block.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// `div.carousel-slides-container`.
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// `ul.carousel-slides`.
    pub fn slides_list(&self) -> NodeId {
        self.slides_list
    }

    /// Slides in order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Navigation chrome; `None` for fewer than two slides.
    pub fn controls(&self) -> Option<&Controls> {
        self.controls.as_ref()
    }

    /// Index of the active slide.
    pub fn active_index(&self) -> usize {
        self.active.index()
    }

    /// Active-slide state, including its revision counter.
    pub fn active(&self) -> ActiveSlide {
        self.active
    }

    /// Autoplay timer, when one was started and not stopped.
    pub fn autoplay(&self) -> Option<&Autoplay> {
        self.autoplay.as_ref().filter(|a| a.is_running())
    }

    /// Threshold of the viewport observer, if one is attached.
    pub fn viewport_threshold(&self) -> Option<f64> {
        self.observer.as_ref().map(IntersectionState::threshold)
    }

    /// Whether a backdrop is waiting for [`after_layout`](Self::after_layout).
    pub fn backdrop_pending(&self) -> bool {
        self.pending_backdrop
    }

    /// The control bound to `node`, if any.
    pub fn binding(&self, node: NodeId) -> Option<Control> {
        self.bindings.get(&node).copied()
    }

    /// Feed one event at time `now` (milliseconds).
    pub fn dispatch(
        &mut self,
        doc: &mut Document,
        event: CarouselEvent,
        now: u64,
    ) -> Result<Effects, DomError> {
        let mut effects = Effects::new();
        match event {
            CarouselEvent::Click(target) => {
                if let Some(effect) = self.click(doc, target)? {
                    effects.push(effect);
                }
            }
            CarouselEvent::Intersection { slide, ratio } => {
                self.report_intersection(doc, slide, ratio)?;
            }
            CarouselEvent::Tick => {
                self.tick(doc, now)?;
            }
            CarouselEvent::Resize => {
                self.center_indicators(doc)?;
            }
            CarouselEvent::AfterLayout => {
                self.after_layout(doc)?;
            }
        }
        Ok(effects)
    }

    /// Show the slide at `target`, wrapping one step past either end.
    ///
    /// Returns the index actually shown. A carousel without slides ignores
    /// the request.
    pub fn go_to(&mut self, doc: &mut Document, target: isize) -> Result<usize, DomError> {
        self.transition(doc, target, Cause::Click)
    }

    /// Show the next slide.
    pub fn next(&mut self, doc: &mut Document) -> Result<usize, DomError> {
        self.go_to(doc, self.offset(1))
    }

    /// Show the previous slide.
    pub fn previous(&mut self, doc: &mut Document) -> Result<usize, DomError> {
        self.go_to(doc, self.offset(-1))
    }

    fn offset(&self, delta: isize) -> isize {
        isize::try_from(self.active.index()).map_or(0, |i| i + delta)
    }

    pub(crate) fn transition(
        &mut self,
        doc: &mut Document,
        target: isize,
        cause: Cause,
    ) -> Result<usize, DomError> {
        if self.active.is_empty() {
            return Ok(0);
        }
        let from = self.active.index();
        let to = self.active.normalize(target);
        self.view().apply(doc, to)?;
        self.active.commit(to);
        if self.backdrop_enabled {
            self.pending_backdrop = true;
        }
        debug!(carousel = %self.id, from, to, ?cause, revision = self.active.revision(), "slide transition");
        Ok(to)
    }

    fn view(&self) -> SlideView<'_> {
        SlideView {
            block: self.block,
            slides: &self.slides,
            indicators: self
                .controls
                .as_ref()
                .map_or(&[][..], |c| c.indicators.as_slice()),
            interactive_tags: &self.interactive_tags,
            mark_active_class: self.variant.is_scrollable(),
        }
    }

    /// Handle activation of `target`.
    ///
    /// The nearest bound control at or above `target` (within the block) is
    /// triggered. Clicks elsewhere, and clicks on the indicator of the slide
    /// already shown, are ignored.
    pub fn click(&mut self, doc: &mut Document, target: NodeId) -> Result<Option<Effect>, DomError> {
        if !doc.is_alive(target) {
            warn!(carousel = %self.id, ?target, "ignoring click on a stale node");
            return Ok(None);
        }
        let Some((node, control)) = self.bound_ancestor(doc, target) else {
            debug!(carousel = %self.id, ?target, "click outside carousel controls");
            return Ok(None);
        };
        if doc.attr(node, "disabled").is_some() {
            debug!(carousel = %self.id, ?control, "click on disabled control");
            return Ok(None);
        }

        match control {
            Control::Indicator(index) if self.variant.is_scrollable() => Ok(self
                .slides
                .get(index)
                .map(|slide| Effect::ScrollIntoView { node: slide.node })),
            Control::Indicator(index) => {
                let target = isize::try_from(index).unwrap_or(isize::MAX);
                self.transition(doc, target, Cause::Click)?;
                Ok(None)
            }
            Control::Previous => {
                self.transition(doc, self.offset(-1), Cause::Click)?;
                Ok(None)
            }
            Control::Next => {
                self.transition(doc, self.offset(1), Cause::Click)?;
                Ok(None)
            }
        }
    }

    fn bound_ancestor(&self, doc: &Document, target: NodeId) -> Option<(NodeId, Control)> {
        let mut node = target;
        loop {
            if let Some(&control) = self.bindings.get(&node) {
                return Some((node, control));
            }
            if node == self.block {
                return None;
            }
            node = doc.parent_of(node)?;
        }
    }

    /// Record a visibility change of `slide`.
    ///
    /// When the slide enters the observer's threshold it becomes the active
    /// slide. This path never schedules the backdrop. Returns true when the
    /// active slide was updated.
    pub fn report_intersection(
        &mut self,
        doc: &mut Document,
        slide: NodeId,
        ratio: f64,
    ) -> Result<bool, DomError> {
        let Some(observer) = self.observer.as_mut() else {
            debug!(carousel = %self.id, "no viewport observer attached");
            return Ok(false);
        };
        let Some(entry) = observer.report(slide, ratio) else {
            return Ok(false);
        };
        if !entry.is_intersecting {
            return Ok(false);
        }
        let Some(&index) = self.slide_index.get(&entry.target) else {
            warn!(carousel = %self.id, ?slide, "intersection for an unknown slide");
            return Ok(false);
        };
        let from = self.active.index();
        self.view().apply(doc, index)?;
        self.active.commit(index);
        debug!(
            carousel = %self.id,
            from,
            to = index,
            cause = ?Cause::Viewport,
            ratio,
            revision = self.active.revision(),
            "viewport sync"
        );
        Ok(true)
    }

    /// Advance autoplay if it is due at `now`. Returns true when a transition
    /// was made.
    pub fn tick(&mut self, doc: &mut Document, now: u64) -> Result<bool, DomError> {
        let Some(autoplay) = self.autoplay.as_mut() else {
            return Ok(false);
        };
        if !autoplay.poll(now) {
            return Ok(false);
        }
        let next = self.active.following();
        debug!(carousel = %self.id, now, next, "autoplay tick");
        self.transition(doc, isize::try_from(next).unwrap_or(0), Cause::Autoplay)?;
        Ok(true)
    }

    /// Cancel autoplay. Returns true if it was running.
    pub fn stop(&mut self) -> bool {
        let stopped = self.autoplay.as_mut().is_some_and(Autoplay::stop);
        if stopped {
            debug!(carousel = %self.id, "autoplay stopped");
        }
        stopped
    }

    /// Materialize the backdrop queued by the last transition.
    ///
    /// The block's layout box must have been recorded by the host. Any
    /// backdrop this carousel inserted earlier is removed first. Returns the
    /// new backdrop element, or `None` when nothing was pending or the block
    /// cannot be measured.
    pub fn after_layout(&mut self, doc: &mut Document) -> Result<Option<NodeId>, DomError> {
        if !core::mem::take(&mut self.pending_backdrop) {
            return Ok(None);
        }
        let Some(parent) = doc.parent_of(self.block) else {
            warn!(carousel = %self.id, "carousel is not mounted, skipping backdrop");
            return Ok(None);
        };
        let Some(rect) = doc.layout(self.block) else {
            warn!(carousel = %self.id, "no layout recorded for carousel, skipping backdrop");
            return Ok(None);
        };

        if let Some(old) = self.backdrop.take() {
            doc.remove(old);
        }
        if matches!(doc.style(parent, "position"), None | Some("static")) {
            doc.set_style(parent, "position", "relative")?;
        }

        let height = rect.height();
        let backdrop = doc.create_element("div");
        doc.add_class(backdrop, BACKDROP_CLASS)?;
        for (property, value) in [
            ("position", "absolute".to_owned()),
            ("left", "50%".to_owned()),
            ("transform", "translateX(-50%)".to_owned()),
            ("width", "100vw".to_owned()),
            ("top", format!("{}px", rect.y0 + height / 2.0)),
            ("height", format!("{height}px")),
            ("background", "var(--projet-bg-page-suite)".to_owned()),
            ("z-index", "0".to_owned()),
            ("pointer-events", "none".to_owned()),
        ] {
            doc.set_style(backdrop, property, &value)?;
        }
        doc.insert_before(parent, backdrop, self.block)?;
        self.backdrop = Some(backdrop);
        debug!(carousel = %self.id, top = rect.y0 + height / 2.0, height, "backdrop placed");
        Ok(Some(backdrop))
    }

    /// The backdrop currently in the document, if any.
    pub fn backdrop(&self) -> Option<NodeId> {
        self.backdrop
    }

    /// Vertically center the indicator list against the slides container.
    ///
    /// Uses the layout boxes last recorded by the host. Returns the applied
    /// offset, or `None` when there are no indicators or either box is
    /// unmeasured.
    pub fn center_indicators(&self, doc: &mut Document) -> Result<Option<f64>, DomError> {
        let Some(list) = self.controls.as_ref().map(|c| c.list) else {
            return Ok(None);
        };
        let (Some(container), Some(indicators)) = (doc.layout(self.container), doc.layout(list))
        else {
            return Ok(None);
        };
        let top = (container.height() - indicators.height()) / 2.0;
        doc.set_style(list, "top", &format!("{top}px"))?;
        doc.set_style(list, "transform", "none")?;
        Ok(Some(top))
    }
}
