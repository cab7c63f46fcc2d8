// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indicator list and previous/next buttons.

use vitrine_dom::{Document, DomError, NodeId};

use crate::placeholders::Placeholders;

/// What activating a bound control does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    /// Go to the slide at this index.
    Indicator(usize),
    /// Go to the previous slide.
    Previous,
    /// Go to the next slide.
    Next,
}

/// One indicator: a list item wrapping a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Indicator {
    /// Slide this indicator targets.
    pub target: usize,
    /// The `li.carousel-slide-indicator`.
    pub item: NodeId,
    /// The button inside it; disabled while its slide is active.
    pub button: NodeId,
}

/// Navigation chrome of a multi-slide carousel.
#[derive(Clone, Debug, PartialEq)]
pub struct Controls {
    /// The `nav` landmark.
    pub nav: NodeId,
    /// The `ol.carousel-slide-indicators`.
    pub list: NodeId,
    /// One indicator per slide, in slide order.
    pub indicators: Vec<Indicator>,
    /// Previous/next buttons; absent for vertical carousels.
    pub buttons: Option<NavButtons>,
}

/// The previous/next button pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavButtons {
    /// `div.carousel-navigation-buttons`.
    pub wrapper: NodeId,
    /// `button.slide-prev`.
    pub previous: NodeId,
    /// `button.slide-next`.
    pub next: NodeId,
}

impl Controls {
    /// Build the controls for `total` slides and append them to `container`.
    ///
    /// Returns `None` without touching the document when `total < 2`.
    pub(crate) fn build(
        doc: &mut Document,
        container: NodeId,
        total: usize,
        with_buttons: bool,
        labels: &Placeholders,
    ) -> Result<Option<Self>, DomError> {
        if total < 2 {
            return Ok(None);
        }

        let nav = doc.create_element("nav");
        doc.set_attr(nav, "aria-label", labels.carousel_slide_controls())?;
        let list = doc.create_element("ol");
        doc.add_class(list, "carousel-slide-indicators")?;
        doc.append_child(nav, list)?;
        doc.append_child(container, nav)?;

        let buttons = if with_buttons {
            Some(build_buttons(doc, container, labels)?)
        } else {
            None
        };

        let indicators = (0..total)
            .map(|target| build_indicator(doc, list, target, total, labels))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Self {
            nav,
            list,
            indicators,
            buttons,
        }))
    }

    /// Every bound node with the action it triggers.
    pub fn bindings(&self) -> impl Iterator<Item = (NodeId, Control)> + '_ {
        let indicators = self
            .indicators
            .iter()
            .map(|i| (i.button, Control::Indicator(i.target)));
        let buttons = self.buttons.iter().flat_map(|b| {
            [(b.previous, Control::Previous), (b.next, Control::Next)]
        });
        indicators.chain(buttons)
    }
}

fn build_buttons(
    doc: &mut Document,
    container: NodeId,
    labels: &Placeholders,
) -> Result<NavButtons, DomError> {
    let wrapper = doc.create_element("div");
    doc.add_class(wrapper, "carousel-navigation-buttons")?;
    let previous = nav_button(doc, "slide-prev", labels.previous_slide())?;
    let next = nav_button(doc, "slide-next", labels.next_slide())?;
    doc.append_child(wrapper, previous)?;
    doc.append_child(wrapper, next)?;
    doc.append_child(container, wrapper)?;
    Ok(NavButtons {
        wrapper,
        previous,
        next,
    })
}

fn nav_button(doc: &mut Document, class: &str, label: &str) -> Result<NodeId, DomError> {
    let button = doc.create_element("button");
    doc.set_attr(button, "type", "button")?;
    doc.add_class(button, class)?;
    doc.set_attr(button, "aria-label", label)?;
    Ok(button)
}

fn build_indicator(
    doc: &mut Document,
    list: NodeId,
    target: usize,
    total: usize,
    labels: &Placeholders,
) -> Result<Indicator, DomError> {
    debug_assert!(target < total, "indicator target out of range");
    let item = doc.create_element("li");
    doc.add_class(item, "carousel-slide-indicator")?;
    doc.set_attr(item, "data-target-slide", &target.to_string())?;
    let button = doc.create_element("button");
    doc.set_attr(button, "type", "button")?;
    doc.set_attr(button, "aria-label", &labels.show_slide_label(target, total))?;
    doc.append_child(item, button)?;
    doc.append_child(list, item)?;
    Ok(Indicator {
        target,
        item,
        button,
    })
}
