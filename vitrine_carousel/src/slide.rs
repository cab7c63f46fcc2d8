// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide construction from authored rows.

use vitrine_dom::{Document, DomError, NodeId};

use crate::context::CarouselId;
use crate::picture::ImageOptimizer;

/// Shared hero-banner panels taken from the authored non-picture row.
///
/// Each slide receives its own deep copy; the originals are never mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuxiliaryPanels {
    /// Social links panel (`social-cr-wrapper`).
    pub social: NodeId,
    /// Caption panel (`slide-legend`).
    pub legend: NodeId,
}

/// Per-slide copies of the auxiliary panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideAuxiliary {
    /// Wrapper around the content's last paragraph, when there was one.
    pub direction_icon: Option<NodeId>,
    /// This slide's copy of the social panel.
    pub social: NodeId,
    /// This slide's copy of the legend panel.
    pub legend: NodeId,
}

/// Role of an authored column inside a slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelRole {
    /// First column.
    Image,
    /// Every later column.
    Content,
}

impl PanelRole {
    fn for_position(position: usize) -> Self {
        if position == 0 { Self::Image } else { Self::Content }
    }

    /// Class added to the column.
    pub fn class(self) -> &'static str {
        match self {
            Self::Image => "carousel-slide-image",
            Self::Content => "carousel-slide-content",
        }
    }
}

/// One built slide.
#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    /// Position, stable for the carousel's lifetime.
    pub index: usize,
    /// The `li.carousel-slide` element.
    pub node: NodeId,
    /// `carousel-{carousel}-slide-{index}`.
    pub id: String,
    /// Authored columns in order; the first has [`PanelRole::Image`].
    pub panels: Vec<NodeId>,
    /// Hero-banner logo overlay.
    pub logo: Option<NodeId>,
    /// Hero-banner auxiliary copies.
    pub auxiliary: Option<SlideAuxiliary>,
}

impl Slide {
    /// Identity string for a slide.
    pub fn dom_id(carousel: CarouselId, index: usize) -> String {
        format!("carousel-{carousel}-slide-{index}")
    }
}

/// Turns authored rows into slides.
pub(crate) struct SlideBuilder<'a> {
    pub(crate) carousel: CarouselId,
    pub(crate) hero_banner: bool,
    pub(crate) logos: &'a [String],
    pub(crate) optimizer: &'a dyn ImageOptimizer,
    pub(crate) auxiliary: Option<AuxiliaryPanels>,
}

impl SlideBuilder<'_> {
    /// Build the slide for `row` at `index`. The row's columns move into the
    /// slide; the emptied row is left where it was.
    pub(crate) fn build(
        &self,
        doc: &mut Document,
        row: NodeId,
        index: usize,
    ) -> Result<Slide, DomError> {
        let id = Slide::dom_id(self.carousel, index);
        let slide = doc.create_element("li");
        doc.set_attr(slide, "data-slide-index", &index.to_string())?;
        doc.set_attr(slide, "id", &id)?;
        doc.add_class(slide, "carousel-slide")?;

        let color = doc.create_element("div");
        doc.add_class(color, "slide-color")?;
        doc.add_class(color, &format!("slide-color-{}", index + 1))?;
        doc.append_child(slide, color)?;

        let columns: Vec<NodeId> = doc
            .element_children(row)
            .filter(|&c| doc.is_tag(c, "div"))
            .collect();
        for (position, &column) in columns.iter().enumerate() {
            let role = PanelRole::for_position(position);
            doc.add_class(column, role.class())?;
            if self.hero_banner && role == PanelRole::Image {
                self.optimize_images(doc, column)?;
            }
            doc.append_child(slide, column)?;
        }

        let logo = match self.logos.get(index) {
            Some(src) if self.hero_banner => Some(attach_logo(doc, slide, src, index)?),
            _ => None,
        };

        if let Some(heading) = doc.find_descendant(slide, |e| e.is_heading())
            && let Some(heading_id) = doc.attr(heading, "id").map(str::to_owned)
        {
            doc.set_attr(slide, "aria-labelledby", &heading_id)?;
        }

        doc.move_instrumentation(row, slide)?;

        let auxiliary = match self.auxiliary {
            Some(panels) => Some(attach_auxiliary(doc, slide, panels)?),
            None => None,
        };

        Ok(Slide {
            index,
            node: slide,
            id,
            panels: columns,
            logo,
            auxiliary,
        })
    }

    fn optimize_images(&self, doc: &mut Document, column: NodeId) -> Result<(), DomError> {
        let images: Vec<NodeId> = doc.select_tag(column, "img").collect();
        for img in images {
            let src = doc.attr(img, "src").unwrap_or_default().to_owned();
            let alt = doc.attr(img, "alt").unwrap_or_default().to_owned();
            let optimized = self.optimizer.optimize(doc, &src, &alt)?;
            doc.replace_with(img, optimized)?;
        }
        Ok(())
    }
}

fn attach_logo(
    doc: &mut Document,
    slide: NodeId,
    src: &str,
    index: usize,
) -> Result<NodeId, DomError> {
    let wrapper = doc.create_element("div");
    doc.add_class(wrapper, "carousel-slide-logo")?;
    let img = doc.create_element("img");
    doc.set_attr(img, "src", src)?;
    doc.set_attr(img, "alt", &format!("Slide {} logo", index + 1))?;
    doc.append_child(wrapper, img)?;
    doc.append_child(slide, wrapper)?;
    Ok(wrapper)
}

fn attach_auxiliary(
    doc: &mut Document,
    slide: NodeId,
    panels: AuxiliaryPanels,
) -> Result<SlideAuxiliary, DomError> {
    let direction = doc
        .select_class(slide, "carousel-slide-content")
        .next()
        .and_then(|content| last_paragraph(doc, content));
    let social = doc.deep_clone(panels.social)?;
    let legend = doc.deep_clone(panels.legend)?;

    let direction_icon = match direction {
        Some(paragraph) => {
            let wrapper = doc.create_element("div");
            doc.add_class(wrapper, "direction-icon-section")?;
            doc.append_child(wrapper, paragraph)?;
            doc.append_child(slide, wrapper)?;
            Some(wrapper)
        }
        None => None,
    };
    doc.append_child(slide, social)?;
    doc.append_child(slide, legend)?;

    Ok(SlideAuxiliary {
        direction_icon,
        social,
        legend,
    })
}

/// First `p` under `scope`, in document order, that has no later `p` sibling.
fn last_paragraph(doc: &Document, scope: NodeId) -> Option<NodeId> {
    doc.select_tag(scope, "p").find(|&p| {
        let Some(parent) = doc.parent_of(p) else {
            return true;
        };
        let siblings = doc.children_of(parent);
        siblings
            .iter()
            .skip_while(|&&s| s != p)
            .skip(1)
            .all(|&s| !doc.is_tag(s, "p"))
    })
}
