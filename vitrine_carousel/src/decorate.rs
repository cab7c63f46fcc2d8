// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Block decoration entry point.

use hashbrown::HashMap;
use tracing::{info, warn};
use vitrine_dom::{Document, NodeId};
use vitrine_event_state::intersection::IntersectionState;

use crate::autoplay::Autoplay;
use crate::carousel::{Carousel, Cause};
use crate::context::PageContext;
use crate::controls::{Control, Controls};
use crate::error::DecorateError;
use crate::picture::{ImageOptimizer, PictureOptimizer};
use crate::slide::{AuxiliaryPanels, Slide, SlideBuilder};
use crate::state::ActiveSlide;
use crate::variant::Variant;

/// Decorate `block` with the default [`PictureOptimizer`].
///
/// See [`decorate_with`].
pub fn decorate(
    ctx: &mut PageContext,
    doc: &mut Document,
    block: NodeId,
    now: u64,
) -> Result<Carousel, DecorateError> {
    decorate_with(ctx, doc, block, &PictureOptimizer::default(), now)
}

/// Turn an authored carousel block into a live [`Carousel`].
///
/// Every direct `div` child of `block` is a row. Each row becomes one slide;
/// in hero-banner mode, rows without a `picture` instead supply the shared
/// social and legend panels. The block is restructured in place and `now`
/// (milliseconds) anchors the autoplay timer.
///
/// Fails only when `block` is not a live element or a structural edit is
/// rejected; absent optional content is skipped.
pub fn decorate_with(
    ctx: &mut PageContext,
    doc: &mut Document,
    block: NodeId,
    optimizer: &dyn ImageOptimizer,
    now: u64,
) -> Result<Carousel, DecorateError> {
    if doc.element(block).is_none() {
        return Err(DecorateError::NotABlock(block));
    }

    let id = ctx.next_carousel_id();
    doc.set_attr(block, "id", &format!("carousel-{id}"))?;
    let variant = Variant::classify(doc, block);

    let rows: Vec<NodeId> = doc
        .element_children(block)
        .filter(|&row| doc.is_tag(row, "div"))
        .collect();
    let (rows, auxiliary, discarded) = if variant.is_hero_banner() {
        partition_hero_rows(doc, rows)?
    } else {
        (rows, None, Vec::new())
    };
    let total = rows.len();

    doc.set_attr(block, "role", "region")?;
    doc.set_attr(block, "aria-roledescription", ctx.placeholders.carousel())?;

    let container = doc.create_element("div");
    doc.add_class(container, "carousel-slides-container")?;
    let slides_list = doc.create_element("ul");
    doc.add_class(slides_list, "carousel-slides")?;
    if variant.is_vertical() {
        doc.add_class(block, "carousel-vertical")?;
    }

    let controls = Controls::build(
        doc,
        container,
        total,
        !variant.is_vertical(),
        &ctx.placeholders,
    )?;

    let locale = ctx.locale();
    let builder = SlideBuilder {
        carousel: id,
        hero_banner: variant.is_hero_banner(),
        logos: ctx.config.logos_for(locale),
        optimizer,
        auxiliary,
    };
    let mut slides = Vec::with_capacity(total);
    for (index, &row) in rows.iter().enumerate() {
        let slide = builder.build(doc, row, index)?;
        doc.append_child(slides_list, slide.node)?;
        slides.push(slide);
    }

    doc.append_child(container, slides_list)?;
    doc.prepend_child(block, container)?;
    remove_empty_divs(doc, block);
    for row in discarded {
        doc.remove(row);
    }

    let slide_index: HashMap<NodeId, usize> = slides.iter().map(|s| (s.node, s.index)).collect();
    let mut carousel = Carousel {
        id,
        block,
        variant,
        container,
        slides_list,
        slides,
        slide_index,
        controls,
        bindings: HashMap::new(),
        active: ActiveSlide::new(total),
        autoplay: None,
        observer: None,
        backdrop_enabled: ctx.backdrop_enabled(),
        pending_backdrop: false,
        backdrop: None,
        interactive_tags: ctx.config.interactive_tags.clone(),
    };

    if variant.is_scrollable() {
        if let Some(controls) = &carousel.controls {
            carousel.bindings = controls
                .bindings()
                .filter(|(_, control)| matches!(control, Control::Indicator(_)))
                .collect();
        }
        carousel.observer = Some(observe(&carousel.slides, ctx.config.scrollable_threshold));
    } else {
        carousel.transition(doc, 0, Cause::Decorate)?;
        if total > 0 {
            carousel.autoplay = Some(Autoplay::start(now, ctx.config.autoplay_interval_ms));
        }
        if let Some(controls) = &carousel.controls {
            carousel.bindings = controls.bindings().collect();
            carousel.observer = Some(observe(&carousel.slides, ctx.config.viewport_threshold));
        }
        carousel.center_indicators(doc)?;
    }

    info!(
        carousel = %id,
        ?variant,
        slides = total,
        %locale,
        "carousel decorated"
    );
    Ok(carousel)
}

fn observe(slides: &[Slide], threshold: f64) -> IntersectionState<NodeId> {
    let mut observer = IntersectionState::new(threshold);
    for slide in slides {
        observer.observe(slide.node);
    }
    observer
}

/// Split hero-banner rows into picture rows and the auxiliary row.
///
/// Non-picture rows are detached and returned for removal once the slides
/// hold their copies. When several exist, the last one decides the panels.
fn partition_hero_rows(
    doc: &mut Document,
    rows: Vec<NodeId>,
) -> Result<(Vec<NodeId>, Option<AuxiliaryPanels>, Vec<NodeId>), DecorateError> {
    let mut pictures = Vec::with_capacity(rows.len());
    let mut discarded = Vec::new();
    let mut panels = (None, None);
    for row in rows {
        if doc.select_tag(row, "picture").next().is_some() {
            pictures.push(row);
            continue;
        }
        let social = nth_child_div(doc, row, 0);
        let legend = nth_child_div(doc, row, 1);
        if let Some(social) = social {
            doc.add_class(social, "social-cr-wrapper")?;
        }
        if let Some(legend) = legend {
            doc.add_class(legend, "slide-legend")?;
        }
        panels = (social, legend);
        doc.detach(row);
        discarded.push(row);
    }
    if discarded.len() > 1 {
        warn!(
            rows = discarded.len(),
            "several hero-banner auxiliary rows, keeping the last"
        );
    }
    let auxiliary = match panels {
        (Some(social), Some(legend)) => Some(AuxiliaryPanels { social, legend }),
        _ => None,
    };
    Ok((pictures, auxiliary, discarded))
}

/// First `div` under `scope`, in document order, that is the `position`-th
/// element child of its parent.
fn nth_child_div(doc: &Document, scope: NodeId, position: usize) -> Option<NodeId> {
    doc.select_tag(scope, "div").find(|&div| {
        doc.parent_of(div)
            .and_then(|parent| doc.element_children(parent).position(|c| c == div))
            == Some(position)
    })
}

/// Drop `div`s under `block` with no element children, no visible text and
/// no classes.
fn remove_empty_divs(doc: &mut Document, block: NodeId) {
    let empty: Vec<NodeId> = doc
        .select_tag(block, "div")
        .filter(|&div| {
            doc.element_children(div).next().is_none()
                && doc.text_content(div).trim().is_empty()
                && doc.element(div).is_some_and(|e| e.classes.is_empty())
        })
        .collect();
    for div in empty {
        doc.remove(div);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{CarouselEvent, Effect};
    use crate::config::CarouselConfig;
    use kurbo::Rect;
    use vitrine_dom::ElementBuilder;

    fn content_row(n: usize) -> ElementBuilder {
        ElementBuilder::new("div")
            .attr("data-aue-resource", &format!("urn:row:{n}"))
            .child(
                ElementBuilder::new("div").child(
                    ElementBuilder::new("picture").child(
                        ElementBuilder::new("img")
                            .attr("src", &format!("/media_{n}.png"))
                            .attr("alt", "Forest"),
                    ),
                ),
            )
            .child(
                ElementBuilder::new("div")
                    .child(
                        ElementBuilder::new("h2")
                            .attr("id", &format!("title-{n}"))
                            .text("Title"),
                    )
                    .child(ElementBuilder::new("p").text("Body"))
                    .child(
                        ElementBuilder::new("p")
                            .child(ElementBuilder::new("a").attr("href", &format!("/more-{n}"))),
                    ),
            )
    }

    fn aux_row(tag: &str) -> ElementBuilder {
        ElementBuilder::new("div")
            .child(
                ElementBuilder::new("div")
                    .child(ElementBuilder::new("a").attr("href", &format!("https://{tag}.example"))),
            )
            .child(ElementBuilder::new("div").text(tag))
    }

    /// `main > div.carousel.{classes}` with `rows` authored rows.
    fn page(doc: &mut Document, classes: &[&str], rows: usize) -> (NodeId, NodeId) {
        let mut block = ElementBuilder::new("div").class("carousel");
        for class in classes {
            block = block.class(class);
        }
        for n in 0..rows {
            block = block.child(content_row(n));
        }
        let main = ElementBuilder::new("main").child(block).build(doc);
        (main, doc.children_of(main)[0])
    }

    fn visible(doc: &Document, c: &Carousel) -> Vec<usize> {
        c.slides()
            .iter()
            .filter(|s| doc.attr(s.node, "aria-hidden") == Some("false"))
            .map(|s| s.index)
            .collect()
    }

    fn disabled(doc: &Document, c: &Carousel) -> Vec<usize> {
        c.controls()
            .map(|controls| {
                controls
                    .indicators
                    .iter()
                    .filter(|i| doc.attr(i.button, "disabled").is_some())
                    .map(|i| i.target)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn link_tabindex(doc: &Document, slide: &Slide) -> Option<String> {
        let link = doc.select_tag(slide.node, "a").next().unwrap();
        doc.attr(link, "tabindex").map(str::to_owned)
    }

    fn next_button(c: &Carousel) -> NodeId {
        c.controls().unwrap().buttons.unwrap().next
    }

    #[test]
    fn three_slides_next_wraps_around() {
        let mut doc = Document::new();
        let (_, block) = page(&mut doc, &[], 3);
        let mut ctx = PageContext::new("/en/projects");
        let mut c = decorate(&mut ctx, &mut doc, block, 0).unwrap();

        assert_eq!(c.active_index(), 0);
        assert_eq!(visible(&doc, &c), vec![0]);
        assert_eq!(link_tabindex(&doc, &c.slides()[0]), None);
        assert_eq!(link_tabindex(&doc, &c.slides()[1]).as_deref(), Some("-1"));
        assert_eq!(link_tabindex(&doc, &c.slides()[2]).as_deref(), Some("-1"));

        let next = next_button(&c);
        let mut seen = Vec::new();
        for _ in 0..3 {
            let effects = c.dispatch(&mut doc, CarouselEvent::Click(next), 100).unwrap();
            assert!(effects.is_empty());
            seen.push(c.active_index());
            assert_eq!(visible(&doc, &c), vec![c.active_index()]);
            assert_eq!(disabled(&doc, &c), vec![c.active_index()]);
        }
        assert_eq!(seen, vec![1, 2, 0]);
        assert_eq!(doc.attr(block, "data-active-slide"), Some("0"));
        assert_eq!(link_tabindex(&doc, &c.slides()[0]), None, "tab order restored");
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut doc = Document::new();
        let (_, block) = page(&mut doc, &[], 4);
        let mut ctx = PageContext::new("/");
        let mut c = decorate(&mut ctx, &mut doc, block, 0).unwrap();
        let prev = c.controls().unwrap().buttons.unwrap().previous;
        c.dispatch(&mut doc, CarouselEvent::Click(prev), 0).unwrap();
        assert_eq!(c.active_index(), 3);
        assert_eq!(c.go_to(&mut doc, 4).unwrap(), 0);
        assert_eq!(c.go_to(&mut doc, -1).unwrap(), 3);
    }

    #[test]
    fn indicator_clicks_and_disabled_marker() {
        let mut doc = Document::new();
        let (_, block) = page(&mut doc, &[], 3);
        let mut ctx = PageContext::new("/");
        let mut c = decorate(&mut ctx, &mut doc, block, 0).unwrap();
        let third = c.controls().unwrap().indicators[2];

        c.dispatch(&mut doc, CarouselEvent::Click(third.button), 0).unwrap();
        assert_eq!(c.active_index(), 2);
        let revision = c.active().revision();

        c.dispatch(&mut doc, CarouselEvent::Click(third.button), 0).unwrap();
        assert_eq!(c.active().revision(), revision, "active indicator ignores clicks");

        c.dispatch(&mut doc, CarouselEvent::Click(third.item), 0).unwrap();
        c.dispatch(&mut doc, CarouselEvent::Click(c.slides()[0].node), 0).unwrap();
        assert_eq!(c.active().revision(), revision, "unbound nodes are ignored");
    }

    #[test]
    fn single_slide_is_static_but_autoplays_in_place() {
        let mut doc = Document::new();
        let (_, block) = page(&mut doc, &[], 1);
        let mut ctx = PageContext::new("/");
        let mut c = decorate(&mut ctx, &mut doc, block, 0).unwrap();

        assert!(c.controls().is_none());
        assert_eq!(doc.select_tag(block, "nav").count(), 0);
        assert_eq!(doc.select_tag(block, "button").count(), 0);
        assert!(c.viewport_threshold().is_none());
        assert_eq!(visible(&doc, &c), vec![0]);

        let start = c.active().revision();
        for (now, ticks) in [(3_999, 0), (4_000, 1), (8_000, 2)] {
            c.dispatch(&mut doc, CarouselEvent::Tick, now).unwrap();
            assert_eq!(c.active_index(), 0);
            assert_eq!(c.active().revision(), start + ticks);
        }
    }

    #[test]
    fn autoplay_ignores_manual_navigation_until_stopped() {
        let mut doc = Document::new();
        let (_, block) = page(&mut doc, &[], 3);
        let mut ctx = PageContext::new("/");
        let mut c = decorate(&mut ctx, &mut doc, block, 1_000).unwrap();
        assert_eq!(c.autoplay().and_then(Autoplay::next_due), Some(5_000));

        c.next(&mut doc).unwrap();
        assert_eq!(c.autoplay().and_then(Autoplay::next_due), Some(5_000));
        assert!(c.tick(&mut doc, 5_000).unwrap());
        assert_eq!(c.active_index(), 2);

        assert!(c.stop());
        assert!(c.autoplay().is_none());
        assert!(!c.tick(&mut doc, 9_000).unwrap());
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn scrollable_tracks_viewport() {
        let mut doc = Document::new();
        let (_, block) = page(&mut doc, &["scrollable"], 3);
        let mut ctx = PageContext::new("/");
        let mut c = decorate(&mut ctx, &mut doc, block, 0).unwrap();
        assert!(c.autoplay().is_none());
        assert_eq!(c.viewport_threshold(), Some(0.6));

        let slide = c.slides()[2].node;
        c.dispatch(&mut doc, CarouselEvent::Intersection { slide, ratio: 0.5 }, 0)
            .unwrap();
        assert!(!doc.has_class(slide, "active"), "below threshold");

        c.dispatch(&mut doc, CarouselEvent::Intersection { slide, ratio: 0.6 }, 0)
            .unwrap();
        let active: Vec<usize> = c
            .slides()
            .iter()
            .filter(|s| doc.has_class(s.node, "active"))
            .map(|s| s.index)
            .collect();
        assert_eq!(active, vec![2]);
        assert_eq!(disabled(&doc, &c), vec![2]);
        assert_eq!(c.active_index(), 2);
        assert!(!c.backdrop_pending());

        let buttons = c.controls().unwrap().buttons.unwrap();
        assert!(c.binding(buttons.next).is_none(), "no prev/next in scroll mode");
        let first = c.controls().unwrap().indicators[0].button;
        let effects = c.dispatch(&mut doc, CarouselEvent::Click(first), 0).unwrap();
        assert_eq!(
            effects.as_slice(),
            &[Effect::ScrollIntoView {
                node: c.slides()[0].node
            }]
        );
        assert_eq!(c.active_index(), 2, "scrolling, not the click, moves state");
    }

    #[test]
    fn plain_viewport_sync_keeps_invariants() {
        let mut doc = Document::new();
        let (_, block) = page(&mut doc, &[], 3);
        let mut ctx = PageContext::new("/");
        let mut c = decorate(&mut ctx, &mut doc, block, 0).unwrap();
        assert_eq!(c.viewport_threshold(), Some(0.5));

        let second = c.slides()[1].node;
        assert!(c.report_intersection(&mut doc, second, 0.9).unwrap());
        assert_eq!(visible(&doc, &c), vec![1]);
        assert_eq!(disabled(&doc, &c), vec![1]);
        assert!(!doc.has_class(second, "active"));

        c.next(&mut doc).unwrap();
        assert_eq!(c.active_index(), 2, "click path continues from the synced slide");
    }

    #[test]
    fn indicator_centering_is_idempotent() {
        let mut doc = Document::new();
        let (_, block) = page(&mut doc, &[], 3);
        let mut ctx = PageContext::new("/");
        let mut c = decorate(&mut ctx, &mut doc, block, 0).unwrap();
        let list = c.controls().unwrap().list;
        assert_eq!(doc.style(list, "top"), None, "unmeasured at decoration");

        doc.set_layout(c.container(), Rect::new(0.0, 0.0, 800.0, 400.0));
        doc.set_layout(list, Rect::new(0.0, 0.0, 20.0, 100.0));
        assert_eq!(c.center_indicators(&mut doc).unwrap(), Some(150.0));
        assert_eq!(c.center_indicators(&mut doc).unwrap(), Some(150.0));
        assert_eq!(doc.style(list, "top"), Some("150px"));
        assert_eq!(doc.style(list, "transform"), Some("none"));

        doc.set_layout(c.container(), Rect::new(0.0, 0.0, 400.0, 301.0));
        c.dispatch(&mut doc, CarouselEvent::Resize, 0).unwrap();
        assert_eq!(doc.style(list, "top"), Some("100.5px"));
    }

    #[test]
    fn backdrop_replaces_previous_one() {
        let mut doc = Document::new();
        let (main, block) = page(&mut doc, &[], 2);
        doc.set_layout(block, Rect::new(0.0, 100.0, 800.0, 500.0));
        let mut ctx = PageContext::new("/").with_template("project-article");
        let mut c = decorate(&mut ctx, &mut doc, block, 0).unwrap();
        assert!(c.backdrop_pending(), "first slide queues a backdrop");

        c.dispatch(&mut doc, CarouselEvent::AfterLayout, 0).unwrap();
        let first = c.backdrop().unwrap();
        assert_eq!(doc.children_of(main), &[first, block]);
        assert_eq!(doc.style(first, "top"), Some("300px"));
        assert_eq!(doc.style(first, "height"), Some("400px"));
        assert_eq!(doc.style(main, "position"), Some("relative"));

        assert_eq!(c.after_layout(&mut doc).unwrap(), None, "nothing pending");

        c.next(&mut doc).unwrap();
        let second = c.after_layout(&mut doc).unwrap().unwrap();
        assert!(!doc.is_alive(first));
        assert_eq!(doc.select_class(main, BACKDROP).count(), 1);
        assert_eq!(doc.children_of(main), &[second, block]);

        c.report_intersection(&mut doc, c.slides()[0].node, 1.0).unwrap();
        assert!(!c.backdrop_pending(), "viewport sync never queues a backdrop");
    }

    const BACKDROP: &str = crate::carousel::BACKDROP_CLASS;

    #[test]
    fn backdrop_keeps_positioned_parent_and_needs_template() {
        let mut doc = Document::new();
        let (main, block) = page(&mut doc, &[], 2);
        doc.set_style(main, "position", "absolute").unwrap();
        doc.set_layout(block, Rect::new(0.0, 0.0, 100.0, 50.0));
        let mut ctx = PageContext::new("/").with_template("project-article");
        let mut c = decorate(&mut ctx, &mut doc, block, 0).unwrap();
        c.after_layout(&mut doc).unwrap().unwrap();
        assert_eq!(doc.style(main, "position"), Some("absolute"));

        let mut doc = Document::new();
        let (_, block) = page(&mut doc, &[], 2);
        let mut ctx = PageContext::new("/").with_template("news");
        let mut c = decorate(&mut ctx, &mut doc, block, 0).unwrap();
        assert!(!c.backdrop_pending());
        assert_eq!(c.after_layout(&mut doc).unwrap(), None);
    }

    #[test]
    fn ids_are_unique_per_page() {
        let mut doc = Document::new();
        let (_, first) = page(&mut doc, &[], 2);
        let (_, second) = page(&mut doc, &[], 2);
        let mut ctx = PageContext::new("/");
        let a = decorate(&mut ctx, &mut doc, first, 0).unwrap();
        let b = decorate(&mut ctx, &mut doc, second, 0).unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(doc.attr(first, "id"), Some("carousel-1"));
        assert_eq!(doc.attr(second, "id"), Some("carousel-2"));
        assert_eq!(b.slides()[1].id, "carousel-2-slide-1");
    }

    #[test]
    fn structure_and_cleanup() {
        let mut doc = Document::new();
        let (_, block) = page(&mut doc, &[], 2);
        let marker = ElementBuilder::new("div").class("keep").build(&mut doc);
        doc.append_child(block, marker).unwrap();
        let mut ctx = PageContext::new("/");
        let c = decorate(&mut ctx, &mut doc, block, 0).unwrap();

        assert_eq!(doc.children_of(block), &[c.container(), marker]);
        assert_eq!(doc.attr(block, "role"), Some("region"));
        assert_eq!(doc.attr(block, "aria-roledescription"), Some("Carousel"));
        let container_children = doc.children_of(c.container());
        let controls = c.controls().unwrap();
        assert_eq!(
            container_children,
            &[controls.nav, controls.buttons.unwrap().wrapper, c.slides_list()]
        );
        assert_eq!(doc.attr(c.slides()[1].node, "aria-labelledby"), Some("title-1"));
        assert_eq!(
            doc.attr(c.slides()[1].node, "data-aue-resource"),
            Some("urn:row:1")
        );
    }

    #[test]
    fn vertical_has_no_buttons() {
        let mut doc = Document::new();
        let (_, block) = page(&mut doc, &["vertical"], 3);
        let mut ctx = PageContext::new("/");
        let c = decorate(&mut ctx, &mut doc, block, 0).unwrap();
        assert!(doc.has_class(block, "carousel-vertical"));
        assert!(c.controls().unwrap().buttons.is_none());
        assert_eq!(c.controls().unwrap().indicators.len(), 3);
    }

    #[test]
    fn hero_banner_panels_and_logos() {
        let mut doc = Document::new();
        let block = ElementBuilder::new("div")
            .class("carousel")
            .class("hero-banner")
            .child(content_row(0))
            .child(aux_row("first"))
            .child(content_row(1))
            .child(aux_row("last"))
            .build(&mut doc);
        let mut ctx = PageContext::new("/fr/accueil");
        let c = decorate(&mut ctx, &mut doc, block, 0).unwrap();

        assert_eq!(c.slides().len(), 2);
        assert_eq!(c.controls().unwrap().indicators.len(), 2);
        let aux = c.slides()[0].auxiliary.unwrap();
        assert!(doc.has_class(aux.social, "social-cr-wrapper"));
        assert!(doc.has_class(aux.legend, "slide-legend"));
        assert_eq!(doc.text_content(aux.legend), "last", "last auxiliary row wins");
        assert_eq!(doc.children_of(block), &[c.container()], "auxiliary rows removed");

        let logo = c.slides()[1].logo.unwrap();
        let img = doc.children_of(logo)[0];
        assert_eq!(
            doc.attr(img, "src"),
            Some("/icons/carousel_logo_fr_biencommun.svg")
        );
        let picture_img = doc.select_tag(c.slides()[0].panels[0], "img").next().unwrap();
        assert_eq!(
            doc.attr(picture_img, "src"),
            Some("/media_0.png?width=750&format=png&optimize=medium")
        );
    }

    #[test]
    fn custom_config_drives_timing_and_thresholds() {
        let config = CarouselConfig::from_json(
            r#"{ "autoplayIntervalMs": 1000, "viewportThreshold": 0.25 }"#,
        )
        .unwrap();
        let mut doc = Document::new();
        let (_, block) = page(&mut doc, &[], 2);
        let mut ctx = PageContext::new("/").with_config(config);
        let mut c = decorate(&mut ctx, &mut doc, block, 0).unwrap();
        assert_eq!(c.viewport_threshold(), Some(0.25));
        assert!(c.tick(&mut doc, 1_000).unwrap());
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn rejects_non_elements() {
        let mut doc = Document::new();
        let text = doc.create_text("carousel");
        let mut ctx = PageContext::new("/");
        let err = decorate(&mut ctx, &mut doc, text, 0).unwrap_err();
        assert_eq!(err, DecorateError::NotABlock(text));
    }

    #[test]
    fn empty_block_decorates_without_slides() {
        let mut doc = Document::new();
        let (_, block) = page(&mut doc, &[], 0);
        let mut ctx = PageContext::new("/");
        let mut c = decorate(&mut ctx, &mut doc, block, 0).unwrap();
        assert!(c.slides().is_empty());
        assert!(c.autoplay().is_none());
        assert_eq!(c.next(&mut doc).unwrap(), 0);
    }

    #[test]
    fn backdrop_waits_for_a_measured_block() {
        let mut doc = Document::new();
        let (main, block) = page(&mut doc, &[], 2);
        let mut ctx = PageContext::new("/").with_template("project-article");
        let mut c = decorate(&mut ctx, &mut doc, block, 0).unwrap();
        assert!(c.backdrop_pending());

        assert_eq!(c.after_layout(&mut doc).unwrap(), None);
        assert_eq!(doc.children_of(main), &[block], "nothing inserted");
        assert_eq!(doc.select_class(main, BACKDROP).count(), 0);
        assert_eq!(doc.style(main, "position"), None);
        assert_eq!(c.center_indicators(&mut doc).unwrap(), None);
        assert_eq!(doc.style(c.controls().unwrap().list, "top"), None);
    }

    #[test]
    fn hero_row_without_legend_attaches_no_panels() {
        let mut doc = Document::new();
        let block = ElementBuilder::new("div")
            .class("carousel")
            .class("hero-banner")
            .child(content_row(0))
            .child(content_row(1))
            .child(
                ElementBuilder::new("div").child(
                    ElementBuilder::new("div")
                        .child(ElementBuilder::new("a").attr("href", "https://social.example")),
                ),
            )
            .build(&mut doc);
        let mut ctx = PageContext::new("/");
        let c = decorate(&mut ctx, &mut doc, block, 0).unwrap();

        assert_eq!(c.slides().len(), 2, "the social-only row is not a slide");
        assert!(c.slides().iter().all(|s| s.auxiliary.is_none()));
        assert_eq!(doc.select_class(block, "social-cr-wrapper").count(), 0);
        assert_eq!(doc.select_class(block, "direction-icon-section").count(), 0);
        assert_eq!(doc.children_of(block), &[c.container()], "auxiliary row removed");
    }
}
