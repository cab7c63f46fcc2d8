// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decorate a plain three-slide carousel and drive it with host events.
//!
//! Shows the full host loop: decoration, a click on "next", autoplay ticks,
//! a viewport report, layout-dependent indicator centering and the backdrop
//! placed after layout on `project-article` pages.
//!
//! Run:
//! - `RUST_LOG=vitrine_carousel=debug cargo run -p vitrine_demos --example carousel_walkthrough`

use kurbo::Rect;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitrine_carousel::{CarouselEvent, DecorateError, PageContext, decorate};
use vitrine_dom::{Document, ElementBuilder, NodeId, outer_html};

fn row(title: &str, link: &str) -> ElementBuilder {
    ElementBuilder::new("div")
        .attr("data-aue-resource", &format!("urn:demo:{title}"))
        .child(
            ElementBuilder::new("div").child(
                ElementBuilder::new("picture")
                    .child(ElementBuilder::new("img").attr("src", "/media_demo.jpg").attr("alt", title)),
            ),
        )
        .child(
            ElementBuilder::new("div")
                .child(ElementBuilder::new("h2").attr("id", &title.to_lowercase()).text(title))
                .child(ElementBuilder::new("p").child(ElementBuilder::new("a").attr("href", link).text("Read more"))),
        )
}

fn summary(doc: &Document, slides: &[NodeId]) -> String {
    slides
        .iter()
        .map(|&s| match doc.attr(s, "aria-hidden") {
            Some("false") => "[x]",
            _ => "[ ]",
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), DecorateError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrine_carousel=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut doc = Document::new();
    let section = ElementBuilder::new("section")
        .child(
            ElementBuilder::new("div")
                .class("carousel")
                .child(row("Forests", "/en/forests"))
                .child(row("Rivers", "/en/rivers"))
                .child(row("Meadows", "/en/meadows")),
        )
        .build(&mut doc);
    let block = doc.children_of(section)[0];

    let mut ctx = PageContext::new("/en/projects/green").with_template("project-article");
    let mut carousel = decorate(&mut ctx, &mut doc, block, 0)?;
    let slides: Vec<NodeId> = carousel.slides().iter().map(|s| s.node).collect();
    println!("decorated:           {}", summary(&doc, &slides));

    // The host measured the page once decoration settled.
    doc.set_layout(block, Rect::new(0.0, 120.0, 960.0, 600.0));
    doc.set_layout(carousel.container(), Rect::new(0.0, 0.0, 960.0, 480.0));
    if let Some(controls) = carousel.controls() {
        doc.set_layout(controls.list, Rect::new(0.0, 0.0, 24.0, 96.0));
    }
    carousel.dispatch(&mut doc, CarouselEvent::Resize, 0)?;
    carousel.dispatch(&mut doc, CarouselEvent::AfterLayout, 0)?;

    if let Some(next) = carousel.controls().and_then(|c| c.buttons).map(|b| b.next) {
        carousel.dispatch(&mut doc, CarouselEvent::Click(next), 1_500)?;
        println!("after next:          {}", summary(&doc, &slides));
    }

    for now in [4_000, 8_000] {
        carousel.dispatch(&mut doc, CarouselEvent::Tick, now)?;
        println!("autoplay @ {now:>5} ms: {}", summary(&doc, &slides));
    }

    carousel.dispatch(
        &mut doc,
        CarouselEvent::Intersection {
            slide: slides[1],
            ratio: 0.8,
        },
        9_000,
    )?;
    println!("viewport sync:       {}", summary(&doc, &slides));

    carousel.dispatch(&mut doc, CarouselEvent::AfterLayout, 9_000)?;
    carousel.stop();
    println!("revision {} after stop", carousel.active().revision());
    println!();
    println!("{}", outer_html(&doc, section));
    Ok(())
}
