// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decorate a localized hero-banner carousel.
//!
//! Labels are loaded from a placeholder sheet before decoration, the page
//! path selects the French logo set, and the non-picture row becomes the
//! social and legend panels copied onto every slide.
//!
//! Run:
//! - `cargo run -p vitrine_demos --example hero_banner`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitrine_carousel::{DecorateError, PageContext, SheetSource, decorate, load_placeholders};
use vitrine_dom::{Document, ElementBuilder, outer_html};

const SHEET: &str = r#"{
    "fr": { "data": [
        { "Key": "Carousel", "Text": "Carrousel" },
        { "Key": "Carousel Slide Controls", "Text": "Contrôles du carrousel" },
        { "Key": "Previous Slide", "Text": "Diapositive précédente" },
        { "Key": "Next Slide", "Text": "Diapositive suivante" },
        { "Key": "Show Slide", "Text": "Afficher la diapositive" },
        { "Key": "of", "Text": "sur" }
    ]}
}"#;

fn picture_row(src: &str, title: &str) -> ElementBuilder {
    ElementBuilder::new("div")
        .child(
            ElementBuilder::new("div").child(
                ElementBuilder::new("picture")
                    .child(ElementBuilder::new("img").attr("src", src).attr("alt", title)),
            ),
        )
        .child(
            ElementBuilder::new("div")
                .child(ElementBuilder::new("h1").attr("id", &title.to_lowercase()).text(title))
                .child(ElementBuilder::new("p").text("Depuis 1990"))
                .child(ElementBuilder::new("p").child(ElementBuilder::new("a").attr("href", "#suite"))),
        )
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), DecorateError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrine_carousel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut ctx = PageContext::new("/fr/accueil");
    let locale = ctx.locale();
    let placeholders = load_placeholders(&SheetSource::new(SHEET), locale).await;
    ctx = ctx.with_placeholders(placeholders);

    let mut doc = Document::new();
    let block = ElementBuilder::new("div")
        .class("carousel")
        .class("hero-banner")
        .child(picture_row("https://cdn.example/media_fondations.jpg?v=2", "Fondations"))
        .child(picture_row("/media_biencommun.png", "Bien commun"))
        .child(
            ElementBuilder::new("div")
                .child(
                    ElementBuilder::new("div")
                        .child(ElementBuilder::new("a").attr("href", "https://social.example/vitrine")),
                )
                .child(ElementBuilder::new("div").text("Photo : archives")),
        )
        .build(&mut doc);

    let carousel = decorate(&mut ctx, &mut doc, block, 0)?;
    println!(
        "carousel {} ({:?}) with {} slides",
        carousel.id(),
        carousel.variant(),
        carousel.slides().len()
    );
    println!("{}", outer_html(&doc, block));
    Ok(())
}
