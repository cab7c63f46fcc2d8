// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Carousel: headless decoration of authored carousel blocks.
//!
//! An authored carousel is a block element whose `div` rows each hold one
//! slide's columns: an image column followed by content columns. Decoration
//! rebuilds it into an accessible carousel (slide list, indicator navigation,
//! previous/next buttons) inside a [`vitrine_dom::Document`], then hands back
//! a [`Carousel`] that owns the runtime state.
//!
//! - Variants are read from the block's classes: `scrollable` (scroll-snap,
//!   viewport-driven), `vertical` (no previous/next buttons) and
//!   `hero-banner` (optimized imagery, logo overlays, shared social and legend
//!   panels). See [`Variant`].
//! - Exactly one slide is active. Every other slide is hidden from assistive
//!   technology and its interactive content leaves the tab order; the
//!   indicator for the active slide is disabled as a position marker.
//! - Runtime input is a stream of [`CarouselEvent`]s fed to
//!   [`Carousel::dispatch`]. The library never reads a clock or measures
//!   layout; the host supplies timestamps and records layout boxes on the
//!   document.
//!
//! ## Example
//!
//! ```
//! use vitrine_carousel::{decorate, CarouselEvent, PageContext};
//! use vitrine_dom::{Document, ElementBuilder};
//!
//! let mut doc = Document::new();
//! let row = |title: &str| {
//!     ElementBuilder::new("div")
//!         .child(ElementBuilder::new("div").child(ElementBuilder::new("picture")))
//!         .child(ElementBuilder::new("div").child(ElementBuilder::new("h2").text(title)))
//! };
//! let block = ElementBuilder::new("div")
//!     .class("carousel")
//!     .child(row("One"))
//!     .child(row("Two"))
//!     .build(&mut doc);
//!
//! let mut ctx = PageContext::new("/en/index");
//! let mut carousel = decorate(&mut ctx, &mut doc, block, 0).unwrap();
//! assert_eq!(carousel.active_index(), 0);
//!
//! let next = carousel.controls().unwrap().buttons.unwrap().next;
//! carousel.dispatch(&mut doc, CarouselEvent::Click(next), 10).unwrap();
//! assert_eq!(carousel.active_index(), 1);
//!
//! // Autoplay advances every four seconds, wrapping around.
//! carousel.dispatch(&mut doc, CarouselEvent::Tick, 4_000).unwrap();
//! assert_eq!(carousel.active_index(), 0);
//! ```
//!
//! ## Labels and configuration
//!
//! User-facing strings come from [`Placeholders`], loaded per locale with
//! [`load_placeholders`] and falling back to English. Timing, thresholds and
//! logo assets live in [`CarouselConfig`]. Both are carried by the
//! [`PageContext`], which also hands out carousel ids.

mod autoplay;
mod carousel;
mod config;
mod context;
mod controls;
mod decorate;
mod error;
mod locale;
mod picture;
mod placeholders;
mod slide;
mod state;
mod variant;

pub use autoplay::Autoplay;
pub use carousel::{BACKDROP_CLASS, Carousel, CarouselEvent, Effect, Effects};
pub use config::CarouselConfig;
pub use context::{CarouselId, PageContext};
pub use controls::{Control, Controls, Indicator, NavButtons};
pub use decorate::{decorate, decorate_with};
pub use error::{ConfigError, DecorateError, PlaceholderError};
pub use locale::{Locale, LocaleResolver};
pub use picture::{Breakpoint, ImageOptimizer, PictureOptimizer};
pub use placeholders::{PlaceholderSource, Placeholders, SheetSource, load_placeholders, to_camel_case};
pub use slide::{AuxiliaryPanels, PanelRole, Slide, SlideAuxiliary};
pub use state::ActiveSlide;
pub use variant::Variant;
