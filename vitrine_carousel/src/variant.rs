// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vitrine_dom::{Document, NodeId};

bitflags::bitflags! {
    /// Authoring variants of a carousel block, read from its class list.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Variant: u8 {
        /// Native scroll-snap; viewport intersection drives the active slide.
        const SCROLLABLE  = 0b0000_0001;
        /// Vertical stack without previous/next buttons.
        const VERTICAL    = 0b0000_0010;
        /// Hero banner with logo overlays and shared social/legend panels.
        const HERO_BANNER = 0b0000_0100;
    }
}

impl Variant {
    /// Classify a block from its classes.
    ///
    /// `vertical` and `carousel-vertical` both select [`Variant::VERTICAL`].
    pub fn classify(doc: &Document, block: NodeId) -> Self {
        let mut v = Self::empty();
        v.set(Self::SCROLLABLE, doc.has_class(block, "scrollable"));
        v.set(
            Self::VERTICAL,
            doc.has_class(block, "vertical") || doc.has_class(block, "carousel-vertical"),
        );
        v.set(Self::HERO_BANNER, doc.has_class(block, "hero-banner"));
        v
    }

    /// Scroll-snap mode.
    pub fn is_scrollable(self) -> bool {
        self.contains(Self::SCROLLABLE)
    }

    /// Vertical mode.
    pub fn is_vertical(self) -> bool {
        self.contains(Self::VERTICAL)
    }

    /// Hero-banner mode.
    pub fn is_hero_banner(self) -> bool {
        self.contains(Self::HERO_BANNER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_dom::ElementBuilder;

    #[test]
    fn classify_reads_classes() {
        let mut doc = Document::new();
        let plain = ElementBuilder::new("div").class("carousel").build(&mut doc);
        assert_eq!(Variant::classify(&doc, plain), Variant::empty());

        let block = ElementBuilder::new("div")
            .class("carousel")
            .class("hero-banner")
            .class("carousel-vertical")
            .build(&mut doc);
        let v = Variant::classify(&doc, block);
        assert!(v.is_hero_banner());
        assert!(v.is_vertical());
        assert!(!v.is_scrollable());
    }
}
