// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-scoped decoration context.

use core::fmt;

use crate::config::CarouselConfig;
use crate::locale::{Locale, LocaleResolver};
use crate::placeholders::Placeholders;

/// Identifier of a decorated carousel, unique within one [`PageContext`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarouselId(pub u64);

impl fmt::Display for CarouselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything decoration needs to know about the page it runs on.
///
/// One context lives as long as one loaded page. It hands out carousel ids in
/// increasing order starting at 1 and never reuses them.
#[derive(Clone, Debug)]
pub struct PageContext {
    next_id: u64,
    /// Locale of the page.
    pub locale: LocaleResolver,
    /// `template` metadata of the page, if any.
    pub template: Option<String>,
    /// Localized labels.
    pub placeholders: Placeholders,
    /// Tuning.
    pub config: CarouselConfig,
}

impl PageContext {
    /// Context for the page at `path`, with default labels and configuration.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            next_id: 1,
            locale: LocaleResolver::new(path),
            template: None,
            placeholders: Placeholders::default(),
            config: CarouselConfig::default(),
        }
    }

    /// Set the page template.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Set the labels.
    #[must_use]
    pub fn with_placeholders(mut self, placeholders: Placeholders) -> Self {
        self.placeholders = placeholders;
        self
    }

    /// Set the configuration.
    #[must_use]
    pub fn with_config(mut self, config: CarouselConfig) -> Self {
        self.config = config;
        self
    }

    /// Allocate the next carousel id.
    pub fn next_carousel_id(&mut self) -> CarouselId {
        let id = CarouselId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Current locale.
    pub fn locale(&mut self) -> Locale {
        self.locale.resolve()
    }

    /// Whether transitions should lay a decorative backdrop behind carousels.
    pub fn backdrop_enabled(&self) -> bool {
        match (&self.template, &self.config.backdrop_template) {
            (Some(page), Some(wanted)) => page == wanted,
            _ => false,
        }
    }
}
