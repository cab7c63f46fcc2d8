// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel tuning knobs.

use serde::Deserialize;

use crate::error::ConfigError;

/// Tuning for carousel decoration and runtime behavior.
///
/// Every field has a default matching the published site, so an empty JSON
/// object is a valid configuration:
///
/// ```
/// use vitrine_carousel::CarouselConfig;
///
/// let cfg = CarouselConfig::from_json(r#"{ "autoplayIntervalMs": 6000 }"#).unwrap();
/// assert_eq!(cfg.autoplay_interval_ms, 6000);
/// assert_eq!(cfg.scrollable_threshold, 0.6);
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Delay between autoplay advances, in milliseconds.
    pub autoplay_interval_ms: u64,
    /// Visible fraction at which a slide becomes active in plain mode.
    pub viewport_threshold: f64,
    /// Visible fraction at which a slide becomes active in scrollable mode.
    pub scrollable_threshold: f64,
    /// Page template that enables the decorative backdrop, if any.
    pub backdrop_template: Option<String>,
    /// Hero-banner logos for English pages, by slide index.
    pub english_logos: Vec<String>,
    /// Hero-banner logos for every other locale, by slide index.
    pub localized_logos: Vec<String>,
    /// Tags taken out of the tab order inside inactive slides.
    pub interactive_tags: Vec<String>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 4_000,
            viewport_threshold: 0.5,
            scrollable_threshold: 0.6,
            backdrop_template: Some("project-article".to_owned()),
            english_logos: vec![
                "/icons/carousel_logo_fondations.svg".to_owned(),
                "/icons/carousel_logo_biencommun.svg".to_owned(),
                "/icons/carousel_logo_arbres.svg".to_owned(),
            ],
            localized_logos: vec![
                "/icons/carousel_logo_fr_fondations.svg".to_owned(),
                "/icons/carousel_logo_fr_biencommun.svg".to_owned(),
                "/icons/carousel_logo_fr_arbres.svg".to_owned(),
            ],
            interactive_tags: ["a", "button", "input", "select", "textarea"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

impl CarouselConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.autoplay_interval_ms == 0 {
            return Err(ConfigError::ZeroAutoplayInterval);
        }
        for t in [self.viewport_threshold, self.scrollable_threshold] {
            if !(0.0..=1.0).contains(&t) {
                return Err(ConfigError::InvalidThreshold(t));
            }
        }
        Ok(())
    }

    /// Logo list for a locale.
    pub fn logos_for(&self, locale: crate::Locale) -> &[String] {
        match locale {
            crate::Locale::En => &self.english_logos,
            crate::Locale::Fr => &self.localized_logos,
        }
    }
}
