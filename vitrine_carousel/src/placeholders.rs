// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Localized label strings.
//!
//! Labels come from a spreadsheet-backed JSON document keyed by locale. Every
//! label the carousel uses has an English fallback, so a missing sheet, a
//! missing key, or an empty value never prevents decoration.

use core::future::Future;

use hashbrown::HashMap;
use serde::Deserialize;
use tracing::warn;

use crate::error::PlaceholderError;
use crate::locale::Locale;

/// Key/value label store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Placeholders {
    entries: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct Sheet {
    #[serde(default)]
    data: Vec<Row>,
}

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(rename = "Key", default)]
    key: Option<String>,
    #[serde(rename = "Text", default)]
    text: Option<String>,
}

impl Placeholders {
    /// An empty store; every accessor returns its fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a label.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Raw lookup. Empty values read as missing.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Lookup with a fallback.
    pub fn get_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.get(key).unwrap_or(fallback)
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no label is present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Role description of the carousel region.
    pub fn carousel(&self) -> &str {
        self.get_or("carousel", "Carousel")
    }

    /// Label of the indicator navigation landmark.
    pub fn carousel_slide_controls(&self) -> &str {
        self.get_or("carouselSlideControls", "Carousel Slide Controls")
    }

    /// Label of the previous button.
    pub fn previous_slide(&self) -> &str {
        self.get_or("previousSlide", "Previous Slide")
    }

    /// Label of the next button.
    pub fn next_slide(&self) -> &str {
        self.get_or("nextSlide", "Next Slide")
    }

    /// Label of one indicator: `Show Slide {index + 1} of {total}`.
    pub fn show_slide_label(&self, index: usize, total: usize) -> String {
        format!(
            "{} {} {} {}",
            self.get_or("showSlide", "Show Slide"),
            index + 1,
            self.get_or("of", "of"),
            total
        )
    }

    /// Parse a placeholder document.
    ///
    /// Accepts either a multi-sheet document (`{"en": {"data": [...]}, ...}`),
    /// from which the sheet named after `locale` is read, or a single sheet
    /// (`{"data": [...]}`). Keys are camel-cased; rows without a key are
    /// skipped.
    pub fn from_sheet_json(json: &str, locale: Locale) -> Result<Self, PlaceholderError> {
        let doc: serde_json::Value = serde_json::from_str(json)?;
        let sheet = doc
            .get(locale.code())
            .filter(|sheet| sheet.get("data").is_some())
            .cloned()
            .unwrap_or(doc);
        let sheet: Sheet = serde_json::from_value(sheet)?;
        let mut out = Self::new();
        for row in sheet.data {
            if let Some(key) = row.key.filter(|k| !k.is_empty()) {
                out.insert(to_camel_case(&key), row.text.unwrap_or_default());
            }
        }
        Ok(out)
    }
}

/// Camel-case a sheet key: lowercase, runs of non-alphanumerics become a single
/// `-`, leading and trailing `-` are trimmed, then each `-` followed by a
/// letter is folded into the uppercased letter.
///
/// ```
/// assert_eq!(vitrine_carousel::to_camel_case("Carousel Slide Controls"), "carouselSlideControls");
/// assert_eq!(vitrine_carousel::to_camel_case("--Show slide!"), "showSlide");
/// ```
pub fn to_camel_case(name: &str) -> String {
    let mut class_name = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            class_name.push(ch.to_ascii_lowercase());
        } else if !class_name.ends_with('-') {
            class_name.push('-');
        }
    }
    let class_name = class_name.trim_matches('-');

    let mut out = String::with_capacity(class_name.len());
    let mut upper = false;
    for ch in class_name.chars() {
        if ch == '-' {
            upper = true;
        } else if upper {
            if ch.is_ascii_lowercase() {
                out.push(ch.to_ascii_uppercase());
            } else {
                out.push('-');
                out.push(ch);
            }
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Something that can deliver the placeholder sheet for a locale.
pub trait PlaceholderSource {
    /// Fetch the labels for `locale`.
    fn fetch(
        &self,
        locale: Locale,
    ) -> impl Future<Output = Result<Placeholders, PlaceholderError>>;
}

/// A source backed by an in-memory placeholder document.
#[derive(Clone, Debug)]
pub struct SheetSource {
    body: String,
}

impl SheetSource {
    /// Wrap a placeholder document body.
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl PlaceholderSource for SheetSource {
    async fn fetch(&self, locale: Locale) -> Result<Placeholders, PlaceholderError> {
        Placeholders::from_sheet_json(&self.body, locale)
    }
}

/// Fetch placeholders, falling back to the built-in defaults on any error.
pub async fn load_placeholders<S: PlaceholderSource>(source: &S, locale: Locale) -> Placeholders {
    match source.fetch(locale).await {
        Ok(placeholders) => placeholders,
        Err(err) => {
            warn!(%err, %locale, "using default carousel labels");
            Placeholders::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEETS: &str = r#"{
        "en": { "data": [
            { "Key": "Show Slide", "Text": "Show Slide" },
            { "Key": "of", "Text": "of" }
        ]},
        "fr": { "data": [
            { "Key": "Carousel", "Text": "Carrousel" },
            { "Key": "Show Slide", "Text": "Afficher la diapositive" },
            { "Key": "of", "Text": "sur" },
            { "Key": "Previous Slide", "Text": "" },
            { "Text": "orphan" }
        ]}
    }"#;

    struct FailingSource;

    impl PlaceholderSource for FailingSource {
        async fn fetch(&self, _locale: Locale) -> Result<Placeholders, PlaceholderError> {
            Err(PlaceholderError::Fetch("HTTP 404".into()))
        }
    }

    #[test]
    fn defaults_are_english() {
        let p = Placeholders::new();
        assert_eq!(p.carousel(), "Carousel");
        assert_eq!(p.carousel_slide_controls(), "Carousel Slide Controls");
        assert_eq!(p.previous_slide(), "Previous Slide");
        assert_eq!(p.next_slide(), "Next Slide");
        assert_eq!(p.show_slide_label(0, 3), "Show Slide 1 of 3");
    }

    #[test]
    fn locale_sheet_is_selected() {
        let p = Placeholders::from_sheet_json(SHEETS, Locale::Fr).unwrap();
        assert_eq!(p.carousel(), "Carrousel");
        assert_eq!(p.show_slide_label(1, 4), "Afficher la diapositive 2 sur 4");
        assert_eq!(p.previous_slide(), "Previous Slide", "empty text falls back");
        assert_eq!(p.len(), 4, "rows without a key are skipped");
    }

    #[test]
    fn single_sheet_form() {
        let p = Placeholders::from_sheet_json(
            r#"{ "data": [{ "Key": "Next Slide", "Text": "Suivant" }] }"#,
            Locale::Fr,
        )
        .unwrap();
        assert_eq!(p.next_slide(), "Suivant");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = Placeholders::from_sheet_json("{ nope", Locale::En).unwrap_err();
        assert!(matches!(err, PlaceholderError::Parse(_)));
    }

    #[test]
    fn camel_case_rules() {
        assert_eq!(to_camel_case("carousel"), "carousel");
        assert_eq!(to_camel_case("Previous  Slide"), "previousSlide");
        assert_eq!(to_camel_case("of"), "of");
        assert_eq!(to_camel_case("slide_2 label"), "slide-2Label");
    }

    #[tokio::test]
    async fn load_falls_back_on_fetch_error() {
        let p = load_placeholders(&FailingSource, Locale::Fr).await;
        assert!(p.is_empty());
        assert_eq!(p.next_slide(), "Next Slide");
    }

    #[tokio::test]
    async fn load_from_sheet_source() {
        let p = load_placeholders(&SheetSource::new(SHEETS), Locale::Fr).await;
        assert_eq!(p.carousel(), "Carrousel");
    }
}
