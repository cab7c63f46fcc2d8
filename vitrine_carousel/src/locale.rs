// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Site locale resolution.

use core::fmt;

/// Languages the site is published in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English; the fallback for unprefixed paths.
    #[default]
    En,
    /// French.
    Fr,
}

impl Locale {
    /// Two-letter code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Parse a two-letter code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }

    /// Locale of a page path: its first segment when that is a supported code,
    /// English otherwise.
    pub fn from_path(path: &str) -> Self {
        path.split('/')
            .nth(1)
            .and_then(Self::from_code)
            .unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Memoizing resolver for the current page's locale.
///
/// The first [`resolve`](Self::resolve) computes the locale from the page path
/// and caches it; [`invalidate`](Self::invalidate) drops the cache.
#[derive(Clone, Debug, Default)]
pub struct LocaleResolver {
    path: String,
    cached: Option<Locale>,
}

impl LocaleResolver {
    /// Resolver for a page path such as `/fr/projets/arbres`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            cached: None,
        }
    }

    /// The current locale.
    pub fn resolve(&mut self) -> Locale {
        *self
            .cached
            .get_or_insert_with(|| Locale::from_path(&self.path))
    }

    /// Drop the cached locale so the next call recomputes it.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Point the resolver at another page path.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
        self.invalidate();
    }

    /// The page path being resolved.
    pub fn path(&self) -> &str {
        &self.path
    }
}
