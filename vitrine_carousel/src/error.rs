// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use vitrine_dom::{DomError, NodeId};

/// Errors raised while decorating a block or applying a transition.
///
/// Missing optional content (no heading, no auxiliary row, no logo) is never
/// an error; these only surface when the host hands over handles that do not
/// describe a live element tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecorateError {
    /// The block handle is stale or not an element.
    #[error("node {0:?} is not a block element")]
    NotABlock(NodeId),

    /// A structural edit failed.
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Errors raised while fetching or parsing localized placeholders.
#[derive(Debug, thiserror::Error)]
pub enum PlaceholderError {
    /// The source could not deliver the sheet.
    #[error("placeholder fetch failed: {0}")]
    Fetch(String),

    /// The sheet body was not valid placeholder JSON.
    #[error("placeholder sheet is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised while loading a [`CarouselConfig`](crate::CarouselConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration body was not valid JSON for the expected shape.
    #[error("invalid carousel configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A visibility threshold lies outside `[0, 1]`.
    #[error("visibility threshold {0} is outside [0, 1]")]
    InvalidThreshold(f64),

    /// Autoplay would fire continuously.
    #[error("autoplay interval must be greater than zero")]
    ZeroAutoplayInterval,
}
