// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the document: node identifiers, node payloads, and errors.

use alloc::string::String;
use smallvec::SmallVec;

/// Identifier for a node in the document (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A single `name="value"` pair.
pub type Attribute = (String, String);

/// Element payload: tag, classes, attributes and inline style.
///
/// Attribute, class, and style order is insertion order and is preserved by
/// serialization. `class` and `style` are never stored as attributes; they are
/// synthesized from [`Element::classes`] and [`Element::styles`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    /// Lowercase tag name.
    pub tag: String,
    /// Class list.
    pub classes: SmallVec<[String; 4]>,
    /// Attributes other than `class` and `style`.
    pub attrs: SmallVec<[Attribute; 4]>,
    /// Inline style properties.
    pub styles: SmallVec<[Attribute; 2]>,
}

impl Element {
    /// Create an element with the given tag (lowercased).
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// Returns the attribute value, if set.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns true for `h1`..`h6`.
    pub fn is_heading(&self) -> bool {
        matches!(self.tag.as_str(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
    }
}

/// Payload of a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeData {
    /// An element node.
    Element(Element),
    /// A text node.
    Text(String),
}

impl NodeData {
    /// Returns the element payload, if this is an element.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            Self::Text(_) => None,
        }
    }

    pub(crate) fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(e) => Some(e),
            Self::Text(_) => None,
        }
    }
}

/// Errors raised by structural document operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The handle refers to a removed node.
    #[error("stale node handle {0:?}")]
    StaleNode(NodeId),
    /// The operation requires an element but found a text node.
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),
    /// Inserting `child` under `parent` would create a cycle.
    #[error("cannot insert {child:?} into its own subtree at {parent:?}")]
    HierarchyRequest {
        /// The would-be parent.
        parent: NodeId,
        /// The node being inserted.
        child: NodeId,
    },
    /// The reference node of an insertion is not a child of the parent.
    #[error("{reference:?} is not a child of {parent:?}")]
    NotAChild {
        /// The parent.
        parent: NodeId,
        /// The reference node.
        reference: NodeId,
    },
}
