// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fluent construction of element subtrees.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use crate::tree::Document;
use crate::types::{Element, NodeData, NodeId};

#[derive(Clone, Debug)]
enum Child {
    Element(ElementBuilder),
    Text(String),
}

/// Describes an element subtree that can be materialized into a [`Document`].
///
/// ```rust
/// use vitrine_dom::{Document, ElementBuilder, outer_html};
///
/// let mut doc = Document::new();
/// let row = ElementBuilder::new("div")
///     .child(ElementBuilder::new("div").child(ElementBuilder::new("picture")))
///     .child(ElementBuilder::new("div").child(ElementBuilder::new("h2").attr("id", "t").text("Title")))
///     .build(&mut doc);
///
/// assert_eq!(
///     outer_html(&doc, row),
///     r#"<div><div><picture></picture></div><div><h2 id="t">Title</h2></div></div>"#
/// );
/// ```
#[derive(Clone, Debug)]
pub struct ElementBuilder {
    element: Element,
    children: Vec<Child>,
}

impl ElementBuilder {
    /// Start an element with the given tag.
    pub fn new(tag: &str) -> Self {
        Self {
            element: Element::new(tag),
            children: Vec::new(),
        }
    }

    /// Add a class.
    pub fn class(mut self, class: &str) -> Self {
        if !self.element.has_class(class) {
            self.element.classes.push(class.to_string());
        }
        self
    }

    /// Add an attribute. `class` and `style` are not special-cased here;
    /// use [`ElementBuilder::class`] and [`ElementBuilder::style`].
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.element
            .attrs
            .push((name.to_string(), value.to_string()));
        self
    }

    /// Add an inline style property.
    pub fn style(mut self, property: &str, value: &str) -> Self {
        self.element
            .styles
            .push((property.to_string(), value.to_string()));
        self
    }

    /// Append a child element.
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    /// Append a text child.
    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Child::Text(text.to_string()));
        self
    }

    /// Materialize the subtree; the returned root is detached.
    pub fn build(self, doc: &mut Document) -> NodeId {
        let id = doc.create(NodeData::Element(self.element));
        for child in self.children {
            let child_id = match child {
                Child::Element(b) => b.build(doc),
                Child::Text(t) => doc.create(NodeData::Text(t)),
            };
            doc.adopt(id, child_id);
        }
        id
    }
}
