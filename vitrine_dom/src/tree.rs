// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core document implementation: structure, attributes, queries.

use alloc::{
    borrow::ToOwned,
    string::{String, ToString},
    vec::Vec,
};
use kurbo::Rect;

use crate::types::{DomError, Element, NodeData, NodeId};

/// Attribute name prefixes written by the authoring environment.
const INSTRUMENTATION_PREFIXES: [&str; 2] = ["data-aue-", "data-richtext-"];

/// Arena-backed document.
///
/// Nodes are created detached and become part of a tree when appended to a
/// parent. A node can have at most one parent; appending a node that already
/// has a parent moves it, mirroring DOM `append` semantics.
///
/// Handles are generational: once a node is [removed](Document::remove), its
/// [`NodeId`] goes stale and every accessor treats it as absent.
///
/// ## Example
///
/// ```rust
/// use vitrine_dom::Document;
///
/// let mut doc = Document::new();
/// let list = doc.create_element("ul");
/// let item = doc.create_element("li");
/// doc.append_child(list, item).unwrap();
/// doc.add_class(item, "carousel-slide").unwrap();
///
/// assert_eq!(doc.parent_of(item), Some(list));
/// assert_eq!(
///     vitrine_dom::outer_html(&doc, list),
///     r#"<ul><li class="carousel-slide"></li></ul>"#
/// );
/// ```
pub struct Document {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl core::fmt::Debug for Document {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Document")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    data: NodeData,
    /// Host-measured box; `y0` is the offset top, `height()` the offset height.
    /// `None` until the host records one.
    layout: Option<Rect>,
}

impl Node {
    fn new(generation: u32, data: NodeData) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            data,
            layout: None,
        }
    }
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Create a detached node holding `data`.
    pub fn create(&mut self, data: NodeData) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, data));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, data)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        NodeId::new(idx, generation)
    }

    /// Create a detached element with the given tag.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.create(NodeData::Element(Element::new(tag)))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.create(NodeData::Text(text.to_owned()))
    }

    /// Returns true if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .is_some_and(|n| n.generation == id.1)
    }

    /// Returns the payload of a live node.
    pub fn data(&self, id: NodeId) -> Option<&NodeData> {
        self.node_opt(id).map(|n| &n.data)
    }

    /// Returns the element payload of a live element node.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.data(id).and_then(NodeData::as_element)
    }

    /// Returns the tag of a live element node.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.tag.as_str())
    }

    /// Returns true if `id` is a live element with the given tag.
    pub fn is_tag(&self, id: NodeId, tag: &str) -> bool {
        self.tag(id) == Some(tag)
    }

    // --- structure ---

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.check_insert(parent, child)?;
        self.detach(child);
        self.node_mut(parent).children.push(child);
        self.node_mut(child).parent = Some(parent);
        Ok(())
    }

    /// Insert `child` as the first child of `parent`.
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.check_insert(parent, child)?;
        self.detach(child);
        self.node_mut(parent).children.insert(0, child);
        self.node_mut(child).parent = Some(parent);
        Ok(())
    }

    /// Insert `child` under `parent` immediately before `reference`.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: NodeId,
    ) -> Result<(), DomError> {
        self.check_insert(parent, child)?;
        if self.parent_of(reference) != Some(parent) {
            return Err(DomError::NotAChild { parent, reference });
        }
        if child == reference {
            return Ok(());
        }
        self.detach(child);
        let siblings = &mut self.node_mut(parent).children;
        let pos = siblings
            .iter()
            .position(|&c| c == reference)
            .unwrap_or(siblings.len());
        siblings.insert(pos, child);
        self.node_mut(child).parent = Some(parent);
        Ok(())
    }

    /// Link a freshly created, detached `child` under `parent`.
    pub(crate) fn adopt(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(
            self.parent_of(child).is_none(),
            "adopted node must be detached"
        );
        self.node_mut(parent).children.push(child);
        self.node_mut(child).parent = Some(parent);
    }

    /// Unlink `id` from its parent. The subtree stays alive.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.parent_of(id) else {
            return;
        };
        self.node_mut(parent).children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }

    /// Remove a node and its whole subtree. All their handles go stale.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        self.detach(id);
        let mut stack = alloc::vec![id];
        while let Some(n) = stack.pop() {
            if let Some(node) = self.nodes[n.idx()].take() {
                stack.extend(node.children);
                self.free_list.push(n.idx());
            }
        }
    }

    /// Put `replacement` where `old` is, then remove `old`.
    ///
    /// A detached `old` is simply removed.
    pub fn replace_with(&mut self, old: NodeId, replacement: NodeId) -> Result<(), DomError> {
        self.check(old)?;
        if let Some(parent) = self.parent_of(old) {
            self.insert_before(parent, replacement, old)?;
        }
        self.remove(old);
        Ok(())
    }

    /// Structural copy of a subtree. The copy is detached and shares nothing
    /// with the source.
    pub fn deep_clone(&mut self, id: NodeId) -> Result<NodeId, DomError> {
        self.check(id)?;
        let (data, layout, children) = {
            let n = self.node(id);
            (n.data.clone(), n.layout, n.children.clone())
        };
        let copy = self.create(data);
        self.node_mut(copy).layout = layout;
        for child in children {
            let child_copy = self.deep_clone(child)?;
            self.append_child(copy, child_copy)?;
        }
        Ok(copy)
    }

    // --- attributes, classes, style ---

    /// Returns the value of an attribute on a live element.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.attr(name))
    }

    /// Set an attribute, replacing any previous value.
    ///
    /// `class` replaces the class list and `style` replaces the inline style.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        let el = self.element_mut(id)?;
        match name {
            "class" => {
                el.classes = value.split_whitespace().map(ToString::to_string).collect();
            }
            "style" => {
                el.styles = value
                    .split(';')
                    .filter_map(|decl| decl.split_once(':'))
                    .map(|(p, v)| (p.trim().to_string(), v.trim().to_string()))
                    .collect();
            }
            _ => {
                if let Some(slot) = el.attrs.iter_mut().find(|(n, _)| n == name) {
                    value.clone_into(&mut slot.1);
                } else {
                    el.attrs.push((name.to_string(), value.to_string()));
                }
            }
        }
        Ok(())
    }

    /// Remove an attribute and return its previous value.
    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> Option<String> {
        let el = self.element_mut(id).ok()?;
        let pos = el.attrs.iter().position(|(n, _)| n == name)?;
        Some(el.attrs.remove(pos).1)
    }

    /// Add the attribute with an empty value when `force` is true (keeping an
    /// existing value), remove it otherwise.
    pub fn toggle_attr(&mut self, id: NodeId, name: &str, force: bool) -> Result<(), DomError> {
        if force {
            if self.attr(id, name).is_none() {
                self.set_attr(id, name, "")?;
            }
        } else {
            self.check(id)?;
            self.remove_attr(id, name);
        }
        Ok(())
    }

    /// Returns true if a live element carries `class`.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_class(class))
    }

    /// Add a class if not already present.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> Result<(), DomError> {
        let el = self.element_mut(id)?;
        if !el.has_class(class) {
            el.classes.push(class.to_string());
        }
        Ok(())
    }

    /// Remove a class if present.
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Ok(el) = self.element_mut(id) {
            el.classes.retain(|c| c != class);
        }
    }

    /// Returns an inline style property.
    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.element(id)?
            .styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Set an inline style property.
    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) -> Result<(), DomError> {
        let el = self.element_mut(id)?;
        if let Some(slot) = el.styles.iter_mut().find(|(p, _)| p == property) {
            value.clone_into(&mut slot.1);
        } else {
            el.styles.push((property.to_string(), value.to_string()));
        }
        Ok(())
    }

    /// Move the authoring instrumentation attributes (`data-aue-*`,
    /// `data-richtext-*`) from `from` to `to`, clearing them on `from`.
    ///
    /// Attributes with empty values are left in place.
    pub fn move_instrumentation(&mut self, from: NodeId, to: NodeId) -> Result<(), DomError> {
        let moved: Vec<(String, String)> = self
            .element_mut(from)?
            .attrs
            .iter()
            .filter(|(n, v)| {
                !v.is_empty() && INSTRUMENTATION_PREFIXES.iter().any(|p| n.starts_with(p))
            })
            .cloned()
            .collect();
        self.element_mut(to)?;
        for (name, value) in moved {
            self.set_attr(to, &name, &value)?;
            self.remove_attr(from, &name);
        }
        Ok(())
    }

    // --- layout ---

    /// Record the host-measured box of a node.
    pub fn set_layout(&mut self, id: NodeId, rect: Rect) {
        if let Some(n) = self.node_opt_mut(id) {
            n.layout = Some(rect);
        }
    }

    /// Returns the host-measured box of a live node, or `None` when the node
    /// is stale or has not been measured yet.
    pub fn layout(&self, id: NodeId) -> Option<Rect> {
        self.node_opt(id).and_then(|n| n.layout)
    }

    // --- queries ---

    /// Returns the parent of a node if live, or `None` for roots or stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Get the children of a node, or empty slice if node is stale.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Iterate the element children of a node.
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children_of(id)
            .iter()
            .copied()
            .filter(|&c| self.element(c).is_some())
    }

    /// Get the next node after `current` in depth-first order, staying within
    /// the subtree rooted at `scope` (which is never yielded).
    pub fn next_depth_first(&self, scope: NodeId, current: NodeId) -> Option<NodeId> {
        if !self.is_alive(current) {
            return None;
        }
        if let Some(&first_child) = self.node(current).children.first() {
            return Some(first_child);
        }
        let mut node = current;
        while node != scope {
            if let Some(next_sibling) = self.next_sibling(node) {
                return Some(next_sibling);
            }
            node = self.parent_of(node)?;
        }
        None
    }

    /// Iterate all descendants of `scope` in document order (pre-order).
    pub fn descendants(&self, scope: NodeId) -> Descendants<'_> {
        Descendants {
            doc: self,
            scope,
            next: self.children_of(scope).first().copied(),
        }
    }

    /// Iterate descendant elements with the given tag.
    pub fn select_tag<'a>(
        &'a self,
        scope: NodeId,
        tag: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.descendants(scope).filter(move |&n| self.is_tag(n, tag))
    }

    /// Iterate descendant elements carrying the given class.
    pub fn select_class<'a>(
        &'a self,
        scope: NodeId,
        class: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.descendants(scope)
            .filter(move |&n| self.has_class(n, class))
    }

    /// First descendant element matching `pred`.
    pub fn find_descendant(
        &self,
        scope: NodeId,
        mut pred: impl FnMut(&Element) -> bool,
    ) -> Option<NodeId> {
        self.descendants(scope)
            .find(|&n| self.element(n).is_some_and(&mut pred))
    }

    /// Nearest inclusive ancestor element matching `pred`.
    pub fn closest(&self, id: NodeId, mut pred: impl FnMut(&Element) -> bool) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(n) = current {
            if self.element(n).is_some_and(&mut pred) {
                return Some(n);
            }
            current = self.parent_of(n);
        }
        None
    }

    /// Concatenated text of the node and its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(NodeData::Text(t)) = self.data(id) {
            out.push_str(t);
        }
        for n in self.descendants(id) {
            if let Some(NodeData::Text(t)) = self.data(n) {
                out.push_str(t);
            }
        }
        out
    }

    // --- internals ---

    fn check(&self, id: NodeId) -> Result<(), DomError> {
        if self.is_alive(id) {
            Ok(())
        } else {
            Err(DomError::StaleNode(id))
        }
    }

    fn check_insert(&self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.check(child)?;
        if self.element(parent).is_none() {
            self.check(parent)?;
            return Err(DomError::NotAnElement(parent));
        }
        let mut current = Some(parent);
        while let Some(n) = current {
            if n == child {
                return Err(DomError::HierarchyRequest { parent, child });
            }
            current = self.parent_of(n);
        }
        Ok(())
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent_of(node)?;
        let siblings = &self.node(parent).children;
        let pos = siblings.iter().position(|&id| id == node)?;
        siblings.get(pos + 1).copied()
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut Element, DomError> {
        self.node_opt_mut(id)
            .ok_or(DomError::StaleNode(id))?
            .data
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))
    }

    /// Access a live node; panics if `id` is stale.
    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    /// Access a live node mutably; panics if `id` is stale.
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }
}

/// Pre-order iterator over the descendants of a node.
///
/// Created by [`Document::descendants`].
#[derive(Clone, Debug)]
pub struct Descendants<'a> {
    doc: &'a Document,
    scope: NodeId,
    next: Option<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.doc.next_depth_first(self.scope, current);
        Some(current)
    }
}
