// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic markup serialization.

use alloc::string::String;

use crate::tree::Document;
use crate::types::{NodeData, NodeId};
use crate::util::{is_void, push_escaped};

/// Serialize a node and its subtree.
///
/// Within a start tag the `class` attribute comes first, then the remaining
/// attributes in insertion order, then `style`. Stale ids serialize to an
/// empty string.
pub fn outer_html(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, id, &mut out);
    out
}

/// Serialize the children of a node.
pub fn inner_html(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    for &child in doc.children_of(id) {
        write_node(doc, child, &mut out);
    }
    out
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    let Some(data) = doc.data(id) else {
        return;
    };
    let el = match data {
        NodeData::Text(t) => {
            push_escaped(out, t, false);
            return;
        }
        NodeData::Element(el) => el,
    };

    out.push('<');
    out.push_str(&el.tag);
    if !el.classes.is_empty() {
        out.push_str(" class=\"");
        for (i, class) in el.classes.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            push_escaped(out, class, true);
        }
        out.push('"');
    }
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        push_escaped(out, value, true);
        out.push('"');
    }
    if !el.styles.is_empty() {
        out.push_str(" style=\"");
        for (i, (prop, value)) in el.styles.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(prop);
            out.push_str(": ");
            push_escaped(out, value, true);
            out.push(';');
        }
        out.push('"');
    }
    out.push('>');

    if is_void(&el.tag) {
        return;
    }
    for &child in doc.children_of(id) {
        write_node(doc, child, out);
    }
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}
