// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine DOM: a generational-arena document tree for headless decoration.
//!
//! Vitrine DOM is the host-agnostic stand-in for the browser document that block
//! decorators consume and mutate. A host (a browser binding, a server-side
//! renderer, or a test) builds the authored markup into a [`Document`], hands
//! node handles to a decorator, and reads the resulting tree back out.
//!
//! - Represents elements (tag, ordered classes, ordered attributes, inline style)
//!   and text nodes in a single arena addressed by generational [`NodeId`]s.
//! - Provides DOM-like structural edits with `append` move semantics and cycle
//!   rejection reported as [`DomError`].
//! - Provides the small query surface decorators need: pre-order
//!   [`descendants`](Document::descendants), tag and class selection,
//!   [`closest`](Document::closest), and [`text_content`](Document::text_content).
//!
//! ## Not a layout engine
//!
//! Geometry is measured by the host and recorded per node with
//! [`Document::set_layout`]. The document never computes positions itself; it
//! only stores the last box a host reported so decorators can derive offsets.
//!
//! ## API overview
//!
//! - [`Document`]: container owning all nodes.
//! - [`ElementBuilder`]: fluent construction of authored subtrees.
//! - [`Element`] / [`NodeData`]: node payloads.
//! - [`outer_html`] / [`inner_html`]: deterministic serialization.
//!
//! Key operations:
//! - [`Document::append_child`], [`Document::prepend_child`], [`Document::insert_before`],
//!   [`Document::replace_with`], [`Document::detach`], [`Document::remove`].
//! - [`Document::deep_clone`] for structural copies that share nothing with the source.
//! - [`Document::move_instrumentation`] to carry authoring attributes onto rebuilt markup.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod builder;
mod html;
mod tree;
mod types;
mod util;

pub use builder::ElementBuilder;
pub use html::{inner_html, outer_html};
pub use tree::{Descendants, Document};
pub use types::{Attribute, DomError, Element, NodeData, NodeId};
