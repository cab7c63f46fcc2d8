// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Event State: deterministic state machines for asynchronous UI inputs.
//!
//! Browsers deliver some inputs through callbacks whose timing the page does not
//! control: intersection observers and timers. This crate models both as plain
//! state machines driven by the host, so decorators stay single-threaded and
//! fully testable.
//!
//! - [`intersection`]: level-triggered threshold crossing over host-reported
//!   visibility ratios.
//! - [`timeout`]: a cancellable one-shot deadline polled with host timestamps.
//!
//! Timestamps are caller-chosen monotonic milliseconds. Nothing here reads a
//! clock.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod intersection;
pub mod timeout;
