// Copyright 2025 the Stepwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stepwise Outline: an expandable tree flattened into list rows.
//!
//! Stepwise Outline keeps a forest of labeled nodes, each with its own
//! expand/collapse flag, and produces the ordered sequence of rows a list widget
//! should currently show.
//!
//! - A node is always shown if its parent chain is expanded.
//! - A collapsed node hides its whole subtree, whatever the descendants' own flags say.
//! - Descendant flags are preserved and take effect again once the ancestor re-expands.
//!
//! ## Not a list widget
//!
//! This crate does not render, animate or diff. A presentation layer calls
//! [`OutlineFlattener::flatten`] after construction and after every change, then
//! reconciles the old and new row lists by [`Identity`](stepwise_identity::Identity).
//!
//! ## API overview
//!
//! - [`OutlineItem`]: builder for the initial forest.
//! - [`OutlineFlattener`]: owns the forest; [`toggle`](OutlineFlattener::toggle),
//!   [`select`](OutlineFlattener::select), [`reveal`](OutlineFlattener::reveal) and
//!   [`flatten`](OutlineFlattener::flatten).
//! - [`OutlineRow`]: owned snapshot of one visible node.
//! - [`NodeFlags`]: `EXPANDED` and `LEAF`.
//!
//! ## Features
//!
//! - `tracing`: emit `debug` events on toggle and reveal, `trace` on flatten.
//!
//! # Example
//!
//! ```rust
//! use stepwise_outline::{OutlineFlattener, OutlineItem};
//!
//! let b = OutlineItem::new("B").child(OutlineItem::new("D"));
//! let b_id = b.id();
//! let a = OutlineItem::new("A").child(b).child(OutlineItem::new("C"));
//! let a_id = a.id();
//!
//! let mut outline = OutlineFlattener::new([a]).unwrap();
//! let labels = |o: &OutlineFlattener| -> Vec<String> {
//!     o.flatten().into_iter().map(|row| row.label).collect()
//! };
//!
//! assert_eq!(labels(&outline), ["A"]);
//! outline.toggle(a_id).unwrap();
//! assert_eq!(labels(&outline), ["A", "B", "C"]);
//! outline.toggle(b_id).unwrap();
//! assert_eq!(labels(&outline), ["A", "B", "D", "C"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod outline;
pub mod types;

pub use outline::{OutlineFlattener, OutlineNode, Visible};
pub use types::{NodeFlags, OutlineError, OutlineItem, OutlineRow, Selection};
