// Copyright 2025 the Stepwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the outline: the item builder, flags, rows, selections, errors.

use alloc::string::String;
use alloc::vec::Vec;
use stepwise_identity::{Identified, Identity};

bitflags::bitflags! {
    /// Per-node state flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node shows its children in the visible sequence.
        const EXPANDED = 0b0000_0001;
        /// Node has no children. Fixed at construction.
        const LEAF     = 0b0000_0010;
    }
}

/// Builder for one node of the initial forest.
///
/// The [`Identity`] is drawn when the item is created, so callers can record
/// it before handing the forest to [`OutlineFlattener::new`](crate::OutlineFlattener::new).
/// Cloning an item copies its identity; a forest containing both copies is rejected.
#[derive(Clone, Debug)]
pub struct OutlineItem<P = ()> {
    pub(crate) id: Identity,
    pub(crate) label: String,
    pub(crate) expanded: bool,
    pub(crate) payload: Option<P>,
    pub(crate) children: Vec<Self>,
}

impl OutlineItem {
    /// A collapsed item without payload.
    pub fn new(label: impl Into<String>) -> Self {
        Self::group(label)
    }
}

impl<P> OutlineItem<P> {
    /// A collapsed item without payload, for outlines whose leaves carry a `P`.
    pub fn group(label: impl Into<String>) -> Self {
        Self {
            id: Identity::next(),
            label: label.into(),
            expanded: false,
            payload: None,
            children: Vec::new(),
        }
    }

    /// A childless item carrying `payload`.
    pub fn leaf(label: impl Into<String>, payload: P) -> Self {
        Self::group(label).with_payload(payload)
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, item: Self) -> Self {
        self.children.push(item);
        self
    }

    /// Replace the children.
    #[must_use]
    pub fn with_children(mut self, items: Vec<Self>) -> Self {
        self.children = items;
        self
    }

    /// Set the initial expanded flag.
    #[must_use]
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Attach a payload, returned by [`OutlineFlattener::select`](crate::OutlineFlattener::select).
    #[must_use]
    pub fn with_payload(mut self, payload: P) -> Self {
        self.payload = Some(payload);
        self
    }

    /// The identity this item keeps inside the outline.
    pub fn id(&self) -> Identity {
        self.id
    }
}

impl<P> Identified for OutlineItem<P> {
    fn identity(&self) -> Identity {
        self.id
    }
}

/// One visible row, as returned by [`OutlineFlattener::flatten`](crate::OutlineFlattener::flatten).
///
/// Rows own their data so an old list can be kept for diffing after the outline changes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OutlineRow {
    /// Node identity.
    pub id: Identity,
    /// Display label.
    pub label: String,
    /// Nesting level; roots are `0`.
    pub depth: usize,
    /// True if the node has no children.
    pub is_leaf: bool,
    /// The node's own expanded flag.
    pub expanded: bool,
}

impl Identified for OutlineRow {
    fn identity(&self) -> Identity {
        self.id
    }
}

/// Outcome of [`OutlineFlattener::select`](crate::OutlineFlattener::select).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection<'a, P> {
    /// A node with children was toggled; carries its new expanded flag.
    Toggled {
        /// The flag after toggling.
        expanded: bool,
    },
    /// A leaf was selected. Carries its payload, if any. The outline is unchanged.
    Activated(Option<&'a P>),
}

/// Errors reported by the outline.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OutlineError {
    /// No node in the forest has this identity.
    #[error("no outline node has identity {0}")]
    NotFound(Identity),
    /// The same identity appears more than once in the initial forest.
    #[error("invalid argument: identity {0} appears more than once in the forest")]
    DuplicateIdentity(Identity),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_collapsed() {
        let item = OutlineItem::new("root").child(OutlineItem::new("a"));
        assert!(!item.expanded);
        assert_eq!(item.children.len(), 1);
        assert!(item.payload.is_none());
    }

    #[test]
    fn leaf_carries_payload() {
        let item = OutlineItem::leaf("List", 7_u8);
        assert_eq!(item.payload, Some(7));
        assert!(item.children.is_empty());
    }

    #[test]
    fn clone_keeps_identity() {
        let item = OutlineItem::new("x");
        assert_eq!(item.clone().id(), item.id());
    }
}
