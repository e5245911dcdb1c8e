// Copyright 2025 the Stepwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core outline implementation: arena construction, expand/collapse, visible traversal.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use stepwise_identity::{Identified, Identity};

use crate::types::{NodeFlags, OutlineError, OutlineItem, OutlineRow, Selection};

/// A node stored in the outline.
#[derive(Clone, Debug)]
pub struct OutlineNode<P = ()> {
    id: Identity,
    label: String,
    depth: usize,
    flags: NodeFlags,
    parent: Option<usize>,
    children: Vec<usize>,
    payload: Option<P>,
}

impl<P> OutlineNode<P> {
    /// Node identity.
    pub fn id(&self) -> Identity {
        self.id
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Nesting level; roots are `0`.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Current flags.
    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    /// True if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.flags.contains(NodeFlags::LEAF)
    }

    /// The node's own expanded flag. Has no visible effect on a leaf.
    pub fn is_expanded(&self) -> bool {
        self.flags.contains(NodeFlags::EXPANDED)
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Payload attached with [`OutlineItem::with_payload`].
    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// Snapshot of this node as a row.
    pub fn to_row(&self) -> OutlineRow {
        OutlineRow {
            id: self.id,
            label: self.label.clone(),
            depth: self.depth,
            is_leaf: self.is_leaf(),
            expanded: self.is_expanded(),
        }
    }
}

impl<P> Identified for OutlineNode<P> {
    fn identity(&self) -> Identity {
        self.id
    }
}

/// A forest of labeled nodes with per-node expand/collapse state.
///
/// Nodes live in a flat table in pre-order; each node keeps the indices of its
/// children and parent. The table never changes shape after construction; only
/// the [`NodeFlags::EXPANDED`] bits do.
#[derive(Clone, Debug)]
pub struct OutlineFlattener<P = ()> {
    nodes: Vec<OutlineNode<P>>,
    roots: Vec<usize>,
    lookup: BTreeMap<Identity, usize>,
}

impl<P> OutlineFlattener<P> {
    /// Take ownership of `forest`.
    ///
    /// Depths are assigned from nesting. Fails with [`OutlineError::DuplicateIdentity`]
    /// if any identity occurs twice (for example after cloning an item).
    pub fn new(forest: impl IntoIterator<Item = OutlineItem<P>>) -> Result<Self, OutlineError> {
        let mut nodes: Vec<OutlineNode<P>> = Vec::new();
        let mut roots = Vec::new();
        let mut lookup = BTreeMap::new();

        let mut stack: Vec<(OutlineItem<P>, Option<usize>, usize)> =
            forest.into_iter().map(|item| (item, None, 0)).collect();
        stack.reverse();

        while let Some((item, parent, depth)) = stack.pop() {
            let OutlineItem {
                id,
                label,
                expanded,
                payload,
                children,
            } = item;
            let index = nodes.len();
            if lookup.insert(id, index).is_some() {
                return Err(OutlineError::DuplicateIdentity(id));
            }

            let mut flags = NodeFlags::empty();
            flags.set(NodeFlags::EXPANDED, expanded);
            flags.set(NodeFlags::LEAF, children.is_empty());
            nodes.push(OutlineNode {
                id,
                label,
                depth,
                flags,
                parent,
                children: Vec::with_capacity(children.len()),
                payload,
            });
            match parent {
                Some(p) => nodes[p].children.push(index),
                None => roots.push(index),
            }
            // Reversed so children pop in order, keeping the table in pre-order.
            for child in children.into_iter().rev() {
                stack.push((child, Some(index), depth + 1));
            }
        }

        Ok(Self {
            nodes,
            roots,
            lookup,
        })
    }

    /// Flip the expanded flag of `id`. Returns the new flag.
    pub fn toggle(&mut self, id: Identity) -> Result<bool, OutlineError> {
        let index = self.index_of(id)?;
        Ok(self.toggle_index(index))
    }

    /// Set the expanded flag of `id`.
    pub fn set_expanded(&mut self, id: Identity, expanded: bool) -> Result<(), OutlineError> {
        let index = self.index_of(id)?;
        self.nodes[index].flags.set(NodeFlags::EXPANDED, expanded);
        Ok(())
    }

    /// Expand every ancestor of `id` so that it appears in [`flatten`](Self::flatten).
    ///
    /// The node's own flag is left alone. Returns how many ancestors changed.
    pub fn reveal(&mut self, id: Identity) -> Result<usize, OutlineError> {
        let mut cursor = self.nodes[self.index_of(id)?].parent;
        let mut changed = 0;
        while let Some(index) = cursor {
            let node = &mut self.nodes[index];
            if !node.flags.contains(NodeFlags::EXPANDED) {
                node.flags.insert(NodeFlags::EXPANDED);
                changed += 1;
            }
            cursor = node.parent;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "outline.reveal", id = id.get(), changed);

        Ok(changed)
    }

    /// Handle a selection of `id` the way a list's tap handler does.
    ///
    /// A node with children is toggled. A leaf is reported as activated with its
    /// payload and nothing changes.
    pub fn select(&mut self, id: Identity) -> Result<Selection<'_, P>, OutlineError> {
        let index = self.index_of(id)?;
        if self.nodes[index].is_leaf() {
            return Ok(Selection::Activated(self.nodes[index].payload.as_ref()));
        }
        let expanded = self.toggle_index(index);
        Ok(Selection::Toggled { expanded })
    }

    /// Look up a node anywhere in the forest.
    pub fn get(&self, id: Identity) -> Option<&OutlineNode<P>> {
        self.lookup.get(&id).map(|&index| &self.nodes[index])
    }

    /// The expanded flag of `id`, or `None` if absent.
    pub fn is_expanded(&self, id: Identity) -> Option<bool> {
        self.get(id).map(OutlineNode::is_expanded)
    }

    /// True if every ancestor of `id` is expanded, or `None` if absent.
    pub fn is_visible(&self, id: Identity) -> Option<bool> {
        let mut cursor = self.get(id)?.parent;
        while let Some(index) = cursor {
            let node = &self.nodes[index];
            if !node.is_expanded() {
                return Some(false);
            }
            cursor = node.parent;
        }
        Some(true)
    }

    /// Ancestors of `id`, root first, ending with `id` itself.
    pub fn path(&self, id: Identity) -> Option<Vec<Identity>> {
        let mut out = Vec::new();
        let mut cursor = Some(*self.lookup.get(&id)?);
        while let Some(index) = cursor {
            out.push(self.nodes[index].id);
            cursor = self.nodes[index].parent;
        }
        out.reverse();
        Some(out)
    }

    /// Root nodes in order.
    pub fn roots(&self) -> impl Iterator<Item = &OutlineNode<P>> + '_ {
        self.roots.iter().map(move |&index| &self.nodes[index])
    }

    /// Direct children of `id` in order, or `None` if absent.
    pub fn children(&self, id: Identity) -> Option<impl Iterator<Item = &OutlineNode<P>> + '_> {
        let node = self.get(id)?;
        Some(node.children.iter().map(move |&index| &self.nodes[index]))
    }

    /// Total number of nodes, visible or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the forest is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Lazily walk the visible nodes in pre-order.
    ///
    /// A collapsed node is yielded but its children are never pushed, so hidden
    /// subtrees cost nothing.
    pub fn iter_visible(&self) -> Visible<'_, P> {
        Visible {
            nodes: &self.nodes,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    /// The visible sequence as owned rows.
    pub fn flatten(&self) -> Vec<OutlineRow> {
        let rows: Vec<OutlineRow> = self.iter_visible().map(OutlineNode::to_row).collect();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "outline.flatten",
            visible = rows.len(),
            total = self.nodes.len()
        );

        rows
    }

    fn index_of(&self, id: Identity) -> Result<usize, OutlineError> {
        self.lookup
            .get(&id)
            .copied()
            .ok_or(OutlineError::NotFound(id))
    }

    fn toggle_index(&mut self, index: usize) -> bool {
        let node = &mut self.nodes[index];
        node.flags.toggle(NodeFlags::EXPANDED);
        let expanded = node.is_expanded();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "outline.toggle",
            action = if expanded { "expand" } else { "collapse" },
            id = node.id.get(),
            label = node.label.as_str(),
            depth = node.depth,
        );

        expanded
    }
}

/// Iterator over the visible nodes of an [`OutlineFlattener`], in pre-order.
///
/// Returned by [`OutlineFlattener::iter_visible`].
#[derive(Debug)]
pub struct Visible<'a, P> {
    nodes: &'a [OutlineNode<P>],
    stack: Vec<usize>,
}

impl<'a, P> Iterator for Visible<'a, P> {
    type Item = &'a OutlineNode<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.nodes[index];
        if node.is_expanded() {
            self.stack.extend(node.children.iter().rev().copied());
        }
        Some(node)
    }
}
