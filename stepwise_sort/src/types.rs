// Copyright 2025 the Stepwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the sort stepper: nodes, step results, and errors.

use core::hash::{Hash, Hasher};

use stepwise_identity::{Identified, Identity};

/// One element of a [`SortStepper`](crate::SortStepper) sequence.
///
/// Equality and hashing use the node's `ordinal` only. Two nodes with the same
/// `value` are still distinct items for diffing purposes.
#[derive(Copy, Clone, Debug)]
pub struct SortNode {
    value: u32,
    ordinal: Identity,
    hue: f32,
}

impl SortNode {
    pub(crate) fn new(value: u32, span: u64) -> Self {
        let hue = if span == 0 {
            0.0
        } else {
            value as f32 / span as f32
        };
        Self {
            value,
            ordinal: Identity::next(),
            hue,
        }
    }

    /// The sort key.
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Identity assigned at creation; stable across moves.
    pub const fn ordinal(&self) -> Identity {
        self.ordinal
    }

    /// Position of `value` within the initial value range, in `[0, 1)`.
    ///
    /// Fixed at creation, so a node keeps its color while it moves.
    pub const fn hue(&self) -> f32 {
        self.hue
    }
}

impl PartialEq for SortNode {
    fn eq(&self, other: &Self) -> bool {
        self.ordinal == other.ordinal
    }
}

impl Eq for SortNode {}

impl Hash for SortNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordinal.hash(state);
    }
}

impl Identified for SortNode {
    fn identity(&self) -> Identity {
        self.ordinal
    }
}

/// Result of [`SortStepper::advance`](crate::SortStepper::advance).
#[derive(Copy, Clone, Debug)]
pub struct Advance<'a> {
    /// The sequence after this step.
    pub nodes: &'a [SortNode],
    /// True once the whole sequence is sorted.
    pub converged: bool,
    /// Number of left-shifts this step performed.
    pub swaps: usize,
}

/// Result of [`SortBoard::tick`](crate::SortBoard::tick).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tick {
    /// Number of rows that performed a step during this tick.
    pub advanced: usize,
    /// True once every row is sorted.
    pub converged: bool,
}

/// Errors raised when constructing a stepper or board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// The requested element count does not fit the `u32` value domain.
    #[error("invalid argument: count {count} exceeds the supported value range")]
    InvalidArgument {
        /// The rejected count.
        count: usize,
    },
}
