// Copyright 2025 the Stepwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core stepper implementation: construction, single insertion steps, accessors.

use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;
use stepwise_identity::{Identified, Identity};

use crate::types::{Advance, SortError, SortNode};

/// An insertion sort that performs one insertion per [`advance`](Self::advance).
///
/// `nodes[..cursor]` is the sorted prefix; `nodes[cursor..]` has not been
/// visited yet and still holds the initial order.
pub struct SortStepper {
    id: Identity,
    nodes: Vec<SortNode>,
    cursor: usize,
    converged: bool,
}

impl core::fmt::Debug for SortStepper {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SortStepper")
            .field("id", &self.id)
            .field("len", &self.nodes.len())
            .field("cursor", &self.cursor)
            .field("converged", &self.converged)
            .finish_non_exhaustive()
    }
}

impl SortStepper {
    /// Create a stepper over `0..count` in a uniformly random order.
    ///
    /// Uses the thread-local RNG. See [`with_rng`](Self::with_rng) for a
    /// reproducible shuffle.
    #[cfg(feature = "std")]
    pub fn new(count: usize) -> Result<Self, SortError> {
        Self::with_rng(count, &mut rand::rng())
    }

    /// Create a stepper over `0..count`, shuffled with `rng`.
    ///
    /// Fails with [`SortError::InvalidArgument`] if `count` exceeds `u32::MAX`.
    pub fn with_rng<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Self, SortError> {
        let end = u32::try_from(count).map_err(|_| SortError::InvalidArgument { count })?;
        let mut values: Vec<u32> = (0..end).collect();
        values.shuffle(rng);
        Ok(Self::from_values(values))
    }

    /// Create a stepper over `values` in the given order.
    ///
    /// Values need not be distinct.
    pub fn from_values(values: impl IntoIterator<Item = u32>) -> Self {
        let values: Vec<u32> = values.into_iter().collect();
        let span = values
            .iter()
            .max()
            .map_or(0, |max| u64::from(*max) + 1)
            .max(values.len() as u64);
        let nodes: Vec<SortNode> = values
            .into_iter()
            .map(|value| SortNode::new(value, span))
            .collect();
        let len = nodes.len();
        Self {
            id: Identity::next(),
            nodes,
            cursor: len.min(1),
            converged: len <= 1,
        }
    }

    /// Perform the next insertion step.
    ///
    /// Shifts `nodes[cursor]` left past every strictly greater neighbor, then
    /// moves the cursor by one. Once converged this is a no-op.
    pub fn advance(&mut self) -> Advance<'_> {
        if self.converged {
            return Advance {
                nodes: &self.nodes,
                converged: true,
                swaps: 0,
            };
        }

        let mut i = self.cursor;
        let mut swaps = 0;
        while i > 0 && self.nodes[i - 1].value() > self.nodes[i].value() {
            self.nodes.swap(i - 1, i);
            i -= 1;
            swaps += 1;
        }
        self.cursor += 1;
        if self.cursor >= self.nodes.len() {
            self.converged = true;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "sort.advance",
            stepper = self.id.get(),
            cursor = self.cursor,
            landed_at = i,
            swaps,
            converged = self.converged,
        );

        Advance {
            nodes: &self.nodes,
            converged: self.converged,
            swaps,
        }
    }

    /// The current sequence.
    pub fn values(&self) -> &[SortNode] {
        &self.nodes
    }

    /// True once the sequence is fully sorted and [`advance`](Self::advance) no longer changes it.
    pub fn is_sorted(&self) -> bool {
        self.converged
    }

    /// Boundary between the sorted prefix and the unvisited suffix.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the stepper holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Identity of this stepper.
    pub fn id(&self) -> Identity {
        self.id
    }
}

impl Identified for SortStepper {
    fn identity(&self) -> Identity {
        self.id
    }
}
