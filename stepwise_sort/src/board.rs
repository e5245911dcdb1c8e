// Copyright 2025 the Stepwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A board of independent steppers advanced together, one step per tick.

use alloc::vec::Vec;
use rand::Rng;
use stepwise_identity::Identity;

use crate::stepper::SortStepper;
use crate::types::{SortError, Tick};

/// Rows of [`SortStepper`]s driven by a shared timer.
///
/// Each [`tick`](Self::tick) advances every row that has not converged yet.
/// Rows are independent; a converged row simply stops changing.
#[derive(Debug, Default)]
pub struct SortBoard {
    rows: Vec<SortStepper>,
}

impl SortBoard {
    /// Create `rows` shuffled rows of `columns` values each, using the thread-local RNG.
    #[cfg(feature = "std")]
    pub fn new(rows: usize, columns: usize) -> Result<Self, SortError> {
        Self::with_rng(rows, columns, &mut rand::rng())
    }

    /// Create `rows` rows of `columns` values each, shuffled with `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        rows: usize,
        columns: usize,
        rng: &mut R,
    ) -> Result<Self, SortError> {
        let mut out = Vec::with_capacity(rows);
        for _ in 0..rows {
            out.push(SortStepper::with_rng(columns, &mut *rng)?);
        }
        Ok(Self { rows: out })
    }

    /// Build a board from existing steppers, keeping their order.
    pub fn from_steppers(rows: Vec<SortStepper>) -> Self {
        Self { rows }
    }

    /// Advance every unsorted row by one step.
    pub fn tick(&mut self) -> Tick {
        let mut advanced = 0;
        let mut converged = true;
        for row in self.rows.iter_mut().filter(|r| !r.is_sorted()) {
            advanced += 1;
            converged &= row.advance().converged;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "sort.tick", rows = self.rows.len(), advanced, converged);

        Tick {
            advanced,
            converged,
        }
    }

    /// All rows in board order.
    pub fn rows(&self) -> &[SortStepper] {
        &self.rows
    }

    /// Look up a row by its stepper identity.
    pub fn row(&self, id: Identity) -> Option<&SortStepper> {
        self.rows.iter().find(|r| r.id() == id)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the board has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True once every row is sorted.
    pub fn is_sorted(&self) -> bool {
        self.rows.iter().all(SortStepper::is_sorted)
    }
}
