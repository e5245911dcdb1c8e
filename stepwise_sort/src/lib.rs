// Copyright 2025 the Stepwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stepwise Sort: an insertion sort you can watch converge.
//!
//! Stepwise Sort drives a sorting visualization. Each call performs exactly one
//! insertion of a classic insertion sort and hands back the updated sequence, so
//! a presentation layer can call it once per animation tick and diff successive
//! snapshots by node identity.
//!
//! - [`SortStepper`]: one shuffled sequence of [`SortNode`]s plus a cursor.
//! - [`SortBoard`]: several independent steppers advanced together.
//! - [`SortNode`]: a value, a stable [`Identity`](stepwise_identity::Identity), and a hue.
//!
//! ## Invariants
//!
//! - After every [`SortStepper::advance`], `values()[..cursor()]` is sorted by value.
//! - The set of node identities never changes; only positions do.
//! - Once [`SortStepper::is_sorted`] returns true, `advance` is a no-op.
//!
//! ## Features
//!
//! - `std` (default): [`SortStepper::new`] and [`SortBoard::new`], which shuffle
//!   with the thread-local RNG.
//! - `tracing`: emit a `debug` event per step and per board tick.
//!
//! # Example
//!
//! ```rust
//! use stepwise_sort::SortStepper;
//!
//! let mut stepper = SortStepper::from_values([4, 3, 2, 1, 0]);
//! let mut ticks = 0;
//! while !stepper.advance().converged {
//!     ticks += 1;
//! }
//! assert_eq!(ticks, 3, "the fourth step reports convergence");
//!
//! let values: Vec<u32> = stepper.values().iter().map(|n| n.value()).collect();
//! assert_eq!(values, [0, 1, 2, 3, 4]);
//! ```
//!
//! A seeded RNG gives a reproducible shuffle:
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use stepwise_sort::SortBoard;
//!
//! let mut board = SortBoard::with_rng(4, 16, &mut SmallRng::seed_from_u64(42)).unwrap();
//! while !board.tick().converged {}
//! assert!(board.is_sorted());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod board;
pub mod stepper;
pub mod types;

pub use board::SortBoard;
pub use stepper::SortStepper;
pub use types::{Advance, SortError, SortNode, Tick};
