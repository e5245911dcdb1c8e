// Copyright 2025 the Stepwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stepwise Identity: process-unique handles for diffable items.
//!
//! List widgets that animate changes need to tell items apart even when their
//! data is equal (two sort bars with the same value, two outline rows with the
//! same label). This crate provides the [`Identity`] those items carry.
//!
//! - [`Identity`]: a small, copyable handle drawn from a process-wide counter.
//! - [`Identified`]: implemented by anything that exposes an [`Identity`].
//! - [`identities`] and [`same_members`]: helpers for comparing two snapshots
//!   of the same collection.
//!
//! # Example
//!
//! ```rust
//! use stepwise_identity::{Identity, same_members};
//!
//! let a = Identity::next();
//! let b = Identity::next();
//! assert_ne!(a, b);
//! assert!(a < b, "identities are handed out in increasing order");
//!
//! assert!(same_members(&[a, b], &[b, a]));
//! assert!(!same_members(&[a, b], &[a, a]));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::num::NonZeroU64;
use core::sync::atomic::{AtomicU64, Ordering};

static NEXT: AtomicU64 = AtomicU64::new(1);

/// Identity of an item, independent of its current data.
///
/// ## Semantics
///
/// - Every call to [`Identity::next`] returns a value that no earlier call in
///   this process has returned.
/// - Identities compare, order and hash by value. Later identities compare greater.
/// - An identity is never recycled, so a stale one can never alias a live item.
///
/// ### Notes
///
/// - `u64` is ample for practical lifetimes. The counter never wraps; drawing
///   past its end panics instead of reusing a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identity(NonZeroU64);

impl Identity {
    /// Draw a fresh identity.
    ///
    /// # Panics
    ///
    /// Panics once `u64::MAX - 1` identities have been drawn. The counter never
    /// wraps, so no identity is ever handed out twice.
    pub fn next() -> Self {
        match draw(&NEXT) {
            Some(n) => Self(n),
            None => panic!("identity counter exhausted"),
        }
    }

    /// The raw identity number.
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

/// Take the next value from `counter`, or `None` once it reaches `u64::MAX`.
///
/// An exhausted counter stays at `u64::MAX`.
fn draw(counter: &AtomicU64) -> Option<NonZeroU64> {
    let raw = counter
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
        .ok()?;
    NonZeroU64::new(raw)
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Items that carry an [`Identity`].
pub trait Identified {
    /// The item's identity.
    fn identity(&self) -> Identity;
}

impl Identified for Identity {
    fn identity(&self) -> Identity {
        *self
    }
}

impl<T: Identified + ?Sized> Identified for &T {
    fn identity(&self) -> Identity {
        (**self).identity()
    }
}

/// Collect the identities of `items`, preserving order.
pub fn identities<T: Identified>(items: &[T]) -> Vec<Identity> {
    items.iter().map(Identified::identity).collect()
}

/// Returns true if `a` and `b` hold exactly the same identities, ignoring order.
///
/// Repeated identities are counted, so `[x, x]` and `[x, y]` differ.
pub fn same_members<A: Identified, B: Identified>(a: &[A], b: &[B]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut left: Vec<Identity> = a.iter().map(Identified::identity).collect();
    let mut right: Vec<Identity> = b.iter().map(Identified::identity).collect();
    left.sort_unstable();
    right.sort_unstable();
    left == right
}
