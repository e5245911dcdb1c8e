// Copyright 2025 the Stepwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for the sort stepper.
//!
//! 1. Convergence: at most `n` advances converge, and the result is sorted.
//! 2. Prefix: after each advance `values[..cursor]` is sorted and `values[cursor..]`
//!    is the untouched tail of the initial order.
//! 3. Identity preservation across every advance.
//! 4. Determinism: the same initial order produces the same trace.
//! 5. A seeded shuffle is a permutation of `0..n`.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use stepwise_identity::{Identity, identities, same_members};
use stepwise_sort::{SortNode, SortStepper};

fn values(stepper: &SortStepper) -> Vec<u32> {
    stepper.values().iter().map(SortNode::value).collect()
}

fn is_non_decreasing(values: &[u32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

proptest! {
    #[test]
    fn converges_within_n_advances(initial in proptest::collection::vec(0u32..50, 0..64)) {
        let n = initial.len();
        let mut stepper = SortStepper::from_values(initial);
        let mut steps = 0;
        while !stepper.is_sorted() {
            let _ = stepper.advance();
            steps += 1;
            prop_assert!(steps <= n, "not converged after {} steps", steps);
        }
        prop_assert!(is_non_decreasing(&values(&stepper)));
    }
}

proptest! {
    #[test]
    fn prefix_sorted_and_suffix_untouched(initial in proptest::collection::vec(0u32..20, 2..48)) {
        let mut stepper = SortStepper::from_values(initial.clone());
        while !stepper.is_sorted() {
            let _ = stepper.advance();
            let current = values(&stepper);
            let cursor = stepper.cursor();
            prop_assert!(cursor <= current.len());
            prop_assert!(is_non_decreasing(&current[..cursor]), "prefix {:?}", &current[..cursor]);
            prop_assert_eq!(&current[cursor..], &initial[cursor..]);
        }
    }
}

proptest! {
    #[test]
    fn identities_are_preserved(seed in any::<u64>(), n in 0usize..40) {
        let mut stepper = SortStepper::with_rng(n, &mut SmallRng::seed_from_u64(seed)).unwrap();
        let initial: Vec<Identity> = identities(stepper.values());
        for _ in 0..=n {
            let step = stepper.advance();
            prop_assert!(same_members(&initial, step.nodes));
        }
    }
}

proptest! {
    #[test]
    fn trace_is_deterministic(initial in proptest::collection::vec(0u32..10, 0..32)) {
        let mut a = SortStepper::from_values(initial.clone());
        let mut b = SortStepper::from_values(initial);
        loop {
            let sa = a.advance();
            let (swaps_a, done_a) = (sa.swaps, sa.converged);
            let sb = b.advance();
            prop_assert_eq!(swaps_a, sb.swaps);
            prop_assert_eq!(done_a, sb.converged);
            prop_assert_eq!(values(&a), values(&b));
            if done_a {
                break;
            }
        }
    }
}

proptest! {
    #[test]
    fn shuffle_is_permutation(seed in any::<u64>(), n in 0usize..100) {
        let stepper = SortStepper::with_rng(n, &mut SmallRng::seed_from_u64(seed)).unwrap();
        let mut v = values(&stepper);
        v.sort_unstable();
        let expected: Vec<u32> = (0..n as u32).collect();
        prop_assert_eq!(v, expected);
        prop_assert_eq!(stepper.is_sorted(), n <= 1);
    }
}
