// Copyright 2025 the Stepwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion sort board.
//!
//! Shuffle a few rows and tick them until every row is sorted, printing each frame.
//!
//! Run:
//! - `cargo run -p stepwise_demos --example insertion_sort_board`

use stepwise_identity::same_members;
use stepwise_sort::{SortBoard, SortStepper};
use tracing::Level;

const ROWS: usize = 4;
const COLUMNS: usize = 12;

fn render(stepper: &SortStepper) -> String {
    stepper
        .values()
        .iter()
        .map(|n| format!("{:>3}", n.value()))
        .collect::<Vec<_>>()
        .join("")
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .try_init();

    let mut board = SortBoard::new(ROWS, COLUMNS).expect("column count fits u32");
    let initial: Vec<_> = board.rows().iter().map(|r| r.values().to_vec()).collect();

    let mut frame = 0;
    loop {
        println!("frame {frame}");
        for row in board.rows() {
            println!("  [{}] cursor={:>2}", render(row), row.cursor());
        }
        let tick = board.tick();
        frame += 1;
        if tick.advanced == 0 {
            break;
        }
    }

    for (row, before) in board.rows().iter().zip(&initial) {
        assert!(same_members(before, row.values()), "rows only reorder their nodes");
    }
    println!("sorted after {} frames", frame - 1);
}
