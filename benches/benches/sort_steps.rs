// Copyright 2025 the Stepwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use stepwise_sort::{SortBoard, SortStepper};

fn bench_stepper(c: &mut Criterion) {
    let mut group = c.benchmark_group("stepper");
    for &n in &[64usize, 256, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("advance_to_convergence_n{n}"), |b| {
            b.iter_batched(
                || SortStepper::with_rng(n, &mut SmallRng::seed_from_u64(0xCAFE_F00D)).unwrap(),
                |mut s| {
                    while !s.advance().converged {}
                    black_box(s.values().len());
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("reversed_n{n}"), |b| {
            b.iter_batched(
                || SortStepper::from_values((0..n as u32).rev()),
                |mut s| {
                    while !s.advance().converged {}
                    black_box(s.values().len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("board");
    group.bench_function("tick_to_convergence_16x64", |b| {
        b.iter_batched(
            || SortBoard::with_rng(16, 64, &mut SmallRng::seed_from_u64(0xBADC_F00D)).unwrap(),
            |mut board| {
                while !board.tick().converged {}
                black_box(board.len());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_stepper, bench_board);
criterion_main!(benches);
