// Copyright 2025 the Stepwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use stepwise_outline::{OutlineFlattener, OutlineItem};

/// A complete tree of the given fan-out and depth, every node expanded or not.
fn gen_tree(fanout: usize, depth: usize, expanded: bool) -> OutlineItem {
    let mut item = OutlineItem::new(format!("d{depth}")).with_expanded(expanded);
    if depth > 0 {
        for _ in 0..fanout {
            item = item.child(gen_tree(fanout, depth - 1, expanded));
        }
    }
    item
}

fn node_count(fanout: usize, depth: usize) -> usize {
    (0..=depth).map(|d| fanout.pow(d as u32)).sum()
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");
    for &(fanout, depth) in &[(4usize, 4usize), (8, 4), (4, 7)] {
        let n = node_count(fanout, depth);
        let open = OutlineFlattener::new([gen_tree(fanout, depth, true)]).unwrap();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("all_expanded_f{fanout}_d{depth}"), |b| {
            b.iter(|| black_box(open.flatten().len()));
        });

        // Root collapsed over a fully expanded subtree: cost must not scale with `n`.
        let mut hidden = OutlineFlattener::new([gen_tree(fanout, depth, true)]).unwrap();
        let root = hidden.roots().next().unwrap().id();
        hidden.toggle(root).unwrap();
        group.bench_function(format!("root_collapsed_f{fanout}_d{depth}"), |b| {
            b.iter(|| black_box(hidden.flatten().len()));
        });
    }
    group.finish();
}

fn bench_toggle_then_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle_then_flatten");
    let outline = OutlineFlattener::new([gen_tree(6, 5, true)]).unwrap();
    let mid = outline
        .roots()
        .next()
        .and_then(|r| outline.children(r.id()))
        .and_then(|mut c| c.next())
        .map(|n| n.id())
        .unwrap();
    group.bench_function("toggle_mid_f6_d5", |b| {
        b.iter_batched(
            || outline.clone(),
            |mut o| {
                o.toggle(mid).unwrap();
                black_box(o.flatten().len());
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("lazy_count_f6_d5", |b| {
        b.iter(|| black_box(outline.iter_visible().count()));
    });
    group.finish();
}

criterion_group!(benches, bench_flatten, bench_toggle_then_flatten);
criterion_main!(benches);
